mod parse_report_from_file;
mod parse_report_from_stdin;
mod reject_malformed_report;
