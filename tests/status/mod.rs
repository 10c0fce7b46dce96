mod print_clean_summary_when_nothing_changed;
mod report_ignored_files_when_configured;
mod report_partially_staged_file_in_both_sets;
mod report_paths_with_spaces;
mod report_staged_and_untracked_files;
mod report_staged_rename;
mod report_untracked_file_count;
