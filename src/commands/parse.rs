use crate::areas::tracker::Tracker;
use crate::commands::render;
use std::io::Write;

/// Reconciles a saved status report into empty sets and prints the result.
/// Nothing is printed when the report has a malformed line.
pub fn parse_report(report: &str, writer: &mut dyn Write, porcelain: bool) -> anyhow::Result<()> {
    let mut tracker = Tracker::new();
    tracker.apply_report(report)?;

    if porcelain {
        render::porcelain(writer, &tracker)
    } else {
        render::human(writer, &tracker)
    }
}
