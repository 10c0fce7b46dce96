use crate::common::CLEAN_STATS;
use crate::common::command::{committed_repository_dir, porcelain_status, run_stagewatch_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_clean_summary_when_nothing_changed(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;

    let output = run_stagewatch_command(repository_dir.path(), &["status"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(actual_output, "working tree clean\n");
    assert_eq!(porcelain_status(repository_dir.path()), CLEAN_STATS);

    Ok(())
}
