use crate::common::command::{repository_dir, run_stagewatch_command};
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn parse_report_from_file(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    repository_dir
        .child("status.txt")
        .write_str("RM src/old.rs -> src/new.rs\n D gone.txt\nUU conflict.txt\n")?;
    let expected_output = "Changes to be committed:\n\
        \x20       unmerged:   conflict.txt\n\
        \x20       renamed:    src/old.rs -> src/new.rs\n\
        \n\
        Changes not staged for commit:\n\
        \x20       unmerged:   conflict.txt\n\
        \x20       deleted:    gone.txt\n\
        \x20       modified:   src/old.rs -> src/new.rs\n\
        \n\
        1 modified, 1 deleted, 1 unmerged\n";

    let output = run_stagewatch_command(repository_dir.path(), &["parse", "status.txt"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
