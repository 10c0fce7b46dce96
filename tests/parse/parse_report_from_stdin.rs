use crate::common::command::{repository_dir, run_stagewatch_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn parse_report_from_stdin(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let report = "M  a.txt\nA  b.txt\n?? c.txt\n";
    let expected_output = "staged\tM  a.txt\n\
        staged\tA  b.txt\n\
        worktree\t?? c.txt\n\
        stats\tadded=0 copied=0 deleted=0 modified=0 renamed=0 unmerged=0 untracked=1\n";

    let output = run_stagewatch_command(repository_dir.path(), &["parse", "--porcelain"])
        .write_stdin(report)
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
