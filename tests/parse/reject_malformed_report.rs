use crate::common::command::{repository_dir, run_stagewatch_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("M  a.txt\nXY b.txt\n", "malformed status line 2 'XY b.txt': unknown state code 'X'")]
#[case("R  a.txt\n", "rename or copy is missing the ' -> ' separator")]
#[case(" M \n", "path is empty")]
fn reject_malformed_report(repository_dir: TempDir, #[case] report: &str, #[case] message: &str) {
    run_stagewatch_command(repository_dir.path(), &["parse", "--porcelain"])
        .write_stdin(report)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(message));
}
