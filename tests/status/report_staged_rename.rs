use crate::common::CLEAN_STATS;
use crate::common::command::{
    committed_repository_dir, porcelain_status, run_git_command, run_stagewatch_command,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_staged_rename(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    run_git_command(repository_dir.path(), &["mv", "1.txt", "one.txt"])
        .assert()
        .success();

    assert_eq!(
        porcelain_status(repository_dir.path()),
        format!("staged\tR  1.txt -> one.txt\n{CLEAN_STATS}")
    );

    run_stagewatch_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes to be committed:"))
        .stdout(predicate::str::contains("renamed:    1.txt -> one.txt"));
}
