use crate::common::command::{committed_repository_dir, run_stagewatch_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_to_unstage_unstaged_path(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "uno\n".to_string(),
    ));

    run_stagewatch_command(repository_dir.path(), &["unstage", "1.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'1.txt' has no staged changes"));
}
