use crate::common::command::{committed_repository_dir, run_git_command, run_stagewatch_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_diff_for_path_with_spaces(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    let file_path = repository_dir.path().join("a b.txt");
    write_file(FileSpec::new(file_path.clone(), "before\n".to_string()));
    run_git_command(repository_dir.path(), &["add", "a b.txt"])
        .assert()
        .success();
    run_git_command(repository_dir.path(), &["commit", "--quiet", "-m", "Add a b.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(file_path, "after\n".to_string()));

    run_stagewatch_command(repository_dir.path(), &["diff", "a b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-before\n+after\n"));
}
