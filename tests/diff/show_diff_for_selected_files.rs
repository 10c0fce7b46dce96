use crate::common::command::{committed_repository_dir, run_stagewatch_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::{PredicateBooleanExt, predicate};
use rstest::rstest;

#[rstest]
fn show_diff_for_selected_file(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "uno\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "dos\n".to_string(),
    ));

    run_stagewatch_command(repository_dir.path(), &["diff", "1.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("diff --git a/1.txt b/1.txt"))
        .stdout(predicate::str::contains("-one\n+uno\n"))
        .stdout(predicate::str::contains("2.txt").not());
}

#[rstest]
fn show_diff_for_every_unstaged_change(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "uno\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "dos\n".to_string(),
    ));

    run_stagewatch_command(repository_dir.path(), &["diff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+uno\n"))
        .stdout(predicate::str::contains("+dos\n"));
}

#[rstest]
fn print_nothing_when_working_tree_is_clean(committed_repository_dir: TempDir) {
    run_stagewatch_command(committed_repository_dir.path(), &["diff"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
