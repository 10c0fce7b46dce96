use crate::common::CLEAN_STATS;
use crate::common::command::{committed_repository_dir, porcelain_status, run_stagewatch_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn stage_working_tree_changes(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "uno\n".to_string(),
    ));
    std::fs::remove_file(repository_dir.path().join("a").join("2.txt")).unwrap();
    write_file(FileSpec::new(
        repository_dir.path().join("new file.txt"),
        "new\n".to_string(),
    ));

    run_stagewatch_command(
        repository_dir.path(),
        &["stage", "1.txt", "a/2.txt", "new file.txt"],
    )
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

    assert_eq!(
        porcelain_status(repository_dir.path()),
        format!("staged\tM  1.txt\nstaged\tD  a/2.txt\nstaged\tA  new file.txt\n{CLEAN_STATS}")
    );
}
