use crate::common::CLEAN_STATS;
use crate::common::command::{committed_repository_dir, porcelain_status, run_stagewatch_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn remove_modified_file_only_with_force(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    let file_path = repository_dir.path().join("1.txt");
    write_file(FileSpec::new(file_path.clone(), "uno\n".to_string()));

    run_stagewatch_command(repository_dir.path(), &["remove", "1.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "the following files have unstaged changes that would be lost:\n\t1.txt\n",
        ));
    assert!(file_path.exists());

    run_stagewatch_command(repository_dir.path(), &["remove", "--force", "1.txt"])
        .assert()
        .success();

    assert!(!file_path.exists());
    assert_eq!(
        porcelain_status(repository_dir.path()),
        format!("staged\tD  1.txt\n{CLEAN_STATS}")
    );
}
