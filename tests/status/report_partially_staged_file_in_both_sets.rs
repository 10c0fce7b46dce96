use crate::common::command::{committed_repository_dir, porcelain_status, run_git_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_partially_staged_file_in_both_sets(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    let file = repository_dir.path().join("1.txt");
    write_file(FileSpec::new(file.clone(), "uno\n".to_string()));
    run_git_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(file, "eins\n".to_string()));

    let expected_output = "staged\tMM 1.txt\n\
        worktree\tMM 1.txt\n\
        stats\tadded=0 copied=0 deleted=0 modified=1 renamed=0 unmerged=0 untracked=0\n";

    assert_eq!(porcelain_status(repository_dir.path()), expected_output);
}
