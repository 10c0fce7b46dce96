use crate::common::command::{committed_repository_dir, porcelain_status, run_git_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_paths_with_spaces(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    run_git_command(repository_dir.path(), &["mv", "1.txt", "first -> file.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("my notes.txt"),
        "notes\n".to_string(),
    ));

    assert_eq!(
        porcelain_status(repository_dir.path()),
        "staged\tR  1.txt -> first -> file.txt\n\
         worktree\t?? my notes.txt\n\
         stats\tadded=0 copied=0 deleted=0 modified=0 renamed=0 unmerged=0 untracked=1\n"
    );
}
