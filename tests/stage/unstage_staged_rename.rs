use crate::common::command::{
    committed_repository_dir, porcelain_status, run_git_command, run_stagewatch_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn unstage_staged_rename(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    run_git_command(repository_dir.path(), &["mv", "1.txt", "one.txt"])
        .assert()
        .success();

    run_stagewatch_command(repository_dir.path(), &["unstage", "one.txt"])
        .assert()
        .success();

    assert_eq!(
        porcelain_status(repository_dir.path()),
        "worktree\t D 1.txt\n\
         worktree\t?? one.txt\n\
         stats\tadded=0 copied=0 deleted=1 modified=0 renamed=0 unmerged=0 untracked=1\n"
    );
}
