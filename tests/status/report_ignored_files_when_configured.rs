use crate::common::command::{committed_repository_dir, porcelain_status, run_stagewatch_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_ignored_files_when_configured(committed_repository_dir: TempDir) {
    let repository_dir = committed_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join(".gitignore"),
        "*.log\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("debug.log"),
        "noise\n".to_string(),
    ));

    assert!(!porcelain_status(repository_dir.path()).contains("debug.log"));

    run_stagewatch_command(repository_dir.path(), &["status", "--porcelain", "--ignored"])
        .assert()
        .success()
        .stdout(predicate::str::contains("worktree\t!! debug.log\n"));

    write_file(FileSpec::new(
        repository_dir.path().join("stagewatch.toml"),
        "include_ignored = true\n".to_string(),
    ));

    let output = porcelain_status(repository_dir.path());
    assert!(output.contains("worktree\t!! debug.log\n"));
    assert!(output.contains("worktree\t?? stagewatch.toml\n"));
    // ignored entries are not counted
    assert!(output.ends_with("untracked=2\n"));
}
