use crate::common::command::{committed_repository_dir, run_git_command, run_stagewatch_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_staged_and_untracked_files(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;
    write_file(FileSpec::new(
        repository_dir.path().join("new.txt"),
        "new\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("scratch.txt"),
        "scratch\n".to_string(),
    ));
    run_git_command(repository_dir.path(), &["add", "new.txt"])
        .assert()
        .success();

    let expected_output = "staged\tA  new.txt\n\
        worktree\t?? scratch.txt\n\
        stats\tadded=0 copied=0 deleted=0 modified=0 renamed=0 unmerged=0 untracked=1\n";
    let output = run_stagewatch_command(repository_dir.path(), &["status", "--porcelain"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(actual_output, expected_output);

    Ok(())
}
