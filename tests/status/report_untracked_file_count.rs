use crate::common::command::{committed_repository_dir, porcelain_status};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(1)]
#[case(5)]
#[case(12)]
fn report_untracked_file_count(committed_repository_dir: TempDir, #[case] files_count: usize) {
    let repository_dir = committed_repository_dir;
    let files = write_generated_files(repository_dir.path(), files_count);

    let output = porcelain_status(repository_dir.path());

    for file in &files {
        let name = file.path.file_name().unwrap().to_string_lossy();
        assert!(output.contains(&format!("worktree\t?? {name}\n")));
    }
    assert!(output.ends_with(&format!("untracked={files_count}\n")));
}
