use crate::artifacts::status::action::{ActionPlan, FileAction};
use anyhow::Context;
use derive_new::new;
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Supplies raw status reports in the `XY path` / `XY old -> new` line format.
pub trait StatusFetcher: Send + Sync + 'static {
    fn fetch_status(&self) -> impl Future<Output = anyhow::Result<String>> + Send;
}

/// Supplies raw diff text for a list of paths; the text is kept verbatim.
pub trait DiffFetcher: Send + Sync + 'static {
    fn fetch_diff(
        &self,
        paths: Vec<String>,
    ) -> impl Future<Output = anyhow::Result<String>> + Send;
}

/// Applies an [`ActionPlan`] to the index. `force` lets a removal discard
/// unstaged edits.
pub trait IndexWriter: Send + Sync + 'static {
    fn apply(&self, plan: &ActionPlan, force: bool)
    -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Runs the `git` binary inside a repository.
#[derive(Debug, Clone, new)]
pub struct GitCli {
    root: PathBuf,
    binary: String,
    #[new(default)]
    include_ignored: bool,
    #[new(default)]
    untracked_files_all: bool,
}

impl GitCli {
    /// Resolves the top-level directory of the repository containing `path`.
    pub async fn discover(path: &Path, binary: &str) -> anyhow::Result<Self> {
        let output = Command::new(binary)
            .current_dir(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .await
            .with_context(|| format!("failed to run {binary}"))?;

        if !output.status.success() {
            anyhow::bail!("not a git repository: {}", path.display());
        }

        let root = String::from_utf8(output.stdout)?;
        Ok(Self::new(PathBuf::from(root.trim()), binary.to_string()))
    }

    pub fn with_ignored(mut self, include_ignored: bool) -> Self {
        self.include_ignored = include_ignored;
        self
    }

    pub fn with_all_untracked_files(mut self, untracked_files_all: bool) -> Self {
        self.untracked_files_all = untracked_files_all;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn status_args(&self) -> Vec<String> {
        let mut args = vec![
            "-c".to_string(),
            "core.quotepath=off".to_string(),
            "status".to_string(),
            "--porcelain".to_string(),
        ];
        if self.include_ignored {
            args.push("--ignored".to_string());
        }
        if self.untracked_files_all {
            args.push("--untracked-files=all".to_string());
        }
        args
    }

    fn action_args(plan: &ActionPlan, force: bool) -> Vec<String> {
        let command: &[&str] = match plan.action {
            FileAction::Stage => &["add", "--all"],
            FileAction::Unstage => &["reset", "--quiet", "HEAD"],
            FileAction::Remove if force => &["rm", "--quiet", "--force"],
            FileAction::Remove => &["rm", "--quiet"],
        };

        Self::pathspec_args(command, &plan.paths)
    }

    /// Paths are matched literally, so names with glob characters stay exact.
    fn pathspec_args(command: &[&str], paths: &[String]) -> Vec<String> {
        let mut args = vec!["--literal-pathspecs".to_string()];
        args.extend(command.iter().map(ToString::to_string));
        args.push("--".to_string());
        args.extend(paths.iter().cloned());
        args
    }

    async fn run(&self, args: &[String]) -> anyhow::Result<String> {
        tracing::debug!(root = %self.root.display(), ?args, "running {}", self.binary);

        // Dropping the future (on timeout) must not leave the child running.
        let output = Command::new(&self.binary)
            .current_dir(&self.root)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to run {} {}", self.binary, args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "{} {} exited with {}: {}",
                self.binary,
                args.join(" "),
                output.status,
                stderr.trim()
            );
        }

        String::from_utf8(output.stdout).context("git output is not valid UTF-8")
    }
}

impl StatusFetcher for GitCli {
    async fn fetch_status(&self) -> anyhow::Result<String> {
        self.run(&self.status_args()).await
    }
}

impl DiffFetcher for GitCli {
    async fn fetch_diff(&self, paths: Vec<String>) -> anyhow::Result<String> {
        self.run(&Self::pathspec_args(&["diff"], &paths)).await
    }
}

impl IndexWriter for GitCli {
    async fn apply(&self, plan: &ActionPlan, force: bool) -> anyhow::Result<()> {
        self.run(&Self::action_args(plan, force)).await?;
        Ok(())
    }
}
