use crate::areas::scheduler::PollScheduler;
use crate::areas::tracker::Tracker;
use crate::areas::vcs::GitCli;
use crate::artifacts::core::config::{Config, ConfigOverrides};
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;

/// One watched repository: its settings, its tracker, and the scheduler that
/// keeps the tracker in sync with `git status`.
pub struct Session {
    writer: RefCell<Box<dyn Write>>,
    config: Config,
    tracker: Tracker,
    scheduler: PollScheduler<GitCli>,
}

impl Session {
    /// Opens the repository containing `path` and loads its `stagewatch.toml`,
    /// with `overrides` applied on top.
    pub async fn open(
        path: &Path,
        writer: Box<dyn Write>,
        overrides: &ConfigOverrides,
    ) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        let binary = overrides
            .git_binary
            .clone()
            .unwrap_or_else(|| Config::default().git_binary);

        let root = GitCli::discover(&path, &binary).await?.root().to_path_buf();
        let mut config = Config::load(&root)?;
        overrides.apply(&mut config);

        let git = GitCli::new(root, config.git_binary.clone())
            .with_ignored(config.include_ignored)
            .with_all_untracked_files(config.untracked_files_all);

        tracing::debug!(root = %git.root().display(), ?config, "opened session");

        let scheduler = PollScheduler::new(git, config.poll_config())?;

        Ok(Session {
            writer: RefCell::new(writer),
            config,
            tracker: Tracker::new(),
            scheduler,
        })
    }

    pub fn root(&self) -> &Path {
        self.scheduler.fetcher().root()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Mutable access to the tracker together with the scheduler that feeds it.
    pub fn parts(&mut self) -> (&mut Tracker, &mut PollScheduler<GitCli>) {
        (&mut self.tracker, &mut self.scheduler)
    }
}
