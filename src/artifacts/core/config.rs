//! Per-repository settings read from `stagewatch.toml` in the repository root.

use crate::areas::scheduler::{DEFAULT_FETCH_TIMEOUT, DEFAULT_UPDATE_RATE, PollConfig};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "stagewatch.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Ticks between two scheduled polls.
    pub update_rate: u64,
    pub tick_interval_ms: u64,
    pub fetch_timeout_ms: u64,
    pub include_ignored: bool,
    pub untracked_files_all: bool,
    pub git_binary: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            update_rate: DEFAULT_UPDATE_RATE,
            tick_interval_ms: 16,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT.as_millis() as u64,
            include_ignored: false,
            untracked_files_all: false,
            git_binary: "git".to_string(),
        }
    }
}

impl Config {
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Missing file means defaults; a file that does not parse is an error.
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let path = Self::path(root);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("invalid config in {}", path.display()))
    }

    pub fn poll_config(&self) -> PollConfig {
        PollConfig::new(
            self.update_rate.max(1),
            Duration::from_millis(self.fetch_timeout_ms.max(1)),
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub update_rate: Option<u64>,
    pub tick_interval_ms: Option<u64>,
    pub fetch_timeout_ms: Option<u64>,
    pub include_ignored: Option<bool>,
    pub untracked_files_all: Option<bool>,
    pub git_binary: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(update_rate) = self.update_rate {
            config.update_rate = update_rate;
        }
        if let Some(tick_interval_ms) = self.tick_interval_ms {
            config.tick_interval_ms = tick_interval_ms;
        }
        if let Some(fetch_timeout_ms) = self.fetch_timeout_ms {
            config.fetch_timeout_ms = fetch_timeout_ms;
        }
        if let Some(include_ignored) = self.include_ignored {
            config.include_ignored = include_ignored;
        }
        if let Some(untracked_files_all) = self.untracked_files_all {
            config.untracked_files_all = untracked_files_all;
        }
        if let Some(git_binary) = &self.git_binary {
            config.git_binary = git_binary.clone();
        }
    }
}
