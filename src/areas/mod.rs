//! Stateful components of a watched repository
//!
//! - `vcs`: Status and diff sources, and the `git` command-line adapter
//! - `tracker`: Staged and working-tree sets with their derived caches
//! - `scheduler`: Tick-driven polling and asynchronous fetch completion
//! - `session`: One repository with its settings, tracker and scheduler

pub mod scheduler;
pub mod session;
pub mod tracker;
pub mod vcs;
