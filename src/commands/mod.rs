//! Command implementations
//!
//! `status`, `watch`, `diff` and the index updates in `stage` run against a
//! live [`Session`](crate::areas::session::Session); `parse` reconciles a
//! saved report without touching a repository. `render` holds the output
//! formats they share.

pub mod diff;
pub mod parse;
pub mod render;
pub mod stage;
pub mod status;
pub mod watch;
