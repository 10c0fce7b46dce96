//! Status report parsing and reconciliation
//!
//! This module turns the line-oriented output of `git status --porcelain` into
//! typed records and keeps the staged and working-tree collections in sync with
//! successive reports.
//!
//! ## Components
//!
//! - `file_state`: The status alphabet shared by both columns of a report
//! - `file_change`: One parsed record and its identity key
//! - `parser`: Report → records, rejecting the whole batch on a bad line
//! - `change_set`: Keyed collection of records for one area
//! - `reconciler`: Incremental add/remove of records across polls
//! - `selection`: Selection flags and the staged/working-tree exclusion rule
//! - `stats`: Per-state counters over the working tree
//! - `action`: Stage, unstage and remove plans for the current selection

pub mod action;
pub mod change_set;
pub mod file_change;
pub mod file_state;
pub mod parser;
pub mod reconciler;
pub mod selection;
pub mod stats;

use crate::artifacts::status::file_state::FileState;

pub const RENAME_SEPARATOR: &str = " -> ";
pub const STATE_CODES: phf::Map<char, FileState> = phf::phf_map! {
    ' ' => FileState::Unmodified,
    'M' => FileState::Modified,
    'A' => FileState::Added,
    'D' => FileState::Deleted,
    'R' => FileState::Renamed,
    'C' => FileState::Copied,
    'U' => FileState::Unmerged,
    '?' => FileState::Untracked,
    '!' => FileState::Ignored,
};
