//! Text renderings of a [`Tracker`]
//!
//! The human form groups entries the way `git status` does. The porcelain
//! form is one tab-separated record per line and never contains colour codes:
//!
//! ```text
//! staged<TAB>M  src/lib.rs
//! worktree<TAB>?? notes.txt
//! stats<TAB>added=0 copied=0 deleted=0 modified=0 renamed=0 unmerged=0 untracked=1
//! ```

use crate::areas::tracker::Tracker;
use crate::artifacts::status::change_set::ChangeSet;
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::file_state::FileState;
use crate::artifacts::status::stats::Stats;
use colored::Colorize;
use std::io::Write;

pub fn human(writer: &mut dyn Write, tracker: &Tracker) -> anyhow::Result<()> {
    let staged = tracker.staged();
    let working_tree = tracker.working_tree();

    let unstaged = entries_with(working_tree, |state| state.is_change());
    let untracked = entries_with(working_tree, |state| state == FileState::Untracked);
    let ignored = entries_with(working_tree, |state| state == FileState::Ignored);

    if !staged.is_empty() {
        writeln!(writer, "Changes to be committed:")?;
        for change in staged.values() {
            writeln!(writer, "{}{}", change.primary_state(), paths(change).green())?;
        }
        writeln!(writer)?;
    }

    if !unstaged.is_empty() {
        writeln!(writer, "Changes not staged for commit:")?;
        for change in unstaged {
            writeln!(writer, "{}{}", change.secondary_state(), paths(change).red())?;
        }
        writeln!(writer)?;
    }

    for (title, changes) in [("Untracked files:", untracked), ("Ignored files:", ignored)] {
        if changes.is_empty() {
            continue;
        }

        writeln!(writer, "{title}")?;
        for change in changes {
            writeln!(writer, "\t{}", change.display_path().red())?;
        }
        writeln!(writer)?;
    }

    writeln!(writer, "{}", tracker.stats())?;
    Ok(())
}

pub fn porcelain(writer: &mut dyn Write, tracker: &Tracker) -> anyhow::Result<()> {
    for change in tracker.staged().values() {
        writeln!(writer, "staged\t{change}")?;
    }
    for change in tracker.working_tree().values() {
        writeln!(writer, "worktree\t{change}")?;
    }
    writeln!(writer, "stats\t{}", stats_record(&tracker.stats()))?;
    Ok(())
}

pub fn stats_record(stats: &Stats) -> String {
    format!(
        "added={} copied={} deleted={} modified={} renamed={} unmerged={} untracked={}",
        stats.added,
        stats.copied,
        stats.deleted,
        stats.modified,
        stats.renamed,
        stats.unmerged,
        stats.untracked
    )
}

/// Colours unified diff text line by line; the text itself is not altered.
pub fn diff(writer: &mut dyn Write, diff: &str) -> anyhow::Result<()> {
    for line in diff.lines() {
        let is_header = ["diff --git", "index ", "+++", "---"]
            .iter()
            .any(|prefix| line.starts_with(prefix));

        let line = if is_header {
            line.bold()
        } else if line.starts_with("@@") {
            line.cyan()
        } else if line.starts_with('+') {
            line.green()
        } else if line.starts_with('-') {
            line.red()
        } else {
            line.normal()
        };
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

fn entries_with(set: &ChangeSet, predicate: impl Fn(FileState) -> bool) -> Vec<&FileChange> {
    set.values()
        .filter(|change| predicate(change.secondary_state()))
        .collect()
}

fn paths(change: &FileChange) -> String {
    if change.path_secondary().is_empty() {
        change.path_primary().to_string()
    } else {
        format!("{} -> {}", change.path_primary(), change.path_secondary())
    }
}
