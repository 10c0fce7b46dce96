//! Index updates driven by the current selection
//!
//! A selection batch never mixes staged and unstaged files, so the batch
//! alone decides what a button press means:
//!
//! - stage: every selected file, from either set
//! - unstage: the staged selection, both sides of a rename included
//! - remove: the working-tree selection; with a staged selection it unstages
//!
//! Removing a file that still has unstaged edits loses them. Those files are
//! listed in [`ActionPlan::at_risk`] so the caller can ask before going on.

use crate::artifacts::status::file_change::{Area, FileChange};
use crate::artifacts::status::file_state::FileState;
use crate::artifacts::status::selection::SelectionSnapshot;
use derive_new::new;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileAction {
    Stage,
    Unstage,
    Remove,
}

impl std::fmt::Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileAction::Stage => write!(f, "stage"),
            FileAction::Unstage => write!(f, "unstage"),
            FileAction::Remove => write!(f, "remove"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("no files are selected")]
    NothingSelected,
    #[error("only staged files can be unstaged")]
    NothingStaged,
}

/// The command a selection resolves to.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ActionPlan {
    pub action: FileAction,
    pub paths: Vec<String>,
    /// Files whose unstaged edits would be lost.
    #[new(default)]
    pub at_risk: Vec<String>,
}

pub fn plan(action: FileAction, selection: &SelectionSnapshot) -> Result<ActionPlan, ActionError> {
    if !selection.any_selected {
        return Err(ActionError::NothingSelected);
    }

    match action {
        FileAction::Stage => {
            let changes = selection.selected_files.iter().map(|file| &file.change);
            Ok(ActionPlan::new(FileAction::Stage, display_paths(changes)))
        }
        FileAction::Unstage => unstage(selection),
        FileAction::Remove if selection.staged_any_selected => unstage(selection),
        FileAction::Remove => {
            let paths = display_paths(selection.selected_in(Area::WorkingTree));
            Ok(ActionPlan {
                at_risk: changes_at_risk(selection.selected_in(Area::WorkingTree)),
                ..ActionPlan::new(FileAction::Remove, paths)
            })
        }
    }
}

/// Selected files with unstaged modifications, by the path a user would recognise.
pub fn changes_at_risk<'a>(changes: impl IntoIterator<Item = &'a FileChange>) -> Vec<String> {
    changes
        .into_iter()
        .filter(|change| change.secondary_state() == FileState::Modified)
        .map(|change| change.display_path().to_string())
        .collect()
}

fn unstage(selection: &SelectionSnapshot) -> Result<ActionPlan, ActionError> {
    if !selection.staged_any_selected {
        return Err(ActionError::NothingStaged);
    }

    // both sides, so the old path returns to the index as well
    let mut paths = Vec::new();
    for change in selection.selected_in(Area::Staged) {
        for path in [change.path_primary(), change.path_secondary()] {
            if !path.is_empty() && !paths.iter().any(|known| known == path) {
                paths.push(path.to_string());
            }
        }
    }

    Ok(ActionPlan::new(FileAction::Unstage, paths))
}

fn display_paths<'a>(changes: impl Iterator<Item = &'a FileChange>) -> Vec<String> {
    let mut paths: Vec<String> = Vec::new();
    for change in changes {
        let path = change.display_path();
        if !paths.iter().any(|known| known == path) {
            paths.push(path.to_string());
        }
    }
    paths
}
