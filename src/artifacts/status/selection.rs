use crate::artifacts::status::change_set::ChangeSet;
use crate::artifacts::status::file_change::{Area, ChangeKey, FileChange};
use derive_new::new;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no {area} entry with key '{key}'")]
    UnknownFile { area: Area, key: ChangeKey },
    #[error("'{path}' has no {area} changes")]
    UnknownPath { area: Area, path: String },
}

/// Addresses one entry of one set; a key may be present in both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct FileSelector {
    pub area: Area,
    pub key: ChangeKey,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SelectedFile {
    pub area: Area,
    pub change: FileChange,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub staged_any_selected: bool,
    pub working_tree_any_selected: bool,
    pub any_selected: bool,
    /// Working-tree selections first, then staged ones.
    pub selected_files: Vec<SelectedFile>,
}

impl SelectionSnapshot {
    pub fn selected_in(&self, area: Area) -> impl Iterator<Item = &FileChange> {
        self.selected_files
            .iter()
            .filter(move |file| file.area == area)
            .map(|file| &file.change)
    }
}

#[derive(Debug, Default)]
pub struct SelectionController {
    snapshot: SelectionSnapshot,
    generation: u64,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_snapshot(&self) -> &SelectionSnapshot {
        &self.snapshot
    }

    /// Bumped whenever the set of selected files changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies `selected` to `target` (if any) and recomputes the snapshot.
    ///
    /// Selecting a file in one area while the other area has selections clears
    /// the other area: a selection batch never mixes staged and unstaged files.
    /// Deselecting never clears anything else. Passing no target only recomputes.
    pub fn set_selection(
        &mut self,
        staged: &mut ChangeSet,
        working_tree: &mut ChangeSet,
        target: Option<&FileSelector>,
        selected: bool,
    ) -> Result<&SelectionSnapshot, SelectionError> {
        if let Some(target) = target {
            let set = match target.area {
                Area::Staged => &mut *staged,
                Area::WorkingTree => &mut *working_tree,
            };
            let change = set
                .get_mut(&target.key)
                .ok_or_else(|| SelectionError::UnknownFile {
                    area: target.area,
                    key: target.key.clone(),
                })?;
            change.set_selected(selected);
        }

        let mut staged_any_selected = staged.any_selected();
        let mut working_tree_any_selected = working_tree.any_selected();

        if let Some(target) = target.filter(|_| selected) {
            match target.area {
                Area::Staged if working_tree_any_selected => {
                    working_tree.clear_selection();
                    working_tree_any_selected = false;
                }
                Area::WorkingTree if staged_any_selected => {
                    staged.clear_selection();
                    staged_any_selected = false;
                }
                _ => {}
            }
        }

        self.refresh(
            staged,
            working_tree,
            staged_any_selected,
            working_tree_any_selected,
        );

        Ok(&self.snapshot)
    }

    /// Deselects every entry of both sets.
    pub fn clear(&mut self, staged: &mut ChangeSet, working_tree: &mut ChangeSet) {
        staged.clear_selection();
        working_tree.clear_selection();
        self.refresh(staged, working_tree, false, false);
    }

    fn refresh(
        &mut self,
        staged: &ChangeSet,
        working_tree: &ChangeSet,
        staged_any_selected: bool,
        working_tree_any_selected: bool,
    ) {
        let selected_files = working_tree
            .selected()
            .map(|change| SelectedFile::new(Area::WorkingTree, change.clone()))
            .chain(
                staged
                    .selected()
                    .map(|change| SelectedFile::new(Area::Staged, change.clone())),
            )
            .collect::<Vec<_>>();

        if selected_files != self.snapshot.selected_files {
            self.generation += 1;
        }

        self.snapshot = SelectionSnapshot {
            staged_any_selected,
            working_tree_any_selected,
            any_selected: staged_any_selected || working_tree_any_selected,
            selected_files,
        };
    }
}
