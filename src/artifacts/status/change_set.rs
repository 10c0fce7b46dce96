use crate::artifacts::status::file_change::{ChangeKey, FileChange};
use std::collections::BTreeMap;

/// Records of one area, keyed by their identity key.
///
/// Entries are inserted once and then only ever removed; an entry that is
/// still reported keeps its selection flag across polls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    entries: BTreeMap<ChangeKey, FileChange>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &ChangeKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &ChangeKey) -> Option<&FileChange> {
        self.entries.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &ChangeKey) -> Option<&mut FileChange> {
        self.entries.get_mut(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ChangeKey> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &FileChange> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChangeKey, &FileChange)> {
        self.entries.iter()
    }

    /// Inserts an unselected copy of `change` unless its key is already present.
    /// Returns whether an insertion happened.
    pub(crate) fn insert_if_absent(&mut self, change: &FileChange) -> bool {
        let key = change.key();
        if self.entries.contains_key(&key) {
            return false;
        }

        self.entries.insert(key, change.unselected());
        true
    }

    pub(crate) fn remove(&mut self, key: &ChangeKey) -> Option<FileChange> {
        self.entries.remove(key)
    }

    pub fn any_selected(&self) -> bool {
        self.entries.values().any(FileChange::is_selected)
    }

    pub fn selected(&self) -> impl Iterator<Item = &FileChange> {
        self.entries.values().filter(|change| change.is_selected())
    }

    pub(crate) fn clear_selection(&mut self) {
        self.entries
            .values_mut()
            .for_each(|change| change.set_selected(false));
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = (&'a ChangeKey, &'a FileChange);
    type IntoIter = std::collections::btree_map::Iter<'a, ChangeKey, FileChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
