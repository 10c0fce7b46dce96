//! Incremental reconciliation of the staged and working-tree sets
//!
//! Each poll produces a fresh batch of records. Rather than rebuilding both
//! sets, the reconciler diffs them against the batch:
//!
//! 1. Prune every entry whose key no longer appears in the batch with a record
//!    that qualifies for that area.
//! 2. Insert every qualifying record whose key is not present yet.
//!
//! Entries that survive are never replaced, so their selection flag sticks.
//! A record may qualify for both areas (staged, then edited again) and is then
//! present in both sets.

use crate::artifacts::status::change_set::ChangeSet;
use crate::artifacts::status::file_change::{Area, ChangeKey, FileChange, Membership};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub staged_inserted: usize,
    pub staged_pruned: usize,
    pub working_tree_inserted: usize,
    pub working_tree_pruned: usize,
}

impl ReconcileSummary {
    pub fn is_unchanged(&self) -> bool {
        *self == Self::default()
    }
}

pub fn reconcile(
    staged: &mut ChangeSet,
    working_tree: &mut ChangeSet,
    fresh: &[FileChange],
) -> ReconcileSummary {
    let fresh = fresh
        .iter()
        .map(|change| (change.membership(), change))
        .collect::<Vec<_>>();
    let (staged_inserted, staged_pruned) = reconcile_area(staged, Area::Staged, &fresh);
    let (working_tree_inserted, working_tree_pruned) =
        reconcile_area(working_tree, Area::WorkingTree, &fresh);

    ReconcileSummary {
        staged_inserted,
        staged_pruned,
        working_tree_inserted,
        working_tree_pruned,
    }
}

fn reconcile_area(
    set: &mut ChangeSet,
    area: Area,
    fresh: &[(Membership, &FileChange)],
) -> (usize, usize) {
    let qualifying = fresh
        .iter()
        .filter(|(membership, _)| membership.contains(Membership::from(area)))
        .map(|(_, change)| *change)
        .collect::<Vec<_>>();
    let qualifying_keys = qualifying
        .iter()
        .map(|change| change.key())
        .collect::<BTreeSet<_>>();

    let stale = set
        .keys()
        .filter(|key| !qualifying_keys.contains(*key))
        .cloned()
        .collect::<Vec<ChangeKey>>();
    for key in stale.iter() {
        set.remove(key);
    }

    let inserted = qualifying
        .into_iter()
        .filter(|change| set.insert_if_absent(change))
        .count();

    (inserted, stale.len())
}
