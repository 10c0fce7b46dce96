//! The reconciliation engine owned by one repository session.
//!
//! A `Tracker` holds the staged and working-tree sets together with every
//! cache derived from them. Each mutation recomputes the caches before
//! returning, so readers never see a half-applied poll.

use crate::artifacts::status::action::{self, ActionError, ActionPlan, FileAction};
use crate::artifacts::status::change_set::ChangeSet;
use crate::artifacts::status::file_change::{Area, ChangeKey, FileChange};
use crate::artifacts::status::parser::{self, ParseError};
use crate::artifacts::status::reconciler::{self, ReconcileSummary};
use crate::artifacts::status::selection::{
    FileSelector, SelectionController, SelectionError, SelectionSnapshot,
};
use crate::artifacts::status::stats::Stats;
use chrono::{DateTime, Local};

#[derive(Debug, Default)]
pub struct Tracker {
    staged: ChangeSet,
    working_tree: ChangeSet,
    selection: SelectionController,
    stats: Stats,
    diff: String,
    last_polled: Option<DateTime<Local>>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staged(&self) -> &ChangeSet {
        &self.staged
    }

    pub fn working_tree(&self) -> &ChangeSet {
        &self.working_tree
    }

    pub fn set(&self, area: Area) -> &ChangeSet {
        match area {
            Area::Staged => &self.staged,
            Area::WorkingTree => &self.working_tree,
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn selection(&self) -> &SelectionSnapshot {
        self.selection.current_snapshot()
    }

    pub fn selection_generation(&self) -> u64 {
        self.selection.generation()
    }

    pub fn diff(&self) -> &str {
        &self.diff
    }

    pub fn last_polled(&self) -> Option<DateTime<Local>> {
        self.last_polled
    }

    /// Parses a raw report and reconciles it. A report with a bad line is
    /// rejected before either set is touched.
    pub fn apply_report(&mut self, report: &str) -> Result<ReconcileSummary, ParseError> {
        let fresh = parser::parse(report)?;
        Ok(self.apply_changes(&fresh))
    }

    pub fn apply_changes(&mut self, fresh: &[FileChange]) -> ReconcileSummary {
        let summary = reconciler::reconcile(&mut self.staged, &mut self.working_tree, fresh);
        self.revalidate_selection();
        self.stats = Stats::recompute(&self.working_tree);
        self.last_polled = Some(Local::now());

        tracing::debug!(
            records = fresh.len(),
            staged = self.staged.len(),
            working_tree = self.working_tree.len(),
            ?summary,
            "reconciled status report"
        );

        summary
    }

    pub fn set_selection(
        &mut self,
        target: Option<&FileSelector>,
        selected: bool,
    ) -> Result<&SelectionSnapshot, SelectionError> {
        let generation = self.selection.generation();
        self.selection
            .set_selection(&mut self.staged, &mut self.working_tree, target, selected)?;
        self.invalidate_diff(generation);

        Ok(self.selection.current_snapshot())
    }

    pub fn clear_selection(&mut self) {
        let generation = self.selection.generation();
        self.selection.clear(&mut self.staged, &mut self.working_tree);
        self.invalidate_diff(generation);
    }

    /// Finds the key of the entry in `area` whose current or original path is `path`.
    pub fn find(&self, area: Area, path: &str) -> Option<ChangeKey> {
        self.set(area)
            .iter()
            .find(|(_, change)| change.display_path() == path || change.path_primary() == path)
            .map(|(key, _)| key.clone())
    }

    /// Replaces the selection with the entries of `area` matching `paths`.
    /// Nothing changes when one of the paths is not listed there.
    pub fn select_paths(
        &mut self,
        area: Area,
        paths: &[String],
    ) -> Result<&SelectionSnapshot, SelectionError> {
        let keys = paths
            .iter()
            .map(|path| {
                self.find(area, path)
                    .ok_or_else(|| SelectionError::UnknownPath {
                        area,
                        path: path.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.clear_selection();
        for key in keys {
            self.set_selection(Some(&FileSelector::new(area, key)), true)?;
        }

        Ok(self.selection.current_snapshot())
    }

    /// What `action` would do to the current selection.
    pub fn plan(&self, action: FileAction) -> Result<ActionPlan, ActionError> {
        action::plan(action, self.selection())
    }

    /// Present in both sets: staged, then changed again in the working tree.
    pub fn is_partially_staged(&self, key: &ChangeKey) -> bool {
        self.staged.contains_key(key) && self.working_tree.contains_key(key)
    }

    /// Paths to diff for the current selection. Only working-tree selections
    /// have a working-tree diff.
    pub fn diff_paths(&self) -> Vec<String> {
        self.selection()
            .selected_in(Area::WorkingTree)
            .map(|change| change.display_path().to_string())
            .collect()
    }

    /// Stores a diff fetched for selection `generation`; a diff for a
    /// superseded selection is dropped.
    pub fn accept_diff(&mut self, generation: u64, diff: String) -> bool {
        if generation != self.selection.generation() {
            tracing::debug!(
                generation,
                current = self.selection.generation(),
                "discarding diff for a superseded selection"
            );
            return false;
        }

        self.diff = diff;
        true
    }

    fn revalidate_selection(&mut self) {
        let generation = self.selection.generation();
        if let Err(e) =
            self.selection
                .set_selection(&mut self.staged, &mut self.working_tree, None, false)
        {
            tracing::error!("selection recompute failed: {e}");
        }
        self.invalidate_diff(generation);
    }

    fn invalidate_diff(&mut self, previous_generation: u64) {
        if previous_generation != self.selection.generation() {
            self.diff.clear();
        }
    }
}
