use crate::artifacts::status::change_set::ChangeSet;
use crate::artifacts::status::file_state::FileState;

/// Counters over the working-tree column of the working-tree set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub added: usize,
    pub copied: usize,
    pub deleted: usize,
    pub modified: usize,
    pub renamed: usize,
    pub unmerged: usize,
    pub untracked: usize,
}

impl Stats {
    pub fn recompute(working_tree: &ChangeSet) -> Self {
        working_tree
            .values()
            .fold(Stats::default(), |mut stats, change| {
                match change.secondary_state() {
                    FileState::Added => stats.added += 1,
                    FileState::Copied => stats.copied += 1,
                    FileState::Deleted => stats.deleted += 1,
                    FileState::Modified => stats.modified += 1,
                    FileState::Renamed => stats.renamed += 1,
                    FileState::Unmerged => stats.unmerged += 1,
                    FileState::Untracked => stats.untracked += 1,
                    FileState::Unmodified | FileState::Ignored => {}
                }
                stats
            })
    }

    pub fn total(&self) -> usize {
        self.added
            + self.copied
            + self.deleted
            + self.modified
            + self.renamed
            + self.unmerged
            + self.untracked
    }

    fn counters(&self) -> [(&'static str, usize); 7] {
        [
            ("modified", self.modified),
            ("added", self.added),
            ("deleted", self.deleted),
            ("renamed", self.renamed),
            ("copied", self.copied),
            ("unmerged", self.unmerged),
            ("untracked", self.untracked),
        ]
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.total() == 0 {
            return write!(f, "working tree clean");
        }

        let parts = self
            .counters()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(label, count)| format!("{} {}", count, label))
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join(", "))
    }
}
