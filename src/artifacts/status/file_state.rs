use crate::artifacts::status::STATE_CODES;
use colored::{ColoredString, Colorize};

const LABEL_WIDTH: usize = 8;

/// One column of a two-character status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum FileState {
    #[default]
    Unmodified,
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    Unmerged,
    Untracked,
    Ignored,
}

impl FileState {
    pub fn from_code(code: char) -> Option<Self> {
        STATE_CODES.get(&code).copied()
    }

    pub fn code(&self) -> char {
        match self {
            FileState::Unmodified => ' ',
            FileState::Modified => 'M',
            FileState::Added => 'A',
            FileState::Deleted => 'D',
            FileState::Renamed => 'R',
            FileState::Copied => 'C',
            FileState::Unmerged => 'U',
            FileState::Untracked => '?',
            FileState::Ignored => '!',
        }
    }

    /// Unmodified, untracked and ignored entries carry no change on their own axis.
    pub fn is_change(&self) -> bool {
        !matches!(
            self,
            FileState::Unmodified | FileState::Untracked | FileState::Ignored
        )
    }

    pub fn is_rename_or_copy(&self) -> bool {
        matches!(self, FileState::Renamed | FileState::Copied)
    }

    pub fn label(&self) -> ColoredString {
        match self {
            FileState::Unmodified => "".normal(),
            FileState::Modified => "modified:   ".yellow(),
            FileState::Added => "new file:   ".green(),
            FileState::Deleted => "deleted:    ".red(),
            FileState::Renamed => "renamed:    ".cyan(),
            FileState::Copied => "copied:     ".cyan(),
            FileState::Unmerged => "unmerged:   ".magenta(),
            FileState::Untracked => "untracked:  ".normal(),
            FileState::Ignored => "ignored:    ".dimmed(),
        }
    }
}

impl From<&FileState> for &str {
    fn from(state: &FileState) -> Self {
        match state {
            FileState::Unmodified => "unmodified",
            FileState::Modified => "modified",
            FileState::Added => "added",
            FileState::Deleted => "deleted",
            FileState::Renamed => "renamed",
            FileState::Copied => "copied",
            FileState::Unmerged => "unmerged",
            FileState::Untracked => "untracked",
            FileState::Ignored => "ignored",
        }
    }
}

impl std::fmt::Display for FileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>width$}{}", "", self.label(), width = LABEL_WIDTH)
    }
}
