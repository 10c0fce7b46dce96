use crate::artifacts::status::RENAME_SEPARATOR;
use crate::artifacts::status::file_state::FileState;
use bitflags::bitflags;
use derive_new::new;

/// Identity of a record within one change set: primary path followed by secondary path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct ChangeKey(String);

impl ChangeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChangeKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl AsRef<str> for ChangeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChangeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two collections a record can be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Area {
    Staged,
    WorkingTree,
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Area::Staged => write!(f, "staged"),
            Area::WorkingTree => write!(f, "working tree"),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Membership: u8 {
        const NONE = 0b00;
        const STAGED = 0b01;
        const WORKING_TREE = 0b10;
        const BOTH = Self::STAGED.bits() | Self::WORKING_TREE.bits();
    }
}

impl From<Area> for Membership {
    fn from(area: Area) -> Self {
        match area {
            Area::Staged => Membership::STAGED,
            Area::WorkingTree => Membership::WORKING_TREE,
        }
    }
}

/// One line of a status report.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileChange {
    primary_state: FileState,
    secondary_state: FileState,
    path_primary: String,
    #[new(default)]
    path_secondary: String,
    #[new(default)]
    selected: bool,
}

impl FileChange {
    pub fn renamed(
        primary_state: FileState,
        secondary_state: FileState,
        from: String,
        to: String,
    ) -> Self {
        Self {
            primary_state,
            secondary_state,
            path_primary: from,
            path_secondary: to,
            selected: false,
        }
    }

    pub fn primary_state(&self) -> FileState {
        self.primary_state
    }

    pub fn secondary_state(&self) -> FileState {
        self.secondary_state
    }

    pub fn path_primary(&self) -> &str {
        &self.path_primary
    }

    pub fn path_secondary(&self) -> &str {
        &self.path_secondary
    }

    /// The path a user or a diff tool cares about: the destination for renames and copies.
    pub fn display_path(&self) -> &str {
        if self.path_secondary.is_empty() {
            &self.path_primary
        } else {
            &self.path_secondary
        }
    }

    pub fn key(&self) -> ChangeKey {
        ChangeKey(format!("{}{}", self.path_primary, self.path_secondary))
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn belongs_to_staged(&self) -> bool {
        self.primary_state.is_change()
    }

    pub fn belongs_to_working_tree(&self) -> bool {
        self.secondary_state.is_change()
            || (self.primary_state == FileState::Untracked
                && self.secondary_state == FileState::Untracked)
            || (self.primary_state == FileState::Ignored
                && self.secondary_state == FileState::Ignored)
    }

    pub fn membership(&self) -> Membership {
        let mut membership = Membership::NONE;
        if self.belongs_to_staged() {
            membership |= Membership::STAGED;
        }
        if self.belongs_to_working_tree() {
            membership |= Membership::WORKING_TREE;
        }
        membership
    }

    /// A fresh, unselected copy for insertion into a change set.
    pub(crate) fn unselected(&self) -> Self {
        Self {
            selected: false,
            ..self.clone()
        }
    }
}

impl From<&FileChange> for String {
    fn from(change: &FileChange) -> Self {
        if change.path_secondary.is_empty() {
            format!(
                "{}{} {}",
                change.primary_state.code(),
                change.secondary_state.code(),
                change.path_primary
            )
        } else {
            format!(
                "{}{} {}{}{}",
                change.primary_state.code(),
                change.secondary_state.code(),
                change.path_primary,
                RENAME_SEPARATOR,
                change.path_secondary
            )
        }
    }
}

impl std::fmt::Display for FileChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line: String = self.into();
        write!(f, "{}", line)
    }
}
