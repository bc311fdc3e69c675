use serde::{Deserialize, Serialize};

use super::action::Action;

/// Kind of completed operation a history entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// Items were read from disk into the content store
    Import,
    /// Items were written from the content store to disk
    Export,
}

impl OperationKind {
    /// Returns the label persisted in the `method` field
    pub fn as_str(&self) -> &str {
        match self {
            OperationKind::Import => "Import",
            OperationKind::Export => "Export",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OperationKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "import" => Ok(OperationKind::Import),
            "export" => Ok(OperationKind::Export),
            other => anyhow::bail!("unknown operation '{other}', expected import or export"),
        }
    }
}

/// Outcome reported by the sync engine for a single item.
///
/// Declaration order is significant: everything strictly between
/// [`ChangeKind::NoChange`] and [`ChangeKind::Hidden`] is a real change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ChangeKind {
    NoChange,
    Create,
    Import,
    Export,
    Update,
    Delete,
    WillChange,
    Information,
    Rolledback,
    Fail,
    ImportFail,
    Mismatch,
    ParentMissing,
    /// Internal or system item, never shown to users
    Hidden,
    Clean,
    Removed,
}

impl ChangeKind {
    /// Returns the variant name as persisted in history files
    pub fn as_str(&self) -> &str {
        match self {
            ChangeKind::NoChange => "NoChange",
            ChangeKind::Create => "Create",
            ChangeKind::Import => "Import",
            ChangeKind::Export => "Export",
            ChangeKind::Update => "Update",
            ChangeKind::Delete => "Delete",
            ChangeKind::WillChange => "WillChange",
            ChangeKind::Information => "Information",
            ChangeKind::Rolledback => "Rolledback",
            ChangeKind::Fail => "Fail",
            ChangeKind::ImportFail => "ImportFail",
            ChangeKind::Mismatch => "Mismatch",
            ChangeKind::ParentMissing => "ParentMissing",
            ChangeKind::Hidden => "Hidden",
            ChangeKind::Clean => "Clean",
            ChangeKind::Removed => "Removed",
        }
    }
}

/// Whether an item outcome counts as a change worth recording
pub fn is_recordable(kind: ChangeKind) -> bool {
    kind > ChangeKind::NoChange && kind < ChangeKind::Hidden
}

/// Keep only the recordable actions, preserving their order
pub fn recordable(actions: &[Action]) -> Vec<Action> {
    actions
        .iter()
        .filter(|action| is_recordable(action.change))
        .cloned()
        .collect()
}

/// Cheap check used before doing any other work for an event
pub fn has_recordable(actions: &[Action]) -> bool {
    actions.iter().any(|action| is_recordable(action.change))
}
