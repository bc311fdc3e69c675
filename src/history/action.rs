use serde::{Deserialize, Serialize};

use super::types::ChangeKind;

fn default_success() -> bool {
    true
}

/// Outcome of one item reported by the sync engine once an operation completes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Identity of the synced item
    pub id: String,

    /// Display name of the synced item
    pub name: String,

    /// What happened to the item
    pub change: ChangeKind,

    /// Handler-specific item type (e.g. content, media, dataType)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    /// Whether the engine considered the item handled successfully
    #[serde(default = "default_success")]
    pub success: bool,

    /// Engine message for the item, usually only set on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// File the item was read from or written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl Action {
    pub fn new(id: impl Into<String>, name: impl Into<String>, change: ChangeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            change,
            item_type: None,
            success: true,
            message: None,
            file_name: None,
        }
    }

    pub fn with_item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Mark the action as failed with the engine's message
    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.success = false;
        self.message = Some(message.into());
        self
    }
}
