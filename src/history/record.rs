use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::action::Action;
use super::types::{self, ChangeKind, OperationKind};

/// Persisted history entry for one completed import or export
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Recordable actions, in the order the engine reported them
    pub actions: Vec<Action>,

    /// Local time the operation completed
    #[serde(rename = "date")]
    pub timestamp: DateTime<Local>,

    /// Display name of whoever ran the operation
    #[serde(rename = "username")]
    pub actor: String,

    #[serde(rename = "method")]
    pub operation: OperationKind,

    /// Number of actions the engine reported before filtering
    pub total: usize,

    /// Count of each change kind present in `actions`
    #[serde(rename = "changes")]
    pub change_counts: BTreeMap<ChangeKind, usize>,
}

impl Snapshot {
    /// Build a snapshot from everything the engine reported.
    ///
    /// Returns `None` when no action is recordable; an operation that changed
    /// nothing has no history entry.
    pub fn build(
        actions: &[Action],
        total_reported: usize,
        operation: OperationKind,
        actor: impl Into<String>,
    ) -> Option<Self> {
        let actions = types::recordable(actions);
        if actions.is_empty() {
            return None;
        }

        let change_counts = count_changes(&actions);

        Some(Self {
            actions,
            timestamp: Local::now(),
            actor: actor.into(),
            operation,
            total: total_reported,
            change_counts,
        })
    }

    /// One-line description for log output
    pub fn summary(&self) -> String {
        format!(
            "{} by {} at {} ({} of {} items changed)",
            self.operation,
            self.actor,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.actions.len(),
            self.total
        )
    }
}

fn count_changes(actions: &[Action]) -> BTreeMap<ChangeKind, usize> {
    let mut counts = BTreeMap::new();
    for action in actions {
        *counts.entry(action.change).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_actions() -> Vec<Action> {
        vec![
            Action::new("1", "Home", ChangeKind::NoChange),
            Action::new("2", "About", ChangeKind::Update),
            Action::new("3", "Blog", ChangeKind::Delete),
            Action::new("4", "Settings", ChangeKind::Hidden),
        ]
    }

    #[test]
    fn test_build_filters_and_counts() {
        let snapshot =
            Snapshot::build(&mixed_actions(), 4, OperationKind::Import, "admin").unwrap();

        let names: Vec<_> = snapshot.actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["About", "Blog"]);
        assert_eq!(snapshot.total, 4);
        assert_eq!(snapshot.actor, "admin");
        assert_eq!(snapshot.operation, OperationKind::Import);
        assert_eq!(snapshot.change_counts.len(), 2);
        assert_eq!(snapshot.change_counts.get(&ChangeKind::Update), Some(&1));
        assert_eq!(snapshot.change_counts.get(&ChangeKind::Delete), Some(&1));
    }

    #[test]
    fn test_build_nothing_recordable() {
        let actions = vec![
            Action::new("1", "Home", ChangeKind::NoChange),
            Action::new("2", "About", ChangeKind::NoChange),
        ];

        assert!(Snapshot::build(&actions, 2, OperationKind::Export, "admin").is_none());
        assert!(Snapshot::build(&[], 0, OperationKind::Export, "admin").is_none());
    }

    #[test]
    fn test_total_is_passed_through() {
        let actions = vec![Action::new("1", "Home", ChangeKind::Create)];
        let snapshot = Snapshot::build(&actions, 250, OperationKind::Export, "admin").unwrap();

        assert_eq!(snapshot.total, 250);
        assert!(snapshot.total >= snapshot.actions.len());
    }

    #[test]
    fn test_counts_sum_to_action_count() {
        let actions = vec![
            Action::new("1", "A", ChangeKind::Create),
            Action::new("2", "B", ChangeKind::Create),
            Action::new("3", "C", ChangeKind::Update),
            Action::new("4", "D", ChangeKind::Fail),
            Action::new("5", "E", ChangeKind::Clean),
        ];
        let snapshot = Snapshot::build(&actions, 5, OperationKind::Import, "admin").unwrap();

        assert_eq!(snapshot.change_counts.values().sum::<usize>(), snapshot.actions.len());
        assert_eq!(snapshot.change_counts.get(&ChangeKind::Create), Some(&2));
        assert!(!snapshot.change_counts.contains_key(&ChangeKind::Clean));
        assert!(!snapshot.change_counts.contains_key(&ChangeKind::NoChange));
    }

    #[test]
    fn test_persisted_field_names() {
        let snapshot =
            Snapshot::build(&mixed_actions(), 4, OperationKind::Export, "editor").unwrap();
        let value = serde_json::to_value(&snapshot).unwrap();

        for field in ["actions", "date", "username", "method", "total", "changes"] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["method"], "Export");
        assert_eq!(value["username"], "editor");
        assert_eq!(value["total"], 4);
        assert_eq!(value["changes"]["Update"], 1);
        assert_eq!(value["changes"]["Delete"], 1);
    }

    #[test]
    fn test_snapshot_summary() {
        let snapshot =
            Snapshot::build(&mixed_actions(), 4, OperationKind::Import, "admin").unwrap();

        let summary = snapshot.summary();
        assert!(summary.contains("Import"));
        assert!(summary.contains("admin"));
        assert!(summary.contains("2 of 4 items changed"));
    }
}
