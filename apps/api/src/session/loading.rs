#![allow(dead_code)]

//! Per-operation "in flight" flags.
//!
//! Keys are a closed enum, and a finished operation is removed rather than stored
//! as `false`, so the table only ever holds operations that are actually running.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{EntryId, ResumeDocument};

/// Identity of one generation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "operation", content = "entryId", rename_all = "camelCase")]
pub enum OperationKey {
    Summary,
    ImproveExperience(EntryId),
}

impl OperationKey {
    /// The experience entry this operation is tied to, if any.
    pub fn entry(&self) -> Option<EntryId> {
        match self {
            OperationKey::Summary => None,
            OperationKey::ImproveExperience(id) => Some(*id),
        }
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKey::Summary => f.write_str("summary"),
            OperationKey::ImproveExperience(id) => write!(f, "exp-{id}"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct LoadingTracker {
    in_flight: BTreeSet<OperationKey>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as running. Returns false when it was already running.
    pub fn start(&mut self, key: OperationKey) -> bool {
        self.in_flight.insert(key)
    }

    /// Clears `key`. Returns false when it was not running.
    pub fn finish(&mut self, key: OperationKey) -> bool {
        self.in_flight.remove(&key)
    }

    pub fn is_loading(&self, key: OperationKey) -> bool {
        self.in_flight.contains(&key)
    }

    pub fn in_flight(&self) -> Vec<OperationKey> {
        self.in_flight.iter().copied().collect()
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }

    /// Drops flags tied to entries that no longer exist in `doc`; returns them.
    pub fn prune(&mut self, doc: &ResumeDocument) -> Vec<OperationKey> {
        let stale: Vec<OperationKey> = self
            .in_flight
            .iter()
            .copied()
            .filter(|key| key.entry().is_some_and(|id| doc.experience_index(id).is_none()))
            .collect();
        for key in &stale {
            self.in_flight.remove(key);
        }
        stale
    }

    pub fn clear(&mut self) {
        self.in_flight.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_finish() {
        let mut tracker = LoadingTracker::new();
        assert!(tracker.start(OperationKey::Summary));
        assert!(tracker.is_loading(OperationKey::Summary));
        assert!(!tracker.start(OperationKey::Summary), "double start is refused");
        assert!(tracker.finish(OperationKey::Summary));
        assert!(!tracker.is_loading(OperationKey::Summary));
        assert!(tracker.is_idle());
    }

    #[test]
    fn test_flags_for_distinct_entries_are_independent() {
        let mut tracker = LoadingTracker::new();
        let a = OperationKey::ImproveExperience(EntryId::new());
        let b = OperationKey::ImproveExperience(EntryId::new());

        tracker.start(a);
        tracker.start(b);
        tracker.finish(a);

        assert!(!tracker.is_loading(a));
        assert!(tracker.is_loading(b));
        assert!(!tracker.is_loading(OperationKey::Summary));
    }

    #[test]
    fn test_prune_drops_only_removed_entries() {
        let doc = ResumeDocument::seeded();
        let live = OperationKey::ImproveExperience(doc.experience[0].id);
        let gone = OperationKey::ImproveExperience(EntryId::new());

        let mut tracker = LoadingTracker::new();
        tracker.start(OperationKey::Summary);
        tracker.start(live);
        tracker.start(gone);

        assert_eq!(tracker.prune(&doc), vec![gone]);
        assert!(tracker.is_loading(live));
        assert!(tracker.is_loading(OperationKey::Summary));
    }

    #[test]
    fn test_operation_key_wire_format_and_display() {
        let json = serde_json::to_value(OperationKey::Summary).unwrap();
        assert_eq!(json, serde_json::json!({ "operation": "summary" }));

        let id = EntryId::new();
        let key = OperationKey::ImproveExperience(id);
        let json = serde_json::to_value(key).unwrap();
        assert_eq!(json["operation"], "improveExperience");
        assert_eq!(json["entryId"], id.to_string());
        assert_eq!(key.to_string(), format!("exp-{id}"));
    }
}
