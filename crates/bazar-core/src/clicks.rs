//! Category Click Analytics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::storage::{load_json, save_json, KeyValueStore};

/// Click counts per category label. Never pruned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClickCounts(BTreeMap<String, u64>);

impl ClickCounts {
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Self, StoreError> {
        Ok(load_json(store, key)?.unwrap_or_default())
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str) -> Result<(), StoreError> {
        save_json(store, key, self)
    }

    /// Record one click and return the new count for `label`.
    pub fn record(&mut self, label: &str) -> u64 {
        let count = self.0.entry(label.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn get(&self, label: &str) -> u64 {
        self.0.get(label).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates() {
        let mut clicks = ClickCounts::default();
        assert_eq!(clicks.record("Electronics"), 1);
        assert_eq!(clicks.record("Electronics"), 2);
        assert_eq!(clicks.record("Fashion"), 1);
        assert_eq!(clicks.get("Electronics"), 2);
        assert_eq!(clicks.get("Bikes"), 0);
    }

    #[test]
    fn test_reads_existing_object() {
        let clicks: ClickCounts = serde_json::from_str(r#"{"Fashion":4,"Bikes":1}"#).unwrap();
        let all: Vec<_> = clicks.iter().collect();
        assert_eq!(all, vec![("Bikes", 1), ("Fashion", 4)]);
    }
}
