//! Secondary index for column values
//!
//! Maps an indexed column's value to the set of row keys carrying it.
//! Structure: column_name → (value → ordered row keys)

use crate::error::{TutorialError, TutorialResult};
use ahash::AHashMap;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::BTreeSet;

/// Per-column index: value → row keys in key order
type ValueIndex = RwLock<AHashMap<String, BTreeSet<String>>>;

/// Secondary (value → key) index of one column family
pub struct SecondaryIndex {
    columns: DashMap<String, ValueIndex>,
}

impl SecondaryIndex {
    /// Create a new empty index set
    pub fn new() -> Self {
        Self {
            columns: DashMap::new(),
        }
    }

    /// Create an index on a column
    ///
    /// Existing rows are not back-filled; callers index before loading.
    pub fn create_index(&self, column: &str) -> TutorialResult<()> {
        if self.columns.contains_key(column) {
            return Err(TutorialError::InvalidRequest(format!(
                "index already exists on column '{column}'"
            )));
        }
        self.columns
            .insert(column.to_string(), RwLock::new(AHashMap::new()));
        Ok(())
    }

    pub fn has_index(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Names of indexed columns, sorted
    pub fn indexed_columns(&self) -> Vec<String> {
        let mut names: Vec<String> = self.columns.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Record `row_key` under `value`. No-op for unindexed columns.
    pub fn update_on_insert(&self, column: &str, value: &str, row_key: &str) {
        if let Some(index) = self.columns.get(column) {
            index
                .write()
                .entry(value.to_string())
                .or_default()
                .insert(row_key.to_string());
        }
    }

    /// Drop `row_key` from `value`'s entry (old value on overwrite).
    pub fn update_on_remove(&self, column: &str, value: &str, row_key: &str) {
        if let Some(index) = self.columns.get(column) {
            let mut index = index.write();
            if let Some(keys) = index.get_mut(value) {
                keys.remove(row_key);
                if keys.is_empty() {
                    index.remove(value);
                }
            }
        }
    }

    /// Row keys whose `column` equals `value`, in key order
    pub fn lookup(&self, column: &str, value: &str) -> TutorialResult<BTreeSet<String>> {
        let Some(index) = self.columns.get(column) else {
            return Err(TutorialError::InvalidRequest(format!(
                "no index on column '{column}'"
            )));
        };
        let keys = index.read().get(value).cloned().unwrap_or_default();
        Ok(keys)
    }
}

impl Default for SecondaryIndex {
    fn default() -> Self {
        Self::new()
    }
}
