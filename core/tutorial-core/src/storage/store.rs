//! Column store — keyspaces and their column families.

use crate::error::{TutorialError, TutorialResult};
use crate::storage::column_family::ColumnFamily;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Embedded column-family database: keyspace name → keyspace.
///
/// Uses `DashMap` for O(1) keyspace and column family lookups; handles are
/// shared through `Arc` so queries never hold a map guard while reading rows.
pub struct ColumnStore {
    keyspaces: DashMap<String, Arc<KeyspaceStore>>,
}

impl ColumnStore {
    pub fn new() -> Self {
        Self {
            keyspaces: DashMap::new(),
        }
    }

    /// Create an empty keyspace.
    pub fn create_keyspace(&self, name: &str) -> TutorialResult<Arc<KeyspaceStore>> {
        if self.keyspaces.contains_key(name) {
            return Err(TutorialError::KeyspaceAlreadyExists(name.to_string()));
        }
        info!(keyspace = %name, "Creating keyspace");
        let keyspace = Arc::new(KeyspaceStore::new(name));
        self.keyspaces.insert(name.to_string(), Arc::clone(&keyspace));
        Ok(keyspace)
    }

    pub fn keyspace(&self, name: &str) -> TutorialResult<Arc<KeyspaceStore>> {
        self.keyspaces
            .get(name)
            .map(|e| Arc::clone(e.value()))
            .ok_or_else(|| TutorialError::KeyspaceNotFound(name.to_string()))
    }

    /// All keyspace names, sorted.
    pub fn keyspace_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.keyspaces.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl Default for ColumnStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Column families of one keyspace.
pub struct KeyspaceStore {
    name: String,
    column_families: DashMap<String, Arc<ColumnFamily>>,
}

impl KeyspaceStore {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            column_families: DashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn create_column_family(&self, name: &str) -> TutorialResult<Arc<ColumnFamily>> {
        if self.column_families.contains_key(name) {
            return Err(TutorialError::ColumnFamilyAlreadyExists(name.to_string()));
        }
        debug!(keyspace = %self.name, column_family = %name, "Creating column family");
        let cf = Arc::new(ColumnFamily::new(name));
        self.column_families.insert(name.to_string(), Arc::clone(&cf));
        Ok(cf)
    }

    pub fn column_family(&self, name: &str) -> TutorialResult<Arc<ColumnFamily>> {
        self.column_families
            .get(name)
            .map(|e| Arc::clone(e.value()))
            .ok_or_else(|| TutorialError::ColumnFamilyNotFound {
                keyspace: self.name.clone(),
                column_family: name.to_string(),
            })
    }

    /// All column family names, sorted.
    pub fn column_family_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .column_families
            .iter()
            .map(|e| e.key().clone())
            .collect();
        names.sort();
        names
    }
}
