//! Column family — ordered rows of name-ordered columns.
//!
//! Rows live in a `SkipMap` keyed by row key (ordered partitioner), each row
//! is a `BTreeMap` of columns behind its own lock. Secondary indexes are kept
//! in step on every insert.

use crate::error::{TutorialError, TutorialResult};
use crate::storage::index::SecondaryIndex;
use crate::storage::model::{ColumnSlice, HColumn, Row, Rows};
use crate::storage::predicate::{IndexClause, IndexOperator, KeyRange, SlicePredicate};
use crossbeam_skiplist::SkipMap;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

type ColumnMap = BTreeMap<String, HColumn>;

/// One column family of a keyspace.
pub struct ColumnFamily {
    name: String,
    rows: SkipMap<String, RwLock<ColumnMap>>,
    index: SecondaryIndex,
}

impl ColumnFamily {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: SkipMap::new(),
            index: SecondaryIndex::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index a column so it can drive `get_indexed_slices`.
    pub fn create_index(&self, column: &str) -> TutorialResult<()> {
        self.index.create_index(column)
    }

    pub fn indexed_columns(&self) -> Vec<String> {
        self.index.indexed_columns()
    }

    // ════════════════════════════════════════════
    // Writes
    // ════════════════════════════════════════════

    /// Upsert one column. The clock is the current time in microseconds.
    pub fn insert(&self, key: &str, name: &str, value: &str) -> TutorialResult<()> {
        validate_key(key)?;
        if name.is_empty() {
            return Err(TutorialError::InvalidRequest(
                "column name may not be empty".to_string(),
            ));
        }

        let entry = self
            .rows
            .get_or_insert(key.to_string(), RwLock::new(BTreeMap::new()));
        let previous = entry
            .value()
            .write()
            .insert(name.to_string(), HColumn::new(name, value, now_micros()));

        if let Some(old) = previous {
            self.index.update_on_remove(name, &old.value, key);
        }
        self.index.update_on_insert(name, value, key);
        Ok(())
    }

    // ════════════════════════════════════════════
    // Reads
    // ════════════════════════════════════════════

    /// Single column by row key and name.
    pub fn get_column(&self, key: &str, name: &str) -> TutorialResult<Option<HColumn>> {
        validate_key(key)?;
        Ok(self
            .rows
            .get(key)
            .and_then(|entry| entry.value().read().get(name).cloned()))
    }

    /// Columns of one row. Missing rows give an empty slice.
    pub fn get_slice(&self, key: &str, predicate: &SlicePredicate) -> TutorialResult<ColumnSlice> {
        validate_key(key)?;
        predicate.validate()?;
        Ok(self.slice_of(key, predicate))
    }

    /// One row per distinct requested key, in request order.
    pub fn multiget_slice(
        &self,
        keys: &[String],
        predicate: &SlicePredicate,
    ) -> TutorialResult<Rows> {
        if keys.is_empty() {
            return Err(TutorialError::InvalidRequest(
                "multiget requires at least one key".to_string(),
            ));
        }
        for key in keys {
            validate_key(key)?;
        }
        predicate.validate()?;

        let mut seen = std::collections::HashSet::new();
        Ok(keys
            .iter()
            .filter(|key| seen.insert(key.as_str()))
            .map(|key| Row::new(key.as_str(), self.slice_of(key, predicate)))
            .collect())
    }

    /// Rows in key order within `range`. Rows whose slice comes back empty
    /// are still returned.
    pub fn get_range_slices(
        &self,
        range: &KeyRange,
        predicate: &SlicePredicate,
    ) -> TutorialResult<Rows> {
        range.validate()?;
        predicate.validate()?;

        Ok(self
            .rows
            .range::<str, _>(range.bounds())
            .take(range.count)
            .map(|entry| Row::new(entry.key().as_str(), predicate.apply(&entry.value().read())))
            .collect())
    }

    /// Rows matching every expression of `clause`.
    ///
    /// At least one `EQ` expression must target an indexed column; the first
    /// such expression selects the candidate rows.
    pub fn get_indexed_slices(
        &self,
        clause: &IndexClause,
        predicate: &SlicePredicate,
    ) -> TutorialResult<Rows> {
        if clause.count == 0 {
            return Err(TutorialError::InvalidRequest(
                "index clause count must be positive".to_string(),
            ));
        }
        predicate.validate()?;

        let Some(driver) = clause
            .expressions
            .iter()
            .find(|e| e.op == IndexOperator::Eq && self.index.has_index(&e.column))
        else {
            return Err(TutorialError::InvalidRequest(
                "no indexed columns present in index clause with operator EQ".to_string(),
            ));
        };

        let candidates = self.index.lookup(&driver.column, &driver.value)?;
        let mut rows = Vec::new();
        for key in candidates
            .iter()
            .filter(|k| clause.start_key.is_empty() || k.as_str() >= clause.start_key.as_str())
        {
            if rows.len() == clause.count {
                break;
            }
            let Some(entry) = self.rows.get(key.as_str()) else {
                continue;
            };
            let columns = entry.value().read();
            if clause.expressions.iter().all(|e| e.matches(&columns)) {
                rows.push(Row::new(key.as_str(), predicate.apply(&columns)));
            }
        }
        Ok(Rows::new(rows))
    }

    fn slice_of(&self, key: &str, predicate: &SlicePredicate) -> ColumnSlice {
        self.rows
            .get(key)
            .map(|entry| predicate.apply(&entry.value().read()))
            .unwrap_or_default()
    }
}

fn validate_key(key: &str) -> TutorialResult<()> {
    if key.is_empty() {
        return Err(TutorialError::InvalidRequest(
            "row key may not be empty".to_string(),
        ));
    }
    Ok(())
}

fn now_micros() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as i64)
        .unwrap_or_default()
}
