//! Query builders — fluent API over a [`Keyspace`].
//!
//! ```rust
//! use tutorial_core::client::{Cluster, Keyspace, SliceQuery};
//! use tutorial_core::config::ClusterConfig;
//! use tutorial_core::dataset::open_tutorial_store;
//!
//! # fn main() -> tutorial_core::TutorialResult<()> {
//! let store = open_tutorial_store("Tutorial")?;
//! let cluster = Cluster::connect(&ClusterConfig::default(), store)?;
//! let keyspace = Keyspace::create("Tutorial", &cluster)?;
//!
//! let result = SliceQuery::new(&keyspace)
//!     .column_family("Npanxx")
//!     .key("512202")
//!     .column_names(["city", "state"])
//!     .execute()?;
//! assert_eq!(result.get().len(), 2);
//! # Ok(())
//! # }
//! ```

use crate::client::keyspace::Keyspace;
use crate::client::result::QueryResult;
use crate::error::{TutorialError, TutorialResult};
use crate::storage::{
    ColumnSlice, DEFAULT_ROW_COUNT, HColumn, IndexClause, IndexExpression, IndexOperator,
    KeyRange, Rows, SlicePredicate,
};

fn required<'s>(value: &'s Option<String>, what: &str) -> TutorialResult<&'s str> {
    value
        .as_deref()
        .ok_or_else(|| TutorialError::InvalidRequest(format!("{what} must be set")))
}

fn required_predicate(predicate: &Option<SlicePredicate>) -> TutorialResult<&SlicePredicate> {
    predicate.as_ref().ok_or_else(|| {
        TutorialError::InvalidRequest("column names or a column range must be set".to_string())
    })
}

// ════════════════════════════════════════════
// ColumnQuery
// ════════════════════════════════════════════

/// Single column by key and name (`get`).
pub struct ColumnQuery<'a> {
    keyspace: &'a Keyspace,
    column_family: Option<String>,
    key: Option<String>,
    name: Option<String>,
}

impl<'a> ColumnQuery<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self {
            keyspace,
            column_family: None,
            key: None,
            name: None,
        }
    }

    pub fn column_family(mut self, column_family: impl Into<String>) -> Self {
        self.column_family = Some(column_family.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// `None` payload when the row or column does not exist.
    pub fn execute(&self) -> TutorialResult<QueryResult<Option<HColumn>>> {
        let column_family = required(&self.column_family, "column family")?;
        let key = required(&self.key, "key")?;
        let name = required(&self.name, "column name")?;
        self.keyspace
            .execute_operation("get", column_family, |cf| cf.get_column(key, name))
    }
}

// ════════════════════════════════════════════
// SliceQuery
// ════════════════════════════════════════════

/// Columns of a single row (`get_slice`).
pub struct SliceQuery<'a> {
    keyspace: &'a Keyspace,
    column_family: Option<String>,
    key: Option<String>,
    predicate: Option<SlicePredicate>,
}

impl<'a> SliceQuery<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self {
            keyspace,
            column_family: None,
            key: None,
            predicate: None,
        }
    }

    pub fn column_family(mut self, column_family: impl Into<String>) -> Self {
        self.column_family = Some(column_family.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicate = Some(SlicePredicate::names(names));
        self
    }

    pub fn range(
        mut self,
        start: impl Into<String>,
        finish: impl Into<String>,
        reversed: bool,
        count: usize,
    ) -> Self {
        self.predicate = Some(SlicePredicate::range(start, finish, reversed, count));
        self
    }

    pub fn execute(&self) -> TutorialResult<QueryResult<ColumnSlice>> {
        let column_family = required(&self.column_family, "column family")?;
        let key = required(&self.key, "key")?;
        let predicate = required_predicate(&self.predicate)?;
        self.keyspace
            .execute_operation("get_slice", column_family, |cf| cf.get_slice(key, predicate))
    }
}

// ════════════════════════════════════════════
// RangeSlicesQuery
// ════════════════════════════════════════════

/// Rows over a key range (`get_range_slices`).
pub struct RangeSlicesQuery<'a> {
    keyspace: &'a Keyspace,
    column_family: Option<String>,
    start_key: String,
    end_key: String,
    row_count: usize,
    predicate: Option<SlicePredicate>,
}

impl<'a> RangeSlicesQuery<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self {
            keyspace,
            column_family: None,
            start_key: String::new(),
            end_key: String::new(),
            row_count: DEFAULT_ROW_COUNT,
            predicate: None,
        }
    }

    pub fn column_family(mut self, column_family: impl Into<String>) -> Self {
        self.column_family = Some(column_family.into());
        self
    }

    /// Inclusive key bounds; an empty string leaves that side open.
    pub fn keys(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_key = start.into();
        self.end_key = end.into();
        self
    }

    pub fn row_count(mut self, row_count: usize) -> Self {
        self.row_count = row_count;
        self
    }

    pub fn column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicate = Some(SlicePredicate::names(names));
        self
    }

    pub fn range(
        mut self,
        start: impl Into<String>,
        finish: impl Into<String>,
        reversed: bool,
        count: usize,
    ) -> Self {
        self.predicate = Some(SlicePredicate::range(start, finish, reversed, count));
        self
    }

    pub fn execute(&self) -> TutorialResult<QueryResult<Rows>> {
        let column_family = required(&self.column_family, "column family")?;
        let predicate = required_predicate(&self.predicate)?;
        let range = KeyRange::new(self.start_key.as_str(), self.end_key.as_str(), self.row_count);
        self.keyspace
            .execute_operation("get_range_slices", column_family, |cf| {
                cf.get_range_slices(&range, predicate)
            })
    }
}

// ════════════════════════════════════════════
// MultigetSliceQuery
// ════════════════════════════════════════════

/// Same slice over several keys (`multiget_slice`).
pub struct MultigetSliceQuery<'a> {
    keyspace: &'a Keyspace,
    column_family: Option<String>,
    keys: Vec<String>,
    predicate: Option<SlicePredicate>,
}

impl<'a> MultigetSliceQuery<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self {
            keyspace,
            column_family: None,
            keys: Vec::new(),
            predicate: None,
        }
    }

    pub fn column_family(mut self, column_family: impl Into<String>) -> Self {
        self.column_family = Some(column_family.into());
        self
    }

    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicate = Some(SlicePredicate::names(names));
        self
    }

    pub fn range(
        mut self,
        start: impl Into<String>,
        finish: impl Into<String>,
        reversed: bool,
        count: usize,
    ) -> Self {
        self.predicate = Some(SlicePredicate::range(start, finish, reversed, count));
        self
    }

    pub fn execute(&self) -> TutorialResult<QueryResult<Rows>> {
        let column_family = required(&self.column_family, "column family")?;
        let predicate = required_predicate(&self.predicate)?;
        self.keyspace
            .execute_operation("multiget_slice", column_family, |cf| {
                cf.multiget_slice(&self.keys, predicate)
            })
    }
}

// ════════════════════════════════════════════
// IndexedSlicesQuery
// ════════════════════════════════════════════

/// Rows selected through secondary indexes (`get_indexed_slices`).
pub struct IndexedSlicesQuery<'a> {
    keyspace: &'a Keyspace,
    column_family: Option<String>,
    clause: IndexClause,
    predicate: Option<SlicePredicate>,
}

impl<'a> IndexedSlicesQuery<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self {
            keyspace,
            column_family: None,
            clause: IndexClause::default(),
            predicate: None,
        }
    }

    pub fn column_family(mut self, column_family: impl Into<String>) -> Self {
        self.column_family = Some(column_family.into());
        self
    }

    pub fn add_equals_expression(self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_expression(column, IndexOperator::Eq, value)
    }

    pub fn add_gte_expression(self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_expression(column, IndexOperator::Gte, value)
    }

    pub fn add_lte_expression(self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_expression(column, IndexOperator::Lte, value)
    }

    pub fn add_expression(
        mut self,
        column: impl Into<String>,
        op: IndexOperator,
        value: impl Into<String>,
    ) -> Self {
        self.clause
            .expressions
            .push(IndexExpression::new(column, op, value));
        self
    }

    pub fn start_key(mut self, start_key: impl Into<String>) -> Self {
        self.clause.start_key = start_key.into();
        self
    }

    pub fn row_count(mut self, row_count: usize) -> Self {
        self.clause.count = row_count;
        self
    }

    pub fn column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicate = Some(SlicePredicate::names(names));
        self
    }

    pub fn range(
        mut self,
        start: impl Into<String>,
        finish: impl Into<String>,
        reversed: bool,
        count: usize,
    ) -> Self {
        self.predicate = Some(SlicePredicate::range(start, finish, reversed, count));
        self
    }

    pub fn execute(&self) -> TutorialResult<QueryResult<Rows>> {
        let column_family = required(&self.column_family, "column family")?;
        let predicate = required_predicate(&self.predicate)?;
        self.keyspace
            .execute_operation("get_indexed_slices", column_family, |cf| {
                cf.get_indexed_slices(&self.clause, predicate)
            })
    }
}
