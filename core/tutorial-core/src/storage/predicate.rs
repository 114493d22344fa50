//! Slice predicates, key ranges and index clauses.
//!
//! An empty string bound means "open" on that side, as in the Thrift-era
//! slice API.

use crate::error::{TutorialError, TutorialResult};
use crate::storage::model::{ColumnSlice, HColumn};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Default row limit for range and indexed queries.
pub const DEFAULT_ROW_COUNT: usize = 100;

/// Column range inside a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceRange {
    pub start: String,
    pub finish: String,
    pub reversed: bool,
    pub count: usize,
}

/// Which columns of a row a query returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlicePredicate {
    /// Explicit column names; missing ones are skipped.
    Names(Vec<String>),
    /// Contiguous column range in comparator order.
    Range(SliceRange),
}

impl SlicePredicate {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SlicePredicate::Names(names.into_iter().map(Into::into).collect())
    }

    pub fn range(
        start: impl Into<String>,
        finish: impl Into<String>,
        reversed: bool,
        count: usize,
    ) -> Self {
        SlicePredicate::Range(SliceRange {
            start: start.into(),
            finish: finish.into(),
            reversed,
            count,
        })
    }

    /// Reject predicates the store cannot answer.
    pub fn validate(&self) -> TutorialResult<()> {
        match self {
            SlicePredicate::Names(names) => {
                if names.is_empty() {
                    return Err(TutorialError::InvalidRequest(
                        "slice predicate requires at least one column name".to_string(),
                    ));
                }
                if names.iter().any(String::is_empty) {
                    return Err(TutorialError::InvalidRequest(
                        "column name may not be empty".to_string(),
                    ));
                }
            }
            SlicePredicate::Range(range) => {
                if range.count == 0 {
                    return Err(TutorialError::InvalidRequest(
                        "slice range count must be positive".to_string(),
                    ));
                }
                if !range.start.is_empty() && !range.finish.is_empty() {
                    let out_of_order = if range.reversed {
                        range.start < range.finish
                    } else {
                        range.start > range.finish
                    };
                    if out_of_order {
                        return Err(TutorialError::InvalidRequest(format!(
                            "range finish '{}' must come after start '{}' in the order of traversal",
                            range.finish, range.start
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Select columns from a row. Assumes `validate` has passed.
    pub(crate) fn apply(&self, row: &BTreeMap<String, HColumn>) -> ColumnSlice {
        match self {
            SlicePredicate::Names(names) => {
                let mut wanted: Vec<&str> = names.iter().map(String::as_str).collect();
                wanted.sort_unstable();
                wanted.dedup();
                ColumnSlice::new(
                    wanted
                        .into_iter()
                        .filter_map(|name| row.get(name).cloned())
                        .collect(),
                )
            }
            SlicePredicate::Range(range) => {
                let (lower, upper) = if range.reversed {
                    (open_or_included(&range.finish), open_or_included(&range.start))
                } else {
                    (open_or_included(&range.start), open_or_included(&range.finish))
                };
                let selected = row.range::<str, _>((lower, upper)).map(|(_, c)| c.clone());
                let columns: Vec<HColumn> = if range.reversed {
                    selected.rev().take(range.count).collect()
                } else {
                    selected.take(range.count).collect()
                };
                ColumnSlice::new(columns)
            }
        }
    }
}

/// Inclusive key range over an ordered column family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRange {
    pub start_key: String,
    pub end_key: String,
    pub count: usize,
}

impl KeyRange {
    pub fn new(start_key: impl Into<String>, end_key: impl Into<String>, count: usize) -> Self {
        Self {
            start_key: start_key.into(),
            end_key: end_key.into(),
            count,
        }
    }

    pub fn validate(&self) -> TutorialResult<()> {
        if self.count == 0 {
            return Err(TutorialError::InvalidRequest(
                "key range count must be positive".to_string(),
            ));
        }
        if !self.start_key.is_empty() && !self.end_key.is_empty() && self.start_key > self.end_key {
            return Err(TutorialError::InvalidRequest(format!(
                "start key '{}' must sort before (or equal to) end key '{}'",
                self.start_key, self.end_key
            )));
        }
        Ok(())
    }

    pub(crate) fn bounds(&self) -> (Bound<&str>, Bound<&str>) {
        (open_or_included(&self.start_key), open_or_included(&self.end_key))
    }
}

impl Default for KeyRange {
    fn default() -> Self {
        Self::new("", "", DEFAULT_ROW_COUNT)
    }
}

/// Comparison applied by an index expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOperator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

/// `column <op> value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexExpression {
    pub column: String,
    pub op: IndexOperator,
    pub value: String,
}

impl IndexExpression {
    pub fn new(column: impl Into<String>, op: IndexOperator, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    pub(crate) fn matches(&self, row: &BTreeMap<String, HColumn>) -> bool {
        let Some(column) = row.get(&self.column) else {
            return false;
        };
        let actual = column.value.as_str();
        let expected = self.value.as_str();
        match self.op {
            IndexOperator::Eq => actual == expected,
            IndexOperator::Gt => actual > expected,
            IndexOperator::Gte => actual >= expected,
            IndexOperator::Lt => actual < expected,
            IndexOperator::Lte => actual <= expected,
        }
    }
}

/// Conjunction of index expressions plus paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexClause {
    pub expressions: Vec<IndexExpression>,
    pub start_key: String,
    pub count: usize,
}

impl Default for IndexClause {
    fn default() -> Self {
        Self {
            expressions: Vec::new(),
            start_key: String::new(),
            count: DEFAULT_ROW_COUNT,
        }
    }
}

fn open_or_included(bound: &str) -> Bound<&str> {
    if bound.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(bound)
    }
}
