//! Example commands — one pre-built query per command token.
//!
//! Every command borrows the context's [`Keyspace`] and returns its payload
//! wrapped in a [`Payload`] so the printer can tell rows from single values.

use std::fmt;
use tutorial_core::TutorialResult;
use tutorial_core::client::{
    ColumnQuery, IndexedSlicesQuery, Keyspace, MultigetSliceQuery, QueryResult,
    RangeSlicesQuery, SliceQuery,
};
use tutorial_core::dataset::{AREA_CODE, NPANXX, STATE_CITY};
use tutorial_core::storage::{ColumnSlice, HColumn, Rows};

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// A single column, `None` when absent
    Column(Option<HColumn>),
    /// Columns of one row
    Slice(ColumnSlice),
    /// Several rows, printed one per line
    Rows(Rows),
}

impl Payload {
    /// The row collection, if this payload is one.
    pub fn rows(&self) -> Option<&Rows> {
        match self {
            Payload::Rows(rows) => Some(rows),
            _ => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Column(Some(column)) => write!(f, "{column}"),
            Payload::Column(None) => write!(f, "None"),
            Payload::Slice(slice) => write!(f, "{slice}"),
            Payload::Rows(rows) => write!(f, "{rows}"),
        }
    }
}

/// A runnable example query.
pub trait TutorialCommand {
    /// Command token this query answers to.
    fn name(&self) -> &'static str;

    /// Keyspace the command is bound to.
    fn keyspace(&self) -> &Keyspace;

    fn execute(&self) -> TutorialResult<QueryResult<Payload>>;
}

/// `get` — city of exchange 512-204.
pub struct GetCityForNpanxx<'a> {
    keyspace: &'a Keyspace,
}

impl<'a> GetCityForNpanxx<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self { keyspace }
    }
}

impl TutorialCommand for GetCityForNpanxx<'_> {
    fn name(&self) -> &'static str {
        "get"
    }

    fn keyspace(&self) -> &Keyspace {
        self.keyspace
    }

    fn execute(&self) -> TutorialResult<QueryResult<Payload>> {
        let result = ColumnQuery::new(self.keyspace)
            .column_family(NPANXX)
            .key("512204")
            .name("city")
            .execute()?;
        Ok(result.map(Payload::Column))
    }
}

/// `get_slice` — all details of exchange 512-202.
pub struct GetSliceForNpanxx<'a> {
    keyspace: &'a Keyspace,
}

impl<'a> GetSliceForNpanxx<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self { keyspace }
    }
}

impl TutorialCommand for GetSliceForNpanxx<'_> {
    fn name(&self) -> &'static str {
        "get_slice"
    }

    fn keyspace(&self) -> &Keyspace {
        self.keyspace
    }

    fn execute(&self) -> TutorialResult<QueryResult<Payload>> {
        let result = SliceQuery::new(self.keyspace)
            .column_family(NPANXX)
            .key("512202")
            .column_names(["city", "state", "lat", "lng"])
            .execute()?;
        Ok(result.map(Payload::Slice))
    }
}

/// `get_range_slices` — exchanges 202..204 of the "TX Austin" rows.
pub struct GetRangeSlicesForStateCity<'a> {
    keyspace: &'a Keyspace,
}

impl<'a> GetRangeSlicesForStateCity<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self { keyspace }
    }
}

impl TutorialCommand for GetRangeSlicesForStateCity<'_> {
    fn name(&self) -> &'static str {
        "get_range_slices"
    }

    fn keyspace(&self) -> &Keyspace {
        self.keyspace
    }

    fn execute(&self) -> TutorialResult<QueryResult<Payload>> {
        let result = RangeSlicesQuery::new(self.keyspace)
            .column_family(STATE_CITY)
            .keys("TX Austin", "TX Austin")
            .range("202", "204", false, 5)
            .row_count(5)
            .execute()?;
        Ok(result.map(Payload::Rows))
    }
}

/// `get_slice_acc` — first five Austin exchanges under area code 512.
pub struct GetSliceForAreaCodeCity<'a> {
    keyspace: &'a Keyspace,
}

impl<'a> GetSliceForAreaCodeCity<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self { keyspace }
    }
}

impl TutorialCommand for GetSliceForAreaCodeCity<'_> {
    fn name(&self) -> &'static str {
        "get_slice_acc"
    }

    fn keyspace(&self) -> &Keyspace {
        self.keyspace
    }

    fn execute(&self) -> TutorialResult<QueryResult<Payload>> {
        let result = SliceQuery::new(self.keyspace)
            .column_family(AREA_CODE)
            .key("512")
            .range("Austin__", "Austin__999", false, 5)
            .execute()?;
        Ok(result.map(Payload::Slice))
    }
}

/// `get_slice_sc` — exchanges 202..204 of the "TX Austin" row.
pub struct GetSliceForStateCity<'a> {
    keyspace: &'a Keyspace,
}

impl<'a> GetSliceForStateCity<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self { keyspace }
    }
}

impl TutorialCommand for GetSliceForStateCity<'_> {
    fn name(&self) -> &'static str {
        "get_slice_sc"
    }

    fn keyspace(&self) -> &Keyspace {
        self.keyspace
    }

    fn execute(&self) -> TutorialResult<QueryResult<Payload>> {
        let result = SliceQuery::new(self.keyspace)
            .column_family(STATE_CITY)
            .key("TX Austin")
            .range("202", "204", false, 5)
            .execute()?;
        Ok(result.map(Payload::Slice))
    }
}

/// `multiget_slice` — details of four Austin exchanges in one call.
pub struct MultigetSliceForNpanxx<'a> {
    keyspace: &'a Keyspace,
}

impl<'a> MultigetSliceForNpanxx<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self { keyspace }
    }
}

impl TutorialCommand for MultigetSliceForNpanxx<'_> {
    fn name(&self) -> &'static str {
        "multiget_slice"
    }

    fn keyspace(&self) -> &Keyspace {
        self.keyspace
    }

    fn execute(&self) -> TutorialResult<QueryResult<Payload>> {
        let result = MultigetSliceQuery::new(self.keyspace)
            .column_family(NPANXX)
            .keys(["512202", "512203", "512205", "512206"])
            .column_names(["city", "state", "lat", "lng"])
            .execute()?;
        Ok(result.map(Payload::Rows))
    }
}

/// `get_indexed_slices` — every exchange with state TX and city Austin.
pub struct GetIndexedSlicesForCityState<'a> {
    keyspace: &'a Keyspace,
}

impl<'a> GetIndexedSlicesForCityState<'a> {
    pub fn new(keyspace: &'a Keyspace) -> Self {
        Self { keyspace }
    }
}

impl TutorialCommand for GetIndexedSlicesForCityState<'_> {
    fn name(&self) -> &'static str {
        "get_indexed_slices"
    }

    fn keyspace(&self) -> &Keyspace {
        self.keyspace
    }

    fn execute(&self) -> TutorialResult<QueryResult<Payload>> {
        let result = IndexedSlicesQuery::new(self.keyspace)
            .column_family(NPANXX)
            .add_equals_expression("state", "TX")
            .add_equals_expression("city", "Austin")
            .column_names(["city", "lat", "lng"])
            .execute()?;
        Ok(result.map(Payload::Rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ConnectionContext;
    use tutorial_core::config::ClusterConfig;

    fn context() -> ConnectionContext {
        ConnectionContext::open(&ClusterConfig::default()).unwrap()
    }

    #[test]
    fn test_get_returns_single_column() {
        let ctx = context();
        let result = GetCityForNpanxx::new(ctx.keyspace()).execute().unwrap();
        assert_eq!(result.get().to_string(), "HColumn(city=Austin)");
        assert!(result.get().rows().is_none());
    }

    #[test]
    fn test_slices_are_single_payloads() {
        let ctx = context();
        let ks = ctx.keyspace();

        let result = GetSliceForNpanxx::new(ks).execute().unwrap();
        assert!(matches!(result.get(), Payload::Slice(s) if s.len() == 4));

        let result = GetSliceForAreaCodeCity::new(ks).execute().unwrap();
        assert!(matches!(result.get(), Payload::Slice(s) if s.len() == 5));

        let result = GetSliceForStateCity::new(ks).execute().unwrap();
        assert!(matches!(result.get(), Payload::Slice(s) if s.len() == 3));
    }

    #[test]
    fn test_row_commands() {
        let ctx = context();
        let ks = ctx.keyspace();

        let result = GetRangeSlicesForStateCity::new(ks).execute().unwrap();
        assert_eq!(result.get().rows().unwrap().len(), 1);

        let result = MultigetSliceForNpanxx::new(ks).execute().unwrap();
        assert_eq!(result.get().rows().unwrap().len(), 4);

        let result = GetIndexedSlicesForCityState::new(ks).execute().unwrap();
        assert_eq!(result.get().rows().unwrap().len(), 8);
    }

    #[test]
    fn test_missing_column_displays_none() {
        assert_eq!(Payload::Column(None).to_string(), "None");
    }
}
