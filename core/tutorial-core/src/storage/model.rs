//! Column, slice and row values returned by the store.
//!
//! `Display` output follows the `HColumn(name=value)` /
//! `Row(key,ColumnSlice([...]))` shape the tutorial prints.

use std::fmt;

/// A single named column with its value and write clock (microseconds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HColumn {
    pub name: String,
    pub value: String,
    pub clock: i64,
}

impl HColumn {
    pub fn new(name: impl Into<String>, value: impl Into<String>, clock: i64) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            clock,
        }
    }
}

impl fmt::Display for HColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HColumn({}={})", self.name, self.value)
    }
}

/// Columns of one row, in comparator order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSlice {
    columns: Vec<HColumn>,
}

impl ColumnSlice {
    pub fn new(columns: Vec<HColumn>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[HColumn] {
        &self.columns
    }

    /// Look a column up by name.
    pub fn column(&self, name: &str) -> Option<&HColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl fmt::Display for ColumnSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnSlice([")?;
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{column}")?;
        }
        write!(f, "])")
    }
}

/// A row key together with the columns selected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    key: String,
    slice: ColumnSlice,
}

impl Row {
    pub fn new(key: impl Into<String>, slice: ColumnSlice) -> Self {
        Self {
            key: key.into(),
            slice,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn column_slice(&self) -> &ColumnSlice {
        &self.slice
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row({},{})", self.key, self.slice)
    }
}

/// Ordered collection of rows (request order for multiget, key order otherwise).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rows {
    rows: Vec<Row>,
}

impl Rows {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn by_key(&self, key: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a Rows {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FromIterator<Row> for Rows {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Rows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rows([")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{row}")?;
        }
        write!(f, "])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_tutorial_shape() {
        let slice = ColumnSlice::new(vec![
            HColumn::new("city", "Austin", 1),
            HColumn::new("state", "TX", 1),
        ]);
        let row = Row::new("512202", slice);
        assert_eq!(
            row.to_string(),
            "Row(512202,ColumnSlice([HColumn(city=Austin), HColumn(state=TX)]))"
        );
    }

    #[test]
    fn empty_slice_display() {
        assert_eq!(ColumnSlice::default().to_string(), "ColumnSlice([])");
    }

    #[test]
    fn rows_lookup_by_key() {
        let rows: Rows = vec![
            Row::new("a", ColumnSlice::default()),
            Row::new("b", ColumnSlice::default()),
        ]
        .into_iter()
        .collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.by_key("b").is_some());
        assert!(rows.by_key("c").is_none());
    }
}
