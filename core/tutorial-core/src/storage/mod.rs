//! Storage module — embedded column-family store.
//!
//! ```text
//! ColumnStore ── keyspace ──▶ KeyspaceStore ── column family ──▶ ColumnFamily
//!                                                                ├─ rows: SkipMap<key, BTreeMap<name, HColumn>>
//!                                                                └─ SecondaryIndex: column → value → keys
//! ```

pub mod column_family;
pub mod index;
pub mod model;
pub mod predicate;
pub mod store;

pub use column_family::ColumnFamily;
pub use index::SecondaryIndex;
pub use model::{ColumnSlice, HColumn, Row, Rows};
pub use predicate::{
    DEFAULT_ROW_COUNT, IndexClause, IndexExpression, IndexOperator, KeyRange, SlicePredicate,
    SliceRange,
};
pub use store::{ColumnStore, KeyspaceStore};
