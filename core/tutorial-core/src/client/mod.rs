//! Client API — cluster and keyspace handles, queries and results.
//!
//! Mirrors the shape of a Thrift-era column-family client: a [`Cluster`] is
//! created from a name and a seed list, a [`Keyspace`] is bound to it, and
//! each query builder borrows the keyspace, picks a host from the pool and
//! returns a [`QueryResult`] carrying the payload, the host used and the
//! execution time in microseconds.

pub mod cluster;
pub mod host;
pub mod keyspace;
pub mod query;
pub mod result;

pub use cluster::{Cluster, ConnectionManager};
pub use host::{CassandraHost, HostPool, parse_seeds};
pub use keyspace::Keyspace;
pub use query::{ColumnQuery, IndexedSlicesQuery, MultigetSliceQuery, RangeSlicesQuery, SliceQuery};
pub use result::QueryResult;
