//! Error types for the tutorial column-family store and client.
//!
//! All public APIs return `TutorialResult<T>`; library code does not panic.

use thiserror::Error;

/// Unified error type for all store and client operations.
#[derive(Debug, Error)]
pub enum TutorialError {
    /// Requested keyspace does not exist
    #[error("keyspace '{0}' not found")]
    KeyspaceNotFound(String),

    /// Keyspace already exists
    #[error("keyspace '{0}' already exists")]
    KeyspaceAlreadyExists(String),

    /// Requested column family does not exist in the keyspace
    #[error("column family '{column_family}' not found in keyspace '{keyspace}'")]
    ColumnFamilyNotFound {
        keyspace: String,
        column_family: String,
    },

    /// Column family already exists
    #[error("column family '{0}' already exists")]
    ColumnFamilyAlreadyExists(String),

    /// Malformed query (missing key, empty predicate, no indexed EQ clause, ...)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Seed host string could not be parsed
    #[error("invalid host '{0}'")]
    InvalidHost(String),

    /// Host pool has no hosts to hand out
    #[error("no available host in cluster '{0}'")]
    NoAvailableHost(String),

    /// Connection manager was already shut down
    #[error("cluster '{0}' has been shut down")]
    ClusterShutdown(String),

    /// Tutorial dataset could not be parsed
    #[error("dataset error: {source}")]
    Dataset {
        #[from]
        source: csv::Error,
    },
}

/// Result type alias for all store and client operations.
pub type TutorialResult<T> = Result<T, TutorialError>;
