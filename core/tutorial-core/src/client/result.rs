//! Query result — payload plus execution metadata.

use crate::client::host::CassandraHost;

/// Value returned by a query together with where and how fast it ran.
#[derive(Debug, Clone)]
pub struct QueryResult<T> {
    value: T,
    execution_time_micro: u64,
    host_used: CassandraHost,
}

impl<T> QueryResult<T> {
    pub fn new(value: T, execution_time_micro: u64, host_used: CassandraHost) -> Self {
        Self {
            value,
            execution_time_micro,
            host_used,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn execution_time_micro(&self) -> u64 {
        self.execution_time_micro
    }

    pub fn host_used(&self) -> &CassandraHost {
        &self.host_used
    }

    /// Convert the payload, keeping timing and host.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryResult<U> {
        QueryResult {
            value: f(self.value),
            execution_time_micro: self.execution_time_micro,
            host_used: self.host_used,
        }
    }
}
