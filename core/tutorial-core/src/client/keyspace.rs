//! Keyspace handle — entry point for every query.

use crate::client::cluster::Cluster;
use crate::client::result::QueryResult;
use crate::error::TutorialResult;
use crate::storage::{ColumnFamily, KeyspaceStore};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// 키스페이스 핸들
///
/// 클러스터에 바인딩된 논리 네임스페이스입니다. 모든 쿼리는 이 핸들을 통해
/// 호스트를 빌리고 실행 시간을 측정합니다.
#[derive(Clone)]
pub struct Keyspace {
    name: String,
    cluster: Cluster,
    store: Arc<KeyspaceStore>,
}

impl Keyspace {
    /// Bind to an existing keyspace of `cluster`.
    pub fn create(name: &str, cluster: &Cluster) -> TutorialResult<Self> {
        let store = cluster.store().keyspace(name)?;
        info!(keyspace = %name, cluster = %cluster.name(), "Keyspace bound");
        Ok(Self {
            name: name.to_string(),
            cluster: cluster.clone(),
            store,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    /// Run `op` against one column family on a borrowed host, timing it.
    pub(crate) fn execute_operation<T>(
        &self,
        operation: &'static str,
        column_family: &str,
        op: impl FnOnce(&ColumnFamily) -> TutorialResult<T>,
    ) -> TutorialResult<QueryResult<T>> {
        let host = self.cluster.connection_manager().borrow_host()?;
        let cf = self.store.column_family(column_family)?;

        let start = Instant::now();
        let value = op(&cf)?;
        let elapsed = start.elapsed().as_micros() as u64;

        debug!(
            operation,
            keyspace = %self.name,
            column_family,
            host = %host,
            elapsed_us = elapsed,
            "Operation complete"
        );
        Ok(QueryResult::new(value, elapsed, host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClusterConfig;
    use crate::error::TutorialError;
    use crate::storage::ColumnStore;

    fn cluster_with(keyspaces: &[&str]) -> Cluster {
        let store = Arc::new(ColumnStore::new());
        for ks in keyspaces {
            store.create_keyspace(ks).unwrap();
        }
        Cluster::connect(&ClusterConfig::default(), store).unwrap()
    }

    #[test]
    fn test_create_requires_existing_keyspace() {
        let cluster = cluster_with(&["Tutorial"]);
        assert_eq!(Keyspace::create("Tutorial", &cluster).unwrap().name(), "Tutorial");
        assert!(matches!(
            Keyspace::create("Other", &cluster),
            Err(TutorialError::KeyspaceNotFound(_))
        ));
    }

    #[test]
    fn test_execute_reports_host() {
        let cluster = cluster_with(&["Tutorial"]);
        cluster
            .store()
            .keyspace("Tutorial")
            .unwrap()
            .create_column_family("AreaCode")
            .unwrap();
        let keyspace = Keyspace::create("Tutorial", &cluster).unwrap();

        let result = keyspace
            .execute_operation("count", "AreaCode", |cf| Ok(cf.row_count()))
            .unwrap();
        assert_eq!(*result.get(), 0);
        assert_eq!(result.host_used().name(), "localhost:9160");
    }

    #[test]
    fn test_execute_after_shutdown_fails() {
        let cluster = cluster_with(&["Tutorial"]);
        let keyspace = Keyspace::create("Tutorial", &cluster).unwrap();
        cluster.connection_manager().shutdown();

        let err = keyspace
            .execute_operation("count", "AreaCode", |cf| Ok(cf.row_count()))
            .unwrap_err();
        assert!(matches!(err, TutorialError::ClusterShutdown(_)));
    }
}
