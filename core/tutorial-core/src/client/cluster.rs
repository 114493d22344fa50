//! Cluster handle and its connection manager.

use crate::client::host::{CassandraHost, HostPool, parse_seeds};
use crate::config::ClusterConfig;
use crate::error::{TutorialError, TutorialResult};
use crate::storage::ColumnStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tracing::{debug, info, instrument};

/// Owns the host pool; shutting it down ends every later query.
#[derive(Debug)]
pub struct ConnectionManager {
    cluster_name: String,
    pool: HostPool,
    shutdown: AtomicBool,
    shutdown_calls: AtomicUsize,
}

impl ConnectionManager {
    fn new(cluster_name: &str, hosts: Vec<CassandraHost>) -> Self {
        Self {
            cluster_name: cluster_name.to_string(),
            pool: HostPool::new(hosts),
            shutdown: AtomicBool::new(false),
            shutdown_calls: AtomicUsize::new(0),
        }
    }

    /// Pick the host that will serve the next operation.
    pub fn borrow_host(&self) -> TutorialResult<CassandraHost> {
        if self.is_shutdown() {
            return Err(TutorialError::ClusterShutdown(self.cluster_name.clone()));
        }
        self.pool
            .next_host()
            .cloned()
            .ok_or_else(|| TutorialError::NoAvailableHost(self.cluster_name.clone()))
    }

    /// Release the pool. Safe to call again; later calls only log.
    pub fn shutdown(&self) {
        self.shutdown_calls.fetch_add(1, Ordering::SeqCst);
        if self.shutdown.swap(true, Ordering::SeqCst) {
            debug!(cluster = %self.cluster_name, "Connection manager already shut down");
            return;
        }
        info!(cluster = %self.cluster_name, "Shutting down connection manager");
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// How many times `shutdown` has been called.
    pub fn shutdown_count(&self) -> usize {
        self.shutdown_calls.load(Ordering::SeqCst)
    }
}

struct ClusterInner {
    name: String,
    connection_manager: ConnectionManager,
    store: Arc<ColumnStore>,
}

/// 클러스터 핸들
///
/// 시드 호스트 목록과 연결 관리자를 보관합니다. 복제(clone)된 핸들은
/// 같은 상태를 공유합니다.
#[derive(Clone)]
pub struct Cluster {
    inner: Arc<ClusterInner>,
}

impl Cluster {
    /// Connect to the cluster described by `config`, backed by `store`.
    #[instrument(skip(config, store), fields(cluster = %config.cluster_name))]
    pub fn connect(config: &ClusterConfig, store: Arc<ColumnStore>) -> TutorialResult<Self> {
        let hosts = parse_seeds(&config.seeds, config.default_port)?;
        if hosts.is_empty() {
            return Err(TutorialError::NoAvailableHost(config.cluster_name.clone()));
        }
        info!(
            "Connecting to cluster with seeds [{}]",
            hosts
                .iter()
                .map(CassandraHost::name)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            inner: Arc::new(ClusterInner {
                name: config.cluster_name.clone(),
                connection_manager: ConnectionManager::new(&config.cluster_name, hosts),
                store,
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn connection_manager(&self) -> &ConnectionManager {
        &self.inner.connection_manager
    }

    pub(crate) fn store(&self) -> &ColumnStore {
        &self.inner.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(seeds: &str) -> TutorialResult<Cluster> {
        let config = ClusterConfig::default().with_seeds(seeds);
        Cluster::connect(&config, Arc::new(ColumnStore::new()))
    }

    #[test]
    fn test_connect_parses_seeds() {
        let cluster = cluster("localhost:9160").unwrap();
        assert_eq!(cluster.name(), "TestCluster");
        let manager = cluster.connection_manager();
        assert_eq!(manager.borrow_host().unwrap().name(), "localhost:9160");
        assert_eq!(manager.borrow_host().unwrap().name(), "localhost:9160");
    }

    #[test]
    fn test_connect_without_seeds() {
        assert!(matches!(
            cluster(" , "),
            Err(TutorialError::NoAvailableHost(_))
        ));
    }

    #[test]
    fn test_shutdown_blocks_borrowing() {
        let cluster = cluster("localhost").unwrap();
        let manager = cluster.connection_manager();
        assert!(manager.borrow_host().is_ok());

        manager.shutdown();
        manager.shutdown();
        assert!(manager.is_shutdown());
        assert_eq!(manager.shutdown_count(), 2);
        assert!(matches!(
            manager.borrow_host(),
            Err(TutorialError::ClusterShutdown(_))
        ));
    }

    #[test]
    fn test_clones_share_state() {
        let cluster = cluster("localhost").unwrap();
        let other = cluster.clone();
        other.connection_manager().shutdown();
        assert!(cluster.connection_manager().is_shutdown());
    }
}
