//! Connection context — the cluster and keyspace handles shared by every
//! command of one process run.

use std::sync::Arc;
use tracing::{error, info};
use tutorial_core::TutorialResult;
use tutorial_core::client::{Cluster, Keyspace};
use tutorial_core::config::ClusterConfig;
use tutorial_core::dataset::open_tutorial_store;
use tutorial_core::storage::ColumnStore;

/// 연결 컨텍스트
///
/// 프로세스 시작 시 한 번 생성되고, drop 시 연결 관리자를 정확히 한 번
/// 종료합니다. 커맨드는 이 컨텍스트의 키스페이스를 빌려서 실행됩니다.
pub struct ConnectionContext {
    cluster: Cluster,
    keyspace: Keyspace,
}

impl ConnectionContext {
    /// Open the bundled tutorial store and connect to it.
    pub fn open(config: &ClusterConfig) -> TutorialResult<Self> {
        let store = open_tutorial_store(&config.keyspace)?;
        Self::connect(config, store)
    }

    /// Connect to an existing store.
    ///
    /// If the keyspace cannot be bound, the freshly created cluster is shut
    /// down before the error is returned.
    pub fn connect(config: &ClusterConfig, store: Arc<ColumnStore>) -> TutorialResult<Self> {
        let cluster = Cluster::connect(config, store)?;
        match Keyspace::create(&config.keyspace, &cluster) {
            Ok(keyspace) => {
                info!(
                    cluster = %cluster.name(),
                    keyspace = %keyspace.name(),
                    "Connection context ready"
                );
                Ok(Self { cluster, keyspace })
            }
            Err(e) => {
                error!(keyspace = %config.keyspace, "Unable to bind keyspace: {}", e);
                cluster.connection_manager().shutdown();
                Err(e)
            }
        }
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    pub fn keyspace(&self) -> &Keyspace {
        &self.keyspace
    }

    /// Release the connection context. Equivalent to dropping it.
    pub fn close(self) {}
}

impl Drop for ConnectionContext {
    fn drop(&mut self) {
        self.cluster.connection_manager().shutdown();
    }
}
