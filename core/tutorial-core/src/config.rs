//! Connection settings — cluster name, seed hosts and keyspace.
//!
//! The tutorial always runs against the same local node, so these are
//! constants rather than a configuration file.

/// Cluster name used by every tutorial command.
pub const DEFAULT_CLUSTER_NAME: &str = "TestCluster";

/// Seed host list (`host[:port]`, comma separated).
pub const DEFAULT_SEEDS: &str = "localhost:9160";

/// Keyspace holding the tutorial column families.
pub const DEFAULT_KEYSPACE: &str = "Tutorial";

/// Port assumed for seeds written without one.
pub const DEFAULT_PORT: u16 = 9160;

/// 클러스터 연결 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    /// 클러스터 이름
    pub cluster_name: String,
    /// 시드 호스트 목록 (쉼표로 구분)
    pub seeds: String,
    /// 키스페이스 이름
    pub keyspace: String,
    /// 포트가 생략된 시드에 사용할 기본 포트
    pub default_port: u16,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            cluster_name: DEFAULT_CLUSTER_NAME.to_string(),
            seeds: DEFAULT_SEEDS.to_string(),
            keyspace: DEFAULT_KEYSPACE.to_string(),
            default_port: DEFAULT_PORT,
        }
    }
}

impl ClusterConfig {
    /// Replace the seed list (builder style).
    pub fn with_seeds(mut self, seeds: impl Into<String>) -> Self {
        self.seeds = seeds.into();
        self
    }
}
