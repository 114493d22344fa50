//! # tutorial-core — embedded column-family store and client
//!
//! 튜토리얼 쿼리가 실행되는 컬럼 패밀리 저장소와 클라이언트 API입니다.
//!
//! ## 빠른 시작
//!
//! ```rust
//! use tutorial_core::client::{Cluster, ColumnQuery, Keyspace};
//! use tutorial_core::config::ClusterConfig;
//! use tutorial_core::dataset::open_tutorial_store;
//!
//! # fn main() -> tutorial_core::TutorialResult<()> {
//! let config = ClusterConfig::default();
//! let store = open_tutorial_store(&config.keyspace)?;
//! let cluster = Cluster::connect(&config, store)?;
//! let keyspace = Keyspace::create(&config.keyspace, &cluster)?;
//!
//! let result = ColumnQuery::new(&keyspace)
//!     .column_family("Npanxx")
//!     .key("512204")
//!     .name("city")
//!     .execute()?;
//! assert_eq!(result.get().as_ref().map(|c| c.value.as_str()), Some("Austin"));
//!
//! cluster.connection_manager().shutdown();
//! # Ok(())
//! # }
//! ```
//!
//! ## 모듈 구조
//!
//! - [`storage`] — 컬럼 패밀리 저장소 ([`storage::ColumnStore`])
//! - [`dataset`] — 튜토리얼 샘플 데이터 로더
//! - [`client`] — 클러스터/키스페이스 핸들과 쿼리 빌더
//! - [`config`] — 연결 상수
//! - [`logging`] — tracing 초기화

pub mod client;
pub mod config;
pub mod dataset;
pub mod error;
pub mod storage;

// Logging utilities
pub mod logging;

pub use error::{TutorialError, TutorialResult};
