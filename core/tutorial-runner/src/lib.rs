//! # tutorial-runner
//!
//! 첫 번째 인자로 받은 토큰에 맞는 예제 쿼리를 찾아 실행하고 결과를 출력합니다.
//!
//! ```text
//! ConnectionContext::open → load_command(token) → execute → print_results
//!                                   │ no match        │ error → log
//!                                   └────────┬────────┘
//!                                     context released
//! ```
//!
//! - [`context`] — 클러스터/키스페이스 핸들
//! - [`commands`] — 7개의 예제 쿼리
//! - [`resolver`] — 토큰 → 커맨드
//! - [`printer`] — 결과 배너 출력
//! - [`runner`] — 실행 수명 주기

pub mod commands;
pub mod context;
pub mod printer;
pub mod resolver;
pub mod runner;

pub use commands::{Payload, TutorialCommand};
pub use context::ConnectionContext;
pub use resolver::{CommandKind, load_command};
pub use runner::{RunOutcome, run};
