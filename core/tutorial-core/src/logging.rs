//! Tracing setup for the runner binary and the test suites.
//!
//! `RUST_LOG` takes precedence over the level passed in. Only the first
//! subscriber installed in a process is kept; later calls return `false`.

#[cfg(feature = "logging")]
use tracing_subscriber::{EnvFilter, fmt};

/// Level used by [`init`] when `RUST_LOG` is unset.
pub const DEFAULT_LEVEL: &str = "info";

#[cfg(feature = "logging")]
fn env_filter_or(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// 기본 설정으로 로깅 초기화
///
/// ```rust
/// tutorial_core::logging::init();
/// ```
#[cfg(feature = "logging")]
pub fn init() -> bool {
    init_with_level(DEFAULT_LEVEL)
}

/// Install a fmt subscriber at `level` (trace, debug, info, warn, error).
///
/// The printer banner is the program's output, so events carry their target
/// but no line numbers.
#[cfg(feature = "logging")]
pub fn init_with_level(level: &str) -> bool {
    fmt()
        .with_env_filter(env_filter_or(level))
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Debug-level subscriber writing through the test harness capture.
#[cfg(feature = "logging")]
pub fn init_test() -> bool {
    fmt()
        .with_env_filter(env_filter_or("debug"))
        .with_test_writer()
        .try_init()
        .is_ok()
}

// Stub implementations when logging feature is disabled
#[cfg(not(feature = "logging"))]
pub fn init() -> bool {
    false
}

#[cfg(not(feature = "logging"))]
pub fn init_with_level(_level: &str) -> bool {
    false
}

#[cfg(not(feature = "logging"))]
pub fn init_test() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_keeps_first_subscriber() {
        init_test();
        assert!(!init_test());
        assert!(!init_with_level("trace"));
        assert!(!init());
    }
}
