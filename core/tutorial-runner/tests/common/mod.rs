//! Shared helpers: tutorial contexts and scoped log capture.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};
use tutorial_core::config::ClusterConfig;
use tutorial_core::storage::ColumnStore;
use tutorial_runner::ConnectionContext;

/// Context over the bundled tutorial dataset.
pub fn tutorial_context() -> ConnectionContext {
    ConnectionContext::open(&ClusterConfig::default()).expect("open tutorial context")
}

/// Context whose keyspace exists but holds no column families, so every
/// command fails at execution time.
pub fn empty_context() -> ConnectionContext {
    let config = ClusterConfig::default();
    let store = Arc::new(ColumnStore::new());
    store
        .create_keyspace(&config.keyspace)
        .expect("create keyspace");
    ConnectionContext::connect(&config, store).expect("connect empty context")
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return its formatted log lines.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    let lines = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect();
    (result, lines)
}

/// Lines emitted by the result printer.
pub fn printer_lines(lines: &[String]) -> Vec<&String> {
    lines
        .iter()
        .filter(|l| l.contains("tutorial_runner::printer"))
        .collect()
}
