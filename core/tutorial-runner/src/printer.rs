//! Result printer
//!
//! ```text
//! +-------------------------------------------------
//! | Result executed in: 42 microseconds against host: localhost:9160
//! | Row(...)                      ← one line per row, or
//! | Result: ColumnSlice([...])    ← a single line
//! +-------------------------------------------------
//! ```

use crate::commands::Payload;
use tracing::info;
use tutorial_core::client::QueryResult;

/// Banner rule opening and closing every printed result.
pub const RULE: &str = "+-------------------------------------------------";

/// Lines printed for `result`, banner included.
pub fn render_results(result: &QueryResult<Payload>) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        format!(
            "| Result executed in: {} microseconds against host: {}",
            result.execution_time_micro(),
            result.host_used().name()
        ),
    ];

    match result.get().rows() {
        Some(rows) => lines.extend(rows.iter().map(|row| format!("| {row}"))),
        None => lines.push(format!("| Result: {}", result.get())),
    }

    lines.push(RULE.to_string());
    lines
}

/// Log every line of `result` at INFO level.
pub fn print_results(result: &QueryResult<Payload>) {
    for line in render_results(result) {
        info!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorial_core::client::CassandraHost;
    use tutorial_core::storage::{ColumnSlice, HColumn, Row, Rows};

    fn result(payload: Payload) -> QueryResult<Payload> {
        QueryResult::new(payload, 17, CassandraHost::new("localhost", 9160))
    }

    #[test]
    fn test_rows_print_one_line_each() {
        let rows: Rows = (0..3)
            .map(|i| Row::new(format!("k{i}"), ColumnSlice::default()))
            .collect();
        let lines = render_results(&result(Payload::Rows(rows)));

        assert_eq!(lines.len(), 3 + 3);
        assert_eq!(lines[0], RULE);
        assert_eq!(
            lines[1],
            "| Result executed in: 17 microseconds against host: localhost:9160"
        );
        assert_eq!(lines[2], "| Row(k0,ColumnSlice([]))");
        assert_eq!(lines[4], "| Row(k2,ColumnSlice([]))");
        assert_eq!(lines[5], RULE);
    }

    #[test]
    fn test_empty_rows_print_banner_only() {
        let lines = render_results(&result(Payload::Rows(Rows::default())));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_single_value_prints_one_line() {
        let column = HColumn::new("city", "Austin", 1);
        let lines = render_results(&result(Payload::Column(Some(column))));
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "| Result: HColumn(city=Austin)");

        let slice = ColumnSlice::new(vec![
            HColumn::new("202", "512", 1),
            HColumn::new("203", "512", 1),
        ]);
        let lines = render_results(&result(Payload::Slice(slice)));
        assert_eq!(lines.len(), 4);
    }
}
