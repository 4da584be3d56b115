//! `tracing` events for resolved statements.
//!
//! Enable via the crate feature: `sqlweave = { features = ["tracing"] }`.

use crate::build::Built;
use crate::error::SqlError;

/// Longest SQL text (in bytes) included in an event.
const MAX_SQL_LENGTH: usize = 200;

/// Truncate SQL to at most `max_bytes`, respecting UTF-8 char boundaries.
fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

fn display_sql(sql: &str) -> String {
    if sql.len() > MAX_SQL_LENGTH {
        format!("{}...", truncate_sql_bytes(sql, MAX_SQL_LENGTH))
    } else {
        sql.to_string()
    }
}

pub(crate) fn built(personality: &'static str, built: &Built) {
    tracing::debug!(
        target: "sqlweave.build",
        personality,
        params = built.params.len(),
        sql = %display_sql(&built.text),
        "statement built"
    );
}

pub(crate) fn build_failed(personality: &'static str, err: &SqlError) {
    tracing::debug!(
        target: "sqlweave.build",
        personality,
        error = %err,
        "statement build failed"
    );
}
