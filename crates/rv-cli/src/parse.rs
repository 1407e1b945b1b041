//! Raw text to typed request parameters

use std::collections::BTreeSet;

use anyhow::{Context, Result};

/// Comma-separated items, each trimmed. Empty entries are kept.
pub fn parse_items(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Comma-separated integers; blank input is the empty set
pub fn parse_int_set(raw: &str) -> Result<BTreeSet<i64>> {
    if raw.trim().is_empty() {
        return Ok(BTreeSet::new());
    }
    raw.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>()
                .with_context(|| format!("invalid integer '{part}' in exclusion list"))
        })
        .collect()
}
