//! Display formatting helpers shared by cards and lists.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::StorageInfo;

/// Shorten long identifiers to `head…tail`, leaving short ones untouched.
pub fn short_id(id: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= head + tail + 1 {
        return id.to_owned();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{start}…{end}")
}

/// Date part of an RFC 3339 timestamp (`2024-02-11T09:30:00Z` → `2024-02-11`).
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split_once('T').map_or(timestamp, |(date, _)| date)
}

/// Join a list for display, with a placeholder when empty.
pub fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() { "—".to_owned() } else { items.join(", ") }
}

/// One-line storage description: provider, shortened CID, deal and replicas.
/// Missing parts are skipped rather than shown as placeholders.
pub fn storage_summary(storage: &StorageInfo) -> String {
    let mut parts = vec![if storage.provider.is_empty() { "storage".to_owned() } else { storage.provider.clone() }];
    parts.push(storage.cid.as_deref().map_or_else(|| "pending".to_owned(), |c| short_id(c, 10, 6)));
    if let Some(deal) = &storage.deal_id {
        parts.push(format!("deal {deal}"));
    }
    if let Some(replication) = storage.replication {
        parts.push(format!("×{replication}"));
    }
    parts.join(" · ")
}
