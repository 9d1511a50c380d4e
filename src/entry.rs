use serde::Deserialize;

use crate::follow::FollowRecord;

/// Innermost record carried by every export entry.
#[derive(Debug, Clone, Deserialize)]
pub struct StringListItem {
    pub value: Option<String>,
    pub timestamp: Option<i64>,
}

/// One entry of a followers shard or of the following collection. The
/// export wraps each account in a single-element `string_list_data` list.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEntry {
    #[serde(default)]
    pub string_list_data: Vec<StringListItem>,
}

/// Document shape of `following.json`. A missing collection reads as empty.
#[derive(Debug, Deserialize)]
pub struct FollowingDoc {
    #[serde(default)]
    pub relationships_following: Vec<ListEntry>,
}

/// Extract the membership record from one entry. Entries without a username
/// are malformed and yield `None`; the timestamp rides along when present.
pub fn record_from_entry(entry: &ListEntry) -> Option<FollowRecord> {
    let item = entry.string_list_data.first()?;
    let username = item.value.as_deref()?;
    Some(FollowRecord::new(username, item.timestamp))
}

/// Parse one followers shard (a top-level JSON array), skipping malformed
/// entries.
pub fn parse_followers_doc(contents: &str) -> serde_json::Result<Vec<FollowRecord>> {
    let entries: Vec<ListEntry> = serde_json::from_str(contents)?;
    Ok(collect_records(&entries))
}

/// Parse `following.json`, skipping malformed entries.
pub fn parse_following_doc(contents: &str) -> serde_json::Result<Vec<FollowRecord>> {
    let doc: FollowingDoc = serde_json::from_str(contents)?;
    Ok(collect_records(&doc.relationships_following))
}

fn collect_records(entries: &[ListEntry]) -> Vec<FollowRecord> {
    let mut skipped = 0usize;
    let records: Vec<FollowRecord> = entries
        .iter()
        .filter_map(|e| {
            let rec = record_from_entry(e);
            if rec.is_none() {
                skipped += 1;
            }
            rec
        })
        .collect();
    if skipped > 0 {
        log::debug!("skipped {skipped} entries without a username");
    }
    records
}
