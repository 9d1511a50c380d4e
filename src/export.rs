//! Export helpers for writing membership and relation CSV files.
//!
//! - `save_follow_rows_csv` mirrors one membership list (`username,follow_ts`).
//! - `save_relations_csv` writes every classified row sorted by relation
//!   rank, then username.
//! - `save_relation_subset_csv` writes one relation's rows in the same order.
use std::path::Path;

use anyhow::Result;
use csv::Writer;

use crate::follow::{FollowRecord, Relation, RelationRow};

/// Column order of the relations CSVs.
pub const RELATION_HEADERS: [&str; 5] =
    ["username", "follows_you", "you_follow", "relation", "profile_url"];

pub fn save_follow_rows_csv<P: AsRef<Path>>(rows: &[FollowRecord], path: P) -> Result<()> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(["username", "follow_ts"])?;
    for r in rows {
        let ts = r.follow_ts.map(|t| t.to_string()).unwrap_or_default();
        wtr.write_record([r.username.as_str(), ts.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Rank-then-username order used by every relations CSV. The rank groups
/// the directions ahead of mutual; within a rank usernames ascend.
pub fn export_order(rows: &[RelationRow]) -> Vec<&RelationRow> {
    let mut ordered: Vec<&RelationRow> = rows.iter().collect();
    ordered.sort_by(|a, b| {
        (a.relation.rank(), a.username.as_str()).cmp(&(b.relation.rank(), b.username.as_str()))
    });
    ordered
}

pub fn save_relations_csv<P: AsRef<Path>>(rows: &[RelationRow], path: P) -> Result<()> {
    write_relation_rows(&export_order(rows), path)
}

pub fn save_relation_subset_csv<P: AsRef<Path>>(
    rows: &[RelationRow],
    relation: Relation,
    path: P,
) -> Result<()> {
    let ordered: Vec<&RelationRow> = export_order(rows)
        .into_iter()
        .filter(|r| r.relation == relation)
        .collect();
    write_relation_rows(&ordered, path)
}

fn write_relation_rows<P: AsRef<Path>>(rows: &[&RelationRow], path: P) -> Result<()> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(RELATION_HEADERS)?;
    for r in rows {
        wtr.write_record([
            r.username.as_str(),
            bool_str(r.follows_you),
            bool_str(r.you_follow),
            r.relation.as_str(),
            r.profile_url.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn bool_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}
