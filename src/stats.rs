//! Count summaries over the classified rows, shared by the terminal
//! summary and the HTML report badges.
use std::collections::HashSet;

use crate::follow::{Relation, RelationRow};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuditStats {
    pub followers_total: usize,
    pub following_total: usize,
    pub mutual: usize,
    pub you_follow_only: usize,
    pub they_follow_only: usize,
}

impl AuditStats {
    /// Share of accounts you follow that follow back.
    pub fn follow_back_rate(&self) -> String {
        pct(self.mutual, self.following_total)
    }

    /// Share of your followers you also follow.
    pub fn mutual_share(&self) -> String {
        pct(self.mutual, self.followers_total)
    }
}

fn pct(n: usize, d: usize) -> String {
    if d == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", (n as f64) / (d as f64) * 100.0)
}

/// Compute totals from the two membership sets and the classified rows.
pub fn audit_stats(
    followers: &HashSet<String>,
    following: &HashSet<String>,
    rows: &[RelationRow],
) -> AuditStats {
    let mut stats = AuditStats {
        followers_total: followers.len(),
        following_total: following.len(),
        ..Default::default()
    };
    for row in rows {
        match row.relation {
            Relation::Mutual => stats.mutual += 1,
            Relation::YouFollowOnly => stats.you_follow_only += 1,
            Relation::TheyFollowOnly => stats.they_follow_only += 1,
            Relation::Unknown => {}
        }
    }
    stats
}

/// Rows of one relation, in input order.
pub fn subset<'a>(rows: &'a [RelationRow], relation: Relation) -> Vec<&'a RelationRow> {
    rows.iter().filter(|r| r.relation == relation).collect()
}
