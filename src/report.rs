//! Human-readable terminal summary rendering.
//!
//! Produces a colored overview of the relation counts and follow-back
//! rates. The CSV and HTML artifacts carry the full detail; this is the
//! at-a-glance view printed after a run.
use colored::*;

use crate::engine::Engine;
use crate::stats::audit_stats;

fn visible_len(s: &str) -> usize {
    // Strip ANSI escape sequences (\x1b[ ... m) to compute printable width
    let mut len = 0;
    let mut iter = s.chars().peekable();
    while let Some(ch) = iter.next() {
        if ch == '\u{1b}' {
            if let Some('[') = iter.peek().cloned() {
                let _ = iter.next();
            }
            for c in iter.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

fn section_header(title: &str) -> String {
    let len = visible_len(title);
    let mut s = String::new();
    s.push('\n');
    s.push_str(title);
    s.push('\n');
    s.push_str(&"─".repeat(len));
    s.push_str("\n\n");
    s
}

pub fn render_summary(engine: &Engine) -> String {
    let rows = engine.relation_rows();
    let stats = audit_stats(&engine.followers, &engine.following, &rows);

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        "Followers vs Following Audit Results".bold().cyan()
    ));

    out.push_str(&section_header(
        &"Relation Counts".bold().yellow().to_string(),
    ));
    out.push_str(&format!("Followers: {}\n", stats.followers_total));
    out.push_str(&format!("Following: {}\n", stats.following_total));
    out.push_str(&format!("Mutual: {}\n", stats.mutual));
    out.push_str(&format!(
        "You follow - they do not: {}\n",
        stats.you_follow_only
    ));
    out.push_str(&format!(
        "They follow you only: {}\n",
        stats.they_follow_only
    ));

    out.push_str(&section_header(&"Rates".bold().cyan().to_string()));
    out.push_str(&format!("Follow-back rate: {}\n", stats.follow_back_rate()));
    out.push_str(&format!(
        "Mutual share of followers: {}\n",
        stats.mutual_share()
    ));

    out
}
