//! Follow-relation data model: membership records pulled from the export,
//! the three-way relation classification, and the derived report rows.
//!
//! `FollowRecord` instances are created once by the archive loader and stay
//! immutable. `RelationRow` instances are derived per username in the union
//! of both membership sets via [`classify`] and live only as long as report
//! generation.

use std::collections::HashSet;

/// Profile link template base. The username is substituted verbatim.
pub const PROFILE_URL_BASE: &str = "https://instagram.com/";

/// One entry from either membership list. `follow_ts` is epoch seconds as
/// recorded by the platform; older exports omit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowRecord {
    pub username: String,
    pub follow_ts: Option<i64>,
}

impl FollowRecord {
    pub fn new(username: impl Into<String>, follow_ts: Option<i64>) -> Self {
        Self {
            username: username.into(),
            follow_ts,
        }
    }
}

/// Three-way relation between the subject account and another account.
///
/// `Unknown` cannot arise for usernames drawn from the union of the two
/// membership sets; it stays as a catch-all in case an upstream loader ever
/// hands the classifier an out-of-domain username.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Mutual,
    YouFollowOnly,
    TheyFollowOnly,
    Unknown,
}

impl Relation {
    /// Classify from the two membership flags.
    pub fn from_flags(follows_you: bool, you_follow: bool) -> Self {
        match (follows_you, you_follow) {
            (true, true) => Relation::Mutual,
            (false, true) => Relation::YouFollowOnly,
            (true, false) => Relation::TheyFollowOnly,
            (false, false) => Relation::Unknown,
        }
    }

    /// Name used in the relations CSV column, the filtered CSV file stems,
    /// and the HTML section ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Mutual => "mutual",
            Relation::YouFollowOnly => "you_follow_they_do_not",
            Relation::TheyFollowOnly => "they_follow_you_only",
            Relation::Unknown => "unknown",
        }
    }

    /// Export sort priority. Orders CSV rows only; classification never
    /// consults it.
    pub fn rank(&self) -> u8 {
        match self {
            Relation::YouFollowOnly => 0,
            Relation::TheyFollowOnly => 1,
            Relation::Mutual => 2,
            Relation::Unknown => 9,
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the canonical profile link for a username.
pub fn profile_url(username: &str) -> String {
    format!("{PROFILE_URL_BASE}{username}")
}

/// One classified row, derived per username in the union of both sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationRow {
    pub username: String,
    pub follows_you: bool,
    pub you_follow: bool,
    pub relation: Relation,
    pub profile_url: String,
}

impl RelationRow {
    pub fn new(username: impl Into<String>, follows_you: bool, you_follow: bool) -> Self {
        let username = username.into();
        let profile_url = profile_url(&username);
        Self {
            username,
            follows_you,
            you_follow,
            relation: Relation::from_flags(follows_you, you_follow),
            profile_url,
        }
    }
}

/// Classify every username in `followers ∪ following`. Pure: reads the two
/// sets, performs no I/O, mutates nothing. Output is ordered
/// lexicographically by username ascending; usernames are case-sensitive.
pub fn classify(followers: &HashSet<String>, following: &HashSet<String>) -> Vec<RelationRow> {
    let mut usernames: Vec<&String> = followers.union(following).collect();
    usernames.sort();
    usernames
        .into_iter()
        .map(|u| RelationRow::new(u.clone(), followers.contains(u), following.contains(u)))
        .collect()
}
