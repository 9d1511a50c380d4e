//! Engine: orchestrates archive loading and relation classification over
//! the loaded membership lists.
//!
//! Typical usage:
//!
//! ```no_run
//! use ig_audit::engine::Engine;
//! # fn main() -> anyhow::Result<()> {
//! let mut engine = Engine::new();
//! engine.load_from_archive("/path/to/export.zip")?;
//! let rows = engine.relation_rows();
//! # Ok(())
//! # }
//! ```
use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use crate::archive;
use crate::follow::{FollowRecord, RelationRow, classify};

/// Holds both membership lists and exposes loading helpers.
#[derive(Debug, Default)]
pub struct Engine {
    pub followers: HashSet<String>,
    pub followers_rows: Vec<FollowRecord>,
    pub following: HashSet<String>,
    pub following_rows: Vec<FollowRecord>,
}

impl Engine {
    /// Create an empty engine with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load both membership lists from an export ZIP. The scratch
    /// extraction directory is gone by the time this returns.
    pub fn load_from_archive<P: AsRef<Path>>(&mut self, zip_path: P) -> Result<()> {
        let data = archive::load_from_zip(zip_path)?;
        self.followers = data.followers;
        self.followers_rows = data.followers_rows;
        self.following = data.following;
        self.following_rows = data.following_rows;
        Ok(())
    }

    /// Load membership rows already in memory. Intended for tests and small
    /// programmatic integrations; derives the sets from the rows.
    pub fn load_from_records(
        &mut self,
        followers_rows: Vec<FollowRecord>,
        following_rows: Vec<FollowRecord>,
    ) {
        self.followers = followers_rows.iter().map(|r| r.username.clone()).collect();
        self.following = following_rows.iter().map(|r| r.username.clone()).collect();
        self.followers_rows = followers_rows;
        self.following_rows = following_rows;
    }

    /// Classify every username in the union of both sets.
    pub fn relation_rows(&self) -> Vec<RelationRow> {
        classify(&self.followers, &self.following)
    }
}
