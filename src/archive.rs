//! Archive loading: extracts the export ZIP into a scratch directory and
//! reads the followers/following membership documents out of it.
//!
//! The scratch directory is owned by the load call and removed on every
//! exit path when its `TempDir` handle drops.

use std::collections::HashSet;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::entry::{parse_followers_doc, parse_following_doc};
use crate::follow::FollowRecord;

/// Directory inside the export that holds the membership documents.
pub const CONNECTIONS_SUBDIR: &str = "connections/followers_and_following";

/// Name of the single following-side document.
pub const FOLLOWING_FILE: &str = "following.json";

/// Raised when the expected export structure is missing. Everything else
/// (I/O, ZIP, JSON) propagates as an unclassified error.
#[derive(Debug, thiserror::Error)]
pub enum NotFoundError {
    #[error("could not find connections/followers_and_following in the archive")]
    ConnectionsDir,
    #[error("following.json not found in the archive at connections/followers_and_following")]
    FollowingFile,
}

/// Membership lists pulled from one export archive. The sets deduplicate
/// usernames; the row sequences keep every valid source record in
/// file-then-in-file order.
#[derive(Debug, Default)]
pub struct ArchiveData {
    pub followers: HashSet<String>,
    pub followers_rows: Vec<FollowRecord>,
    pub following: HashSet<String>,
    pub following_rows: Vec<FollowRecord>,
}

/// Extract `zip_path` into a scratch directory and load both membership
/// lists from it.
pub fn load_from_zip<P: AsRef<Path>>(zip_path: P) -> Result<ArchiveData> {
    let zip_path = zip_path.as_ref();
    let scratch = tempfile::tempdir().context("create scratch extraction directory")?;
    let file = File::open(zip_path).with_context(|| format!("open {}", zip_path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_context(|| format!("read archive {}", zip_path.display()))?;
    archive
        .extract(scratch.path())
        .with_context(|| format!("extract {}", zip_path.display()))?;
    load_from_dir(scratch.path())
}

/// Load both membership lists from an already-extracted export tree.
pub fn load_from_dir(root: &Path) -> Result<ArchiveData> {
    let base = root.join(CONNECTIONS_SUBDIR);
    if !base.is_dir() {
        return Err(NotFoundError::ConnectionsDir.into());
    }
    let following_file = base.join(FOLLOWING_FILE);
    if !following_file.is_file() {
        return Err(NotFoundError::FollowingFile.into());
    }

    let shards = followers_shards(&base)?;
    let mut data = ArchiveData::default();
    for shard in &shards {
        let contents =
            fs::read_to_string(shard).with_context(|| format!("read {}", shard.display()))?;
        let records =
            parse_followers_doc(&contents).with_context(|| format!("parse {}", shard.display()))?;
        for r in records {
            data.followers.insert(r.username.clone());
            data.followers_rows.push(r);
        }
    }

    let contents = fs::read_to_string(&following_file)
        .with_context(|| format!("read {}", following_file.display()))?;
    let records = parse_following_doc(&contents)
        .with_context(|| format!("parse {}", following_file.display()))?;
    for r in records {
        data.following.insert(r.username.clone());
        data.following_rows.push(r);
    }

    log::info!(
        "loaded {} followers from {} shard(s), {} following",
        data.followers.len(),
        shards.len(),
        data.following.len()
    );
    Ok(data)
}

/// `followers_*.json` shard paths under `base`, ascending by filename so
/// the row sequence is stable across runs.
fn followers_shards(base: &Path) -> Result<Vec<PathBuf>> {
    let mut shards = Vec::new();
    for dirent in fs::read_dir(base).with_context(|| format!("list {}", base.display()))? {
        let path = dirent
            .with_context(|| format!("list {}", base.display()))?
            .path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with("followers_") && name.ends_with(".json") && path.is_file() {
            shards.push(path);
        }
    }
    shards.sort();
    Ok(shards)
}
