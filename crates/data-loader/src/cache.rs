//! On-disk snapshot of the processed dataset.
//!
//! Parsing and merging the two CSV files is the slow part of startup, so
//! the cleaned rows are written to a bincode snapshot next to the data.
//! Reading it is best effort: a missing, stale, unreadable or corrupt
//! snapshot is reported as a [`SnapshotStatus`] and the caller rebuilds
//! from the source tables. Single writer is assumed.

use crate::error::Result;
use crate::paths::DataPaths;
use crate::types::{Dataset, MovieRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

/// Bump whenever [`MovieRecord`] changes shape
pub const SNAPSHOT_VERSION: u32 = 1;

/// Upper bound on bytes the decoder may claim, so a corrupt length prefix
/// cannot trigger a huge allocation
const SNAPSHOT_BYTE_LIMIT: usize = 512 * 1024 * 1024;

/// How [`Dataset::load`] should treat the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Read the snapshot if it is valid, otherwise rebuild and rewrite it
    #[default]
    Use,
    /// Ignore any existing snapshot, rebuild and rewrite it
    Rebuild,
    /// Never touch the snapshot
    Bypass,
}

/// Outcome of trying to read a snapshot
#[derive(Debug)]
pub enum SnapshotStatus {
    Loaded(Dataset),
    Missing,
    /// The file exists but cannot be used; the reason is for logging
    RebuildNeeded(String),
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    records: &'a [MovieRecord],
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    records: Vec<MovieRecord>,
}

fn snapshot_config() -> impl bincode::config::Config {
    bincode::config::standard().with_limit::<SNAPSHOT_BYTE_LIMIT>()
}

/// Serialize `dataset` to `path`, replacing any previous snapshot.
///
/// The bytes go to a sibling temp file first and are renamed into place,
/// so a reader never sees a half-written snapshot.
pub fn write_snapshot(path: &Path, dataset: &Dataset) -> Result<()> {
    let snapshot = SnapshotRef {
        version: SNAPSHOT_VERSION,
        records: dataset.rows(),
    };
    let bytes = bincode::serde::encode_to_vec(&snapshot, snapshot_config())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, &bytes)?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }

    debug!(
        "Wrote snapshot with {} records ({} bytes) to {}",
        dataset.len(),
        bytes.len(),
        path.display()
    );
    Ok(())
}

/// Decode the snapshot at `path` without checking freshness
pub fn read_snapshot(path: &Path) -> SnapshotStatus {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return SnapshotStatus::Missing,
        Err(err) => {
            return SnapshotStatus::RebuildNeeded(format!(
                "cannot read {}: {}",
                path.display(),
                err
            ));
        }
    };

    match bincode::serde::decode_from_slice::<Snapshot, _>(&bytes, snapshot_config()) {
        Ok((snapshot, _)) if snapshot.version == SNAPSHOT_VERSION => {
            let dataset = Dataset::from_records(snapshot.records);
            match dataset.validate() {
                Ok(()) => SnapshotStatus::Loaded(dataset),
                Err(err) => SnapshotStatus::RebuildNeeded(err.to_string()),
            }
        }
        Ok((snapshot, _)) => SnapshotStatus::RebuildNeeded(format!(
            "snapshot version {} does not match {}",
            snapshot.version, SNAPSHOT_VERSION
        )),
        Err(err) => SnapshotStatus::RebuildNeeded(format!("corrupt snapshot: {}", err)),
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

/// True when either source table was modified after the snapshot.
///
/// Missing timestamps never invalidate: if the CSVs are gone the snapshot
/// is the only copy left.
pub fn is_stale(paths: &DataPaths) -> bool {
    let Some(snapshot_time) = modified(&paths.snapshot) else {
        return false;
    };
    [&paths.movies, &paths.ratings]
        .into_iter()
        .filter_map(|source| modified(source))
        .any(|source_time| source_time > snapshot_time)
}

/// Read the snapshot for `paths`, treating a stale one as unusable
pub fn load_snapshot(paths: &DataPaths) -> SnapshotStatus {
    if is_stale(paths) {
        return SnapshotStatus::RebuildNeeded(
            "source tables changed since the snapshot was written".to_string(),
        );
    }
    read_snapshot(&paths.snapshot)
}
