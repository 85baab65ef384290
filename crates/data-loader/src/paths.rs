//! Filesystem layout of the dataset directory.

use std::path::{Path, PathBuf};

pub const MOVIES_FILE: &str = "movies.csv";
pub const RATINGS_FILE: &str = "ratings.csv";
pub const SNAPSHOT_FILE: &str = "processed_data.bin";

/// Locations of the two source tables and the processed snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub movies: PathBuf,
    pub ratings: PathBuf,
    pub snapshot: PathBuf,
}

impl DataPaths {
    /// Resolve the standard file names inside `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            movies: data_dir.join(MOVIES_FILE),
            ratings: data_dir.join(RATINGS_FILE),
            snapshot: data_dir.join(SNAPSHOT_FILE),
            data_dir,
        }
    }

    /// Override the snapshot location (e.g. to keep it outside the data dir)
    pub fn with_snapshot(mut self, snapshot: impl Into<PathBuf>) -> Self {
        self.snapshot = snapshot.into();
        self
    }
}
