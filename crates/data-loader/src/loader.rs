//! Dataset building: merge the two source tables and clean the result.
//!
//! The steps are:
//! 1. Parse movies.csv and ratings.csv (in parallel)
//! 2. Inner-join them on the primary key, keeping movies.csv order
//! 3. Drop rows with no title, year, score or language
//! 4. Normalize genre and language cells into lowercase sets
//! 5. Validate the result

use crate::cache::{self, CachePolicy, SnapshotStatus};
use crate::error::{DataLoadError, Result};
use crate::parser::{self, MovieRow, RatingRow};
use crate::paths::DataPaths;
use crate::types::*;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

impl Dataset {
    /// Load the dataset, going through the snapshot according to `policy`.
    ///
    /// A snapshot that is missing, stale or corrupt is rebuilt from the CSV
    /// files; failing to write the new snapshot is only a warning. Errors
    /// from the CSV files themselves are returned.
    #[instrument(skip(paths), fields(data_dir = %paths.data_dir.display()))]
    pub fn load(paths: &DataPaths, policy: CachePolicy) -> Result<Self> {
        if policy == CachePolicy::Use {
            match cache::load_snapshot(paths) {
                SnapshotStatus::Loaded(dataset) => {
                    info!(
                        "Loaded {} records from snapshot {}",
                        dataset.len(),
                        paths.snapshot.display()
                    );
                    return Ok(dataset);
                }
                SnapshotStatus::Missing => {
                    info!("No snapshot at {}, building from CSV", paths.snapshot.display());
                }
                SnapshotStatus::RebuildNeeded(reason) => {
                    warn!("Rebuilding dataset snapshot: {}", reason);
                }
            }
        }

        let dataset = Self::load_from_files(paths)?;

        if policy != CachePolicy::Bypass {
            if let Err(err) = cache::write_snapshot(&paths.snapshot, &dataset) {
                warn!(
                    "Could not write snapshot to {}: {}",
                    paths.snapshot.display(),
                    err
                );
            }
        }

        Ok(dataset)
    }

    /// Build the dataset straight from the two CSV files
    pub fn load_from_files(paths: &DataPaths) -> Result<Self> {
        let start = Instant::now();

        // The two tables are independent, so parse them side by side
        let (movies, ratings) = rayon::join(
            || parser::parse_movies(&paths.movies),
            || parser::parse_ratings(&paths.ratings),
        );
        let movies = movies?;
        let ratings = ratings?;

        info!(
            "Parsed {} movies and {} ratings",
            movies.len(),
            ratings.len()
        );

        let dataset = Self::from_records(merge_tables(movies, ratings));
        dataset.validate()?;

        info!(
            "Built dataset with {} records in {:.2?}",
            dataset.len(),
            start.elapsed()
        );
        Ok(dataset)
    }

    /// Check the invariants every consumer relies on.
    ///
    /// Every record has a unique id, a non-empty title and a finite score.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.records.len());
        for record in &self.records {
            if !seen.insert(record.id.as_str()) {
                return Err(DataLoadError::ValidationError(format!(
                    "duplicate record id {}",
                    record.id
                )));
            }
            if record.title.trim().is_empty() {
                return Err(DataLoadError::ValidationError(format!(
                    "record {} has an empty title",
                    record.id
                )));
            }
            if !record.score.is_finite() {
                return Err(DataLoadError::ValidationError(format!(
                    "record {} has a non-finite score",
                    record.id
                )));
            }
        }
        Ok(())
    }
}

/// Inner-join movies with ratings and normalize every surviving row.
///
/// Output follows `movies` order. If a primary key appears more than once
/// in either table, the first occurrence is used.
pub fn merge_tables(movies: Vec<MovieRow>, ratings: Vec<RatingRow>) -> Vec<MovieRecord> {
    let total = movies.len();
    let mut seen_ids = HashSet::with_capacity(total);
    let movies: Vec<MovieRow> = movies
        .into_iter()
        .filter(|movie| seen_ids.insert(movie.id.clone()))
        .collect();
    if movies.len() < total {
        debug!("Skipped {} repeated movie rows", total - movies.len());
    }

    let mut ratings_by_id: HashMap<String, RatingRow> = HashMap::with_capacity(ratings.len());
    for rating in ratings {
        ratings_by_id.entry(rating.id.clone()).or_insert(rating);
    }

    let records: Vec<MovieRecord> = movies
        .into_par_iter()
        .filter_map(|movie| {
            let rating = ratings_by_id.get(&movie.id)?;
            normalize_row(movie, rating)
        })
        .collect();

    debug!(
        "Kept {} of {} movie rows after merge and cleaning",
        records.len(),
        total
    );
    records
}

/// Turn one joined row into a [`MovieRecord`], or `None` if a required
/// field is missing or unusable
pub fn normalize_row(movie: MovieRow, rating: &RatingRow) -> Option<MovieRecord> {
    let title = movie.title.filter(|t| !t.trim().is_empty())?;
    let year = movie.year?;
    let score = rating.score.filter(|s| s.is_finite())?;
    let vote_count = rating.vote_count?;
    let languages = split_normalized(&movie.language?);
    let genres = movie
        .genre
        .as_deref()
        .map(split_normalized)
        .unwrap_or_default();

    Some(MovieRecord {
        id: movie.id,
        title,
        year,
        genres,
        languages,
        score,
        vote_count,
    })
}
