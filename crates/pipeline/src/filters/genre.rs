//! Filter to keep only movies matching the requested genres.

use crate::traits::Filter;
use data_loader::{MovieRecord, normalize_token};
use std::collections::BTreeSet;

/// Keeps records that share at least one genre with the request.
///
/// ## Algorithm
/// 1. Normalize the requested genres once
/// 2. For each record, check for any overlap with its genre set
/// 3. Keep records with overlap (an empty request keeps everything)
pub struct GenreFilter {
    genres: BTreeSet<String>,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `genres` - Wanted genres, any case (e.g. "Sci-Fi", "comedy")
    pub fn new<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            genres: genres
                .into_iter()
                .map(|genre| normalize_token(genre.as_ref()))
                .filter(|genre| !genre.is_empty())
                .collect(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        self.genres.is_empty() || record.has_any_genre(&self.genres)
    }
}
