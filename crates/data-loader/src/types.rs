//! Core domain types for the merged IMDb dataset.
//!
//! A [`MovieRecord`] is one row after the movies and ratings tables have
//! been joined and cleaned. The [`Dataset`] holds those rows in their
//! original file order and is never mutated once built, so it can be
//! shared behind an `Arc` by any number of readers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Type Aliases
// =============================================================================

/// Primary key shared by both source tables (e.g. `tt0111161`)
pub type MovieId = String;

// =============================================================================
// Movie Record
// =============================================================================

/// One row of the merged dataset.
///
/// `title`, `year`, `score` and `languages` are always populated; rows
/// missing any of them are dropped while loading. Genre and language
/// sets hold trimmed, lowercase tokens and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    /// Normalized genres, kept sorted by `BTreeSet`
    pub genres: BTreeSet<String>,
    /// Normalized languages, kept sorted by `BTreeSet`
    pub languages: BTreeSet<String>,
    /// Weighted average vote, typically 0-10
    pub score: f32,
    pub vote_count: u64,
}

impl MovieRecord {
    /// True if any of `wanted` appears in this record's language set.
    ///
    /// `wanted` must already be normalized (see [`normalize_token`]).
    pub fn has_any_language<'a, I>(&self, wanted: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        wanted.into_iter().any(|lang| self.languages.contains(lang))
    }

    /// True if any of `wanted` appears in this record's genre set.
    pub fn has_any_genre<'a, I>(&self, wanted: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        wanted.into_iter().any(|genre| self.genres.contains(genre))
    }
}

/// Lowercase and trim a single genre/language token.
pub fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Split a comma-separated cell into a normalized set.
///
/// Example: `"Drama, Sci-Fi"` -> `{"drama", "sci-fi"}`. Empty tokens are
/// skipped, so an empty cell gives an empty set.
pub fn split_normalized(cell: &str) -> BTreeSet<String> {
    cell.split(',')
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .collect()
}

// =============================================================================
// Dataset
// =============================================================================

/// Ordered, read-only collection of movie records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub(crate) records: Vec<MovieRecord>,
}

impl Dataset {
    /// Creates an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-normalized records, keeping their order
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    /// Read-only view of every row, in load order
    pub fn rows(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by primary key (linear scan)
    pub fn get(&self, id: &str) -> Option<&MovieRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}

impl FromIterator<MovieRecord> for Dataset {
    fn from_iter<T: IntoIterator<Item = MovieRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_normalized() {
        let set = split_normalized(" Drama,Sci-Fi , ,COMEDY");
        let expected: BTreeSet<String> = ["comedy", "drama", "sci-fi"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(set, expected);
        assert!(split_normalized("").is_empty());
    }

    #[test]
    fn test_has_any_language() {
        let record = MovieRecord {
            id: "tt1".to_string(),
            title: "Lagaan".to_string(),
            year: 2001,
            genres: split_normalized("Drama, Sport"),
            languages: split_normalized("Hindi, English"),
            score: 8.1,
            vote_count: 100_000,
        };

        let wanted = vec!["english".to_string()];
        assert!(record.has_any_language(&wanted));

        let wanted = vec!["french".to_string()];
        assert!(!record.has_any_language(&wanted));
        assert!(record.has_any_genre(&vec!["sport".to_string()]));
    }
}
