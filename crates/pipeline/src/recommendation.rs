//! The record handed back to callers.

use data_loader::{MovieId, MovieRecord, normalize_token};
use serde::Serialize;

/// A single recommended movie.
///
/// Genres and languages are lowercase and sorted ascending so the same
/// movie always prints the same way. `rating` is the raw score; rounding
/// for display is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecommendation {
    pub id: MovieId,
    pub title: String,
    pub rating: f32,
    pub year: i32,
    pub genres: Vec<String>,
    pub languages: Vec<String>,
}

fn sorted_normalized<'a>(items: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = items.into_iter().map(|item| normalize_token(item)).collect();
    out.sort();
    out.dedup();
    out
}

impl From<&MovieRecord> for MovieRecommendation {
    fn from(record: &MovieRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            rating: record.score,
            year: record.year,
            genres: sorted_normalized(&record.genres),
            languages: sorted_normalized(&record.languages),
        }
    }
}
