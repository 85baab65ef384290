//! Parser for the IMDb source tables.
//!
//! - movies.csv: imdb_title_id, title, year, genre, language (+ ignored columns)
//! - ratings.csv: imdb_title_id, weighted_average_vote, total_votes (+ ignored columns)
//!
//! Columns are matched by header name. Cells that fail to parse as the
//! expected type become `None` here and the row is dropped later, during
//! normalization; only structural CSV problems are reported as errors.

use crate::error::{DataLoadError, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::debug;

pub const PRIMARY_KEY_COL: &str = "imdb_title_id";
pub const TITLE_COL: &str = "title";
pub const YEAR_COL: &str = "year";
pub const GENRE_COL: &str = "genre";
pub const LANGUAGE_COL: &str = "language";
pub const SCORE_COL: &str = "weighted_average_vote";
pub const NUM_VOTES_COL: &str = "total_votes";

const MOVIE_COLS: [&str; 5] = [PRIMARY_KEY_COL, TITLE_COL, YEAR_COL, GENRE_COL, LANGUAGE_COL];
const RATING_COLS: [&str; 3] = [PRIMARY_KEY_COL, SCORE_COL, NUM_VOTES_COL];

/// Raw row of movies.csv, before cleaning
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRow {
    #[serde(rename = "imdb_title_id")]
    pub id: String,
    pub title: Option<String>,
    /// `None` for blanks and for non-numeric years such as "TV Movie 2019"
    #[serde(deserialize_with = "csv::invalid_option")]
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub language: Option<String>,
}

/// Raw row of ratings.csv, before merging
#[derive(Debug, Clone, Deserialize)]
pub struct RatingRow {
    #[serde(rename = "imdb_title_id")]
    pub id: String,
    #[serde(rename = "weighted_average_vote", deserialize_with = "csv::invalid_option")]
    pub score: Option<f32>,
    #[serde(rename = "total_votes", deserialize_with = "csv::invalid_option")]
    pub vote_count: Option<u64>,
}

/// Open a CSV file and check that every required column is present
fn open_table(path: &Path, required: &[&str]) -> Result<csv::Reader<File>> {
    if !path.is_file() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?;
    for column in required {
        if !headers.iter().any(|header| header == *column) {
            return Err(DataLoadError::ParseError {
                file: path.display().to_string(),
                line: 1,
                reason: format!("Missing column '{}'", column),
            });
        }
    }

    Ok(reader)
}

/// Parse the movies table
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRow>> {
    let mut reader = open_table(path, &MOVIE_COLS)?;
    let mut movies = Vec::new();

    for result in reader.deserialize::<MovieRow>() {
        movies.push(result?);
    }

    debug!("Parsed {} rows from {}", movies.len(), path.display());
    Ok(movies)
}

/// Parse the ratings table
pub fn parse_ratings(path: &Path) -> Result<Vec<RatingRow>> {
    let mut reader = open_table(path, &RATING_COLS)?;
    let mut ratings = Vec::new();

    for result in reader.deserialize::<RatingRow>() {
        ratings.push(result?);
    }

    debug!("Parsed {} rows from {}", ratings.len(), path.display());
    Ok(ratings)
}
