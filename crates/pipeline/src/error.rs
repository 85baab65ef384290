//! Error types for the pipeline crate.
//!
//! The pipeline itself cannot fail: an empty filter result or a short
//! sample is a normal outcome. The only errors are configuration mistakes,
//! and those are caught when [`crate::RecommendationSettings`] is built.

use thiserror::Error;

/// Reasons a [`crate::RecommendationSettings`] cannot be built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid year range: year_from ({from}) is after year_to ({to})")]
    InvalidYearRange { from: i32, to: i32 },

    #[error("consider_top_n must be greater than zero, got {0}")]
    NonPositiveCandidatePool(i64),

    #[error("min_votes must not be negative, got {0}")]
    NegativeMinVotes(i64),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SettingsError>;
