//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;
pub mod language;
pub mod minimum_votes;
pub mod year_range;

// Re-export for convenience
pub use genre::GenreFilter;
pub use language::LanguageFilter;
pub use minimum_votes::MinimumVotesFilter;
pub use year_range::YearRangeFilter;
