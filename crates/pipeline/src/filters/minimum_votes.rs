//! Filter to ensure a minimum number of votes.
//!
//! Scores backed by only a handful of votes are noisy, so movies below
//! the threshold are dropped before ranking.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Removes records with fewer than `min_votes` votes.
///
/// The threshold is inclusive: a record with exactly `min_votes` votes
/// is kept.
pub struct MinimumVotesFilter {
    min_votes: u64,
}

impl MinimumVotesFilter {
    /// Create a new MinimumVotesFilter.
    ///
    /// # Arguments
    /// * `min_votes` - Minimum number of votes (typically 1000)
    pub fn new(min_votes: u64) -> Self {
        Self { min_votes }
    }
}

impl Filter for MinimumVotesFilter {
    fn name(&self) -> &str {
        "MinimumVotesFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        record.vote_count >= self.min_votes
    }
}
