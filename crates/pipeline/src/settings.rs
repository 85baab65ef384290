//! Validated, immutable settings for one recommendation request.

use crate::defaults;
use crate::error::{Result, SettingsError};
use data_loader::normalize_token;
use std::collections::BTreeSet;

/// Filter and sampling parameters.
///
/// Only obtainable through [`RecommendationSettingsBuilder::build`] (or
/// [`Default`]), so every instance satisfies `year_from <= year_to` and
/// `consider_top_n > 0`. Languages and genres are stored normalized;
/// an empty set means "no constraint".
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSettings {
    languages: BTreeSet<String>,
    genres: BTreeSet<String>,
    min_votes: u64,
    year_from: i32,
    year_to: i32,
    consider_top_n: usize,
}

impl RecommendationSettings {
    pub fn builder() -> RecommendationSettingsBuilder {
        RecommendationSettingsBuilder::default()
    }

    pub fn languages(&self) -> &BTreeSet<String> {
        &self.languages
    }

    pub fn genres(&self) -> &BTreeSet<String> {
        &self.genres
    }

    pub fn min_votes(&self) -> u64 {
        self.min_votes
    }

    pub fn year_from(&self) -> i32 {
        self.year_from
    }

    pub fn year_to(&self) -> i32 {
        self.year_to
    }

    pub fn consider_top_n(&self) -> usize {
        self.consider_top_n
    }
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            languages: normalize_all(defaults::LANGUAGES),
            genres: normalize_all(defaults::GENRES),
            min_votes: defaults::MIN_NUM_VOTES as u64,
            year_from: defaults::OLDEST_YEAR,
            year_to: defaults::NEWEST_YEAR,
            consider_top_n: defaults::CONSIDER_TOP_N as usize,
        }
    }
}

fn normalize_all<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| normalize_token(item.as_ref()))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Builder for [`RecommendationSettings`].
///
/// Starts from the defaults. Numeric knobs are taken as signed integers,
/// the way they arrive from user input, and checked in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct RecommendationSettingsBuilder {
    languages: Vec<String>,
    genres: Vec<String>,
    min_votes: i64,
    year_from: i32,
    year_to: i32,
    consider_top_n: i64,
}

impl Default for RecommendationSettingsBuilder {
    fn default() -> Self {
        Self {
            languages: defaults::LANGUAGES.iter().map(|s| s.to_string()).collect(),
            genres: defaults::GENRES.iter().map(|s| s.to_string()).collect(),
            min_votes: defaults::MIN_NUM_VOTES,
            year_from: defaults::OLDEST_YEAR,
            year_to: defaults::NEWEST_YEAR,
            consider_top_n: defaults::CONSIDER_TOP_N,
        }
    }
}

impl RecommendationSettingsBuilder {
    /// Desired languages; an empty list disables the language filter
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.languages = languages.into_iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Desired genres; an empty list disables the genre filter
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.genres = genres.into_iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Minimum vote count, inclusive
    pub fn with_min_votes(mut self, min_votes: i64) -> Self {
        self.min_votes = min_votes;
        self
    }

    /// Release year range, both ends inclusive
    pub fn with_year_range(mut self, year_from: i32, year_to: i32) -> Self {
        self.year_from = year_from;
        self.year_to = year_to;
        self
    }

    /// Size of the top-by-score pool that recommendations are drawn from
    pub fn with_consider_top_n(mut self, consider_top_n: i64) -> Self {
        self.consider_top_n = consider_top_n;
        self
    }

    pub fn build(self) -> Result<RecommendationSettings> {
        if self.year_from > self.year_to {
            return Err(SettingsError::InvalidYearRange {
                from: self.year_from,
                to: self.year_to,
            });
        }
        let consider_top_n = usize::try_from(self.consider_top_n)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(SettingsError::NonPositiveCandidatePool(self.consider_top_n))?;
        let min_votes = u64::try_from(self.min_votes)
            .map_err(|_| SettingsError::NegativeMinVotes(self.min_votes))?;

        Ok(RecommendationSettings {
            languages: normalize_all(&self.languages),
            genres: normalize_all(&self.genres),
            min_votes,
            year_from: self.year_from,
            year_to: self.year_to,
            consider_top_n,
        })
    }
}
