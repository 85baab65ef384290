//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{GenreFilter, LanguageFilter, MinimumVotesFilter, YearRangeFilter};
use crate::settings::RecommendationSettings;
use crate::traits::Filter;
use data_loader::{Dataset, MovieRecord};
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(YearRangeFilter::new(2000, 2010))
///     .add_filter(MinimumVotesFilter::new(1000))
///     .add_filter(LanguageFilter::new(["english"]));
///
/// let filtered = pipeline.run(&dataset);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the standard chain for a request.
    ///
    /// Year range and vote threshold always apply. The language and genre
    /// filters are only added when the settings ask for specific values.
    pub fn from_settings(settings: &RecommendationSettings) -> Self {
        let mut pipeline = Self::new()
            .add_filter(YearRangeFilter::new(settings.year_from(), settings.year_to()))
            .add_filter(MinimumVotesFilter::new(settings.min_votes()));

        if !settings.languages().is_empty() {
            pipeline = pipeline.add_filter(LanguageFilter::new(settings.languages()));
        }
        if !settings.genres().is_empty() {
            pipeline = pipeline.add_filter(GenreFilter::new(settings.genres()));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the records.
    ///
    /// Each stage logs its input and output counts. The result keeps the
    /// relative order of `records`.
    pub fn apply<'a>(&self, records: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        let mut current = records;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Filter a whole dataset into a new view; the dataset is left untouched
    pub fn run<'a>(&self, dataset: &'a Dataset) -> Vec<&'a MovieRecord> {
        self.apply(dataset.rows().iter().collect())
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
