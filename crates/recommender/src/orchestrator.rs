//! # Recommendation Orchestrator
//!
//! This module coordinates the recommendation pipeline:
//! 1. Filter the dataset by language, genre, year and vote count
//! 2. Rank the survivors by score and keep the top N
//! 3. Sample the requested number of movies from that pool
//!
//! The dataset is shared read-only behind an `Arc`, so one recommender can
//! serve any number of calls, from any number of threads, without locking.

use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, instrument};

use data_loader::{Dataset, MovieRecord};
use pipeline::{FilterPipeline, MovieRecommendation, RecommendationSettings, Sampler, TopNSelector};

/// Main entry point for recommendations over a loaded dataset
#[derive(Debug, Clone)]
pub struct MovieRecommender {
    dataset: Arc<Dataset>,
    sampler: Sampler,
}

impl MovieRecommender {
    /// Create a recommender over an already-loaded dataset
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            sampler: Sampler::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Recommend up to `count` movies using the thread-local RNG.
    ///
    /// Returns fewer than `count` (possibly none) when the candidate pool
    /// is smaller; that is not an error.
    pub fn recommend(
        &self,
        settings: &RecommendationSettings,
        count: usize,
    ) -> Vec<MovieRecommendation> {
        self.recommend_with_rng(settings, count, &mut rand::rng())
    }

    /// Same as [`recommend`](Self::recommend) with a caller-supplied generator
    #[instrument(skip(self, settings, rng))]
    pub fn recommend_with_rng<R>(
        &self,
        settings: &RecommendationSettings,
        count: usize,
        rng: &mut R,
    ) -> Vec<MovieRecommendation>
    where
        R: Rng + ?Sized,
    {
        let start_time = Instant::now();

        let pool = self.candidate_pool(settings);
        let recommendations = self.sampler.sample(&pool, count, rng);

        info!(
            "Picked {} of {} requested recommendations from a pool of {} in {:.2?}",
            recommendations.len(),
            count,
            pool.len(),
            start_time.elapsed()
        );
        recommendations
    }

    /// Filter the dataset and keep the top `consider_top_n` by score.
    ///
    /// Exposed so callers can inspect the pool the sample is drawn from.
    pub fn candidate_pool(&self, settings: &RecommendationSettings) -> Vec<&MovieRecord> {
        let filtered = FilterPipeline::from_settings(settings).run(&self.dataset);
        debug!(
            "Filtered {} records down to {}",
            self.dataset.len(),
            filtered.len()
        );

        let selector = TopNSelector::from_settings(settings);
        let pool = selector.select(filtered);
        debug!(
            "Candidate pool holds {} records (limit {})",
            pool.len(),
            selector.limit()
        );
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::split_normalized;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn create_test_dataset() -> Arc<Dataset> {
        let rows = [
            ("tt1", 2001, 9.1),
            ("tt2", 2002, 8.0),
            ("tt3", 2003, 7.5),
            ("tt4", 2004, 9.1),
            ("tt5", 2005, 6.0),
        ];
        let dataset = rows
            .iter()
            .map(|&(id, year, score)| MovieRecord {
                id: id.to_string(),
                title: format!("Movie {}", id),
                year,
                genres: split_normalized("Comedy"),
                languages: split_normalized("English"),
                score,
                vote_count: 10_000,
            })
            .collect();
        Arc::new(dataset)
    }

    #[test]
    fn test_recommend_returns_requested_count() {
        let recommender = MovieRecommender::new(create_test_dataset());
        let settings = RecommendationSettings::default();

        let recs = recommender.recommend(&settings, 2);
        assert_eq!(recs.len(), 2);
        assert_ne!(recs[0].id, recs[1].id);
    }

    #[test]
    fn test_recommend_with_seed_is_reproducible() {
        let recommender = MovieRecommender::new(create_test_dataset());
        let settings = RecommendationSettings::default();

        let a = recommender.recommend_with_rng(&settings, 3, &mut StdRng::seed_from_u64(5));
        let b = recommender.recommend_with_rng(&settings, 3, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_dataset_is_unchanged_by_recommend() {
        let dataset = create_test_dataset();
        let before = (*dataset).clone();
        let recommender = MovieRecommender::new(dataset.clone());

        let settings = RecommendationSettings::builder()
            .with_year_range(2003, 2004)
            .build()
            .unwrap();
        recommender.recommend(&settings, 10);

        assert_eq!(*recommender.dataset(), before);
        assert_eq!(dataset.len(), 5);
    }
}
