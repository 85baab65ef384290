//! Random sampling from the candidate pool.

use crate::recommendation::MovieRecommendation;
use data_loader::MovieRecord;
use rand::Rng;
use rand::seq::index;
use tracing::debug;

/// Draws recommendations uniformly at random, without replacement.
///
/// Asking for more than the pool holds is not an error; the whole pool
/// comes back in random order. The generator is supplied by the caller so
/// tests (and `--seed`) can make picks reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sampler;

impl Sampler {
    pub fn new() -> Self {
        Self
    }

    /// Pick `min(count, pool.len())` distinct rows of `pool`
    pub fn sample<R>(
        &self,
        pool: &[&MovieRecord],
        count: usize,
        rng: &mut R,
    ) -> Vec<MovieRecommendation>
    where
        R: Rng + ?Sized,
    {
        let amount = count.min(pool.len());
        if amount == 0 {
            return Vec::new();
        }

        debug!("Sampling {} of {} candidates", amount, pool.len());
        index::sample(rng, pool.len(), amount)
            .into_iter()
            .map(|i| MovieRecommendation::from(pool[i]))
            .collect()
    }
}
