//! Filtering, ranking and sampling of movie records.
//!
//! This crate provides:
//! - RecommendationSettings, validated at construction
//! - Filter trait and implementations for dataset filtering
//! - FilterPipeline for composing filters
//! - TopNSelector for building the candidate pool
//! - Sampler for drawing recommendations from the pool
//!
//! ## Architecture
//! A request moves through three stages:
//! 1. Filters narrow the dataset to a view (language, genre, year, votes)
//! 2. TopNSelector ranks the view by score and keeps the best N
//! 3. Sampler draws a random, duplicate-free subset of that pool
//!
//! Every stage borrows the dataset; nothing here mutates it.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, RecommendationSettings, Sampler, TopNSelector};
//!
//! let settings = RecommendationSettings::builder()
//!     .with_languages(["english"])
//!     .with_year_range(2000, 2010)
//!     .build()?;
//!
//! let filtered = FilterPipeline::from_settings(&settings).run(&dataset);
//! let pool = TopNSelector::from_settings(&settings).select(filtered);
//! let picks = Sampler::new().sample(&pool, 3, &mut rand::rng());
//! ```

pub mod defaults;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod recommendation;
pub mod sampler;
pub mod selector;
pub mod settings;
pub mod traits;

// Re-export main types
pub use error::{Result, SettingsError};
pub use filter_pipeline::FilterPipeline;
pub use recommendation::MovieRecommendation;
pub use sampler::Sampler;
pub use selector::TopNSelector;
pub use settings::{RecommendationSettings, RecommendationSettingsBuilder};
pub use traits::Filter;
