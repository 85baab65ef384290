//! Recommender crate for the What Movie engine.
//!
//! This crate contains the orchestrator that runs the filter, ranking and
//! sampling stages over a shared dataset.

pub mod orchestrator;

pub use orchestrator::MovieRecommender;
pub use pipeline::{MovieRecommendation, RecommendationSettings, SettingsError};
