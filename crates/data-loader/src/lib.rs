//! # Data Loader Crate
//!
//! This crate loads the IMDb movies and ratings tables and turns them into
//! a single cleaned [`Dataset`].
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, Dataset)
//! - **parser**: Parse the CSV tables into raw rows
//! - **loader**: Merge, clean and validate the rows
//! - **cache**: Read and write the processed snapshot
//! - **paths**: Where the files live inside the data directory
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{CachePolicy, DataPaths, Dataset};
//!
//! let paths = DataPaths::new("data");
//! let dataset = Dataset::load(&paths, CachePolicy::Use)?;
//!
//! for record in dataset.rows().iter().take(5) {
//!     println!("{} ({}) {:.1}", record.title, record.year, record.score);
//! }
//! ```

// Public modules
pub mod cache;
pub mod error;
pub mod loader;
pub mod parser;
pub mod paths;
pub mod types;

// Re-export commonly used types for convenience
pub use cache::{CachePolicy, SnapshotStatus};
pub use error::{DataLoadError, Result};
pub use paths::DataPaths;
pub use types::{Dataset, MovieId, MovieRecord, normalize_token, split_normalized};
