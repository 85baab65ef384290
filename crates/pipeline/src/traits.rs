//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a view of the dataset.

use data_loader::MovieRecord;

/// A predicate over dataset rows.
///
/// Filters work on borrowed rows (`&MovieRecord`), so applying one builds
/// a new, smaller view and never touches the underlying dataset. Each
/// filter is an independent predicate, so the order they run in does not
/// change the result.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single record passes this filter
    fn matches(&self, record: &MovieRecord) -> bool;

    /// Keep the records that pass, preserving their order
    fn apply<'a>(&self, records: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
