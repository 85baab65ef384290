//! Filter to keep only movies available in one of the requested languages.

use crate::traits::Filter;
use data_loader::{MovieRecord, normalize_token};
use std::collections::BTreeSet;

/// Keeps records whose language set intersects the wanted languages.
///
/// ## Algorithm
/// Requested names are lowercased and trimmed once, up front. A record
/// passes if any of them is in its (already normalized) language set.
/// An empty request lets everything through.
pub struct LanguageFilter {
    languages: BTreeSet<String>,
}

impl LanguageFilter {
    /// Create a new LanguageFilter.
    ///
    /// # Arguments
    /// * `languages` - Wanted languages, any case
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            languages: languages
                .into_iter()
                .map(|lang| normalize_token(lang.as_ref()))
                .filter(|lang| !lang.is_empty())
                .collect(),
        }
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        self.languages.is_empty() || record.has_any_language(&self.languages)
    }
}
