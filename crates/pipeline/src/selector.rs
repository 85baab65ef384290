//! Top-N selection: rank a filtered view by score and cut it down to the
//! candidate pool.

use crate::settings::RecommendationSettings;
use data_loader::MovieRecord;

/// Keeps the `n` highest-scoring records, best first.
///
/// Ties are broken by input order: the sort is stable, so among equal
/// scores the record that came first in the filtered view (and therefore
/// in the dataset) ranks higher.
#[derive(Debug, Clone, Copy)]
pub struct TopNSelector {
    n: usize,
}

impl TopNSelector {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn from_settings(settings: &RecommendationSettings) -> Self {
        Self::new(settings.consider_top_n())
    }

    /// Pool size this selector truncates to
    pub fn limit(&self) -> usize {
        self.n
    }

    /// Rank `records` by descending score and keep at most `n` of them
    pub fn select<'a>(&self, mut records: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        records.sort_by(|a, b| b.score.total_cmp(&a.score));
        records.truncate(self.n);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn create_test_records(scores: &[f32]) -> Vec<MovieRecord> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| MovieRecord {
                id: format!("tt{}", i),
                title: format!("Movie {}", i),
                year: 2000,
                genres: BTreeSet::new(),
                languages: BTreeSet::new(),
                score,
                vote_count: 5000,
            })
            .collect()
    }

    #[test]
    fn test_select_top_three_with_tie() {
        let records = create_test_records(&[9.1, 8.0, 7.5, 9.1, 6.0]);

        let pool = TopNSelector::new(3).select(records.iter().collect());

        let ids: Vec<&str> = pool.iter().map(|r| r.id.as_str()).collect();
        // Equal 9.1 scores keep dataset order
        assert_eq!(ids, vec!["tt0", "tt3", "tt1"]);
    }

    #[test]
    fn test_pool_smaller_than_n() {
        let records = create_test_records(&[5.0, 6.0]);
        let pool = TopNSelector::new(100).select(records.iter().collect());

        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].score, 6.0);
    }

    #[test]
    fn test_selected_scores_dominate_the_rest() {
        let scores = [3.2, 8.8, 5.5, 8.8, 7.1, 1.0, 9.9, 5.5, 6.4];
        let records = create_test_records(&scores);

        for n in 1..=scores.len() + 1 {
            let pool = TopNSelector::new(n).select(records.iter().collect());
            assert_eq!(pool.len(), n.min(scores.len()));

            let selected: Vec<&str> = pool.iter().map(|r| r.id.as_str()).collect();
            let lowest_selected = pool.iter().map(|r| r.score).fold(f32::INFINITY, f32::min);
            for record in records.iter().filter(|r| !selected.contains(&r.id.as_str())) {
                assert!(lowest_selected >= record.score);
            }
            assert!(pool.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_limit_follows_settings() {
        let settings = RecommendationSettings::builder()
            .with_consider_top_n(25)
            .build()
            .unwrap();
        assert_eq!(TopNSelector::from_settings(&settings).limit(), 25);
    }

    #[test]
    fn test_empty_input() {
        assert!(TopNSelector::new(10).select(Vec::new()).is_empty());
    }
}
