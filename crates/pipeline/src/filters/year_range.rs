//! Filter on release year.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records released within `[year_from, year_to]`, both inclusive.
pub struct YearRangeFilter {
    year_from: i32,
    year_to: i32,
}

impl YearRangeFilter {
    pub fn new(year_from: i32, year_to: i32) -> Self {
        Self { year_from, year_to }
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn matches(&self, record: &MovieRecord) -> bool {
        (self.year_from..=self.year_to).contains(&record.year)
    }
}
