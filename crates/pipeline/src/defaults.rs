//! Default knob values for a recommendation request.

pub const OLDEST_YEAR: i32 = 1894;
pub const NEWEST_YEAR: i32 = 2020;
pub const MIN_NUM_VOTES: i64 = 1000;
/// Only the top N movies by score are considered when sampling
pub const CONSIDER_TOP_N: i64 = 100;
pub const NUM_MOVIES: usize = 3;
pub const LANGUAGES: [&str; 2] = ["english", "hindi"];
pub const GENRES: [&str; 4] = ["comedy", "thriller", "horror", "sci-fi"];
