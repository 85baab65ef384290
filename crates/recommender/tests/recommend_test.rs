//! End-to-end tests for `MovieRecommender`.

use data_loader::{CachePolicy, DataPaths, Dataset, MovieRecord, split_normalized};
use rand::SeedableRng;
use rand::rngs::StdRng;
use recommender::{MovieRecommender, RecommendationSettings};
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn record(id: &str, year: i32, languages: &str, score: f32, vote_count: u64) -> MovieRecord {
    MovieRecord {
        id: id.to_string(),
        title: format!("Movie {}", id),
        year,
        genres: split_normalized("Comedy, Drama"),
        languages: split_normalized(languages),
        score,
        vote_count,
    }
}

fn open_settings() -> RecommendationSettings {
    RecommendationSettings::builder()
        .with_languages(Vec::<String>::new())
        .with_genres(Vec::<String>::new())
        .with_year_range(1900, 2100)
        .with_min_votes(0)
        .build()
        .unwrap()
}

fn ids(records: &[&MovieRecord]) -> HashSet<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn scenario_a_samples_from_top_three() {
    let dataset = Dataset::from_records(vec![
        record("a", 2000, "English", 9.1, 5000),
        record("b", 2000, "English", 8.0, 5000),
        record("c", 2000, "English", 7.5, 5000),
        record("d", 2000, "English", 9.1, 5000),
        record("e", 2000, "English", 6.0, 5000),
    ]);
    let recommender = MovieRecommender::new(Arc::new(dataset));
    let settings = RecommendationSettings::builder()
        .with_languages(Vec::<String>::new())
        .with_genres(Vec::<String>::new())
        .with_consider_top_n(3)
        .build()
        .unwrap();

    let pool = recommender.candidate_pool(&settings);
    let scores: Vec<f32> = pool.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![9.1, 9.1, 8.0]);
    assert_eq!(
        ids(&pool),
        ["a", "d", "b"].iter().map(|s| s.to_string()).collect::<HashSet<String>>()
    );

    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let recs = recommender.recommend_with_rng(&settings, 2, &mut rng);
        assert_eq!(recs.len(), 2);
        assert_ne!(recs[0].id, recs[1].id);
        assert!(recs.iter().all(|r| ["a", "b", "d"].contains(&r.id.as_str())));
    }
}

#[test]
fn scenario_b_language_intersection() {
    let dataset = Dataset::from_records(vec![
        record("both", 2000, "English, Hindi", 8.0, 5000),
        record("french", 2000, "French", 9.0, 5000),
    ]);
    let recommender = MovieRecommender::new(Arc::new(dataset));
    let settings = RecommendationSettings::builder()
        .with_languages(["english"])
        .with_genres(Vec::<String>::new())
        .build()
        .unwrap();

    let pool = recommender.candidate_pool(&settings);
    assert_eq!(ids(&pool), HashSet::from(["both".to_string()]));
}

#[test]
fn scenario_c_inclusive_year_range() {
    let dataset = Dataset::from_records(vec![
        record("y1999", 1999, "English", 8.0, 5000),
        record("y2005", 2005, "English", 8.0, 5000),
        record("y2010", 2010, "English", 8.0, 5000),
    ]);
    let recommender = MovieRecommender::new(Arc::new(dataset));
    let settings = RecommendationSettings::builder()
        .with_languages(Vec::<String>::new())
        .with_genres(Vec::<String>::new())
        .with_year_range(2000, 2010)
        .build()
        .unwrap();

    let pool = recommender.candidate_pool(&settings);
    assert_eq!(
        ids(&pool),
        HashSet::from(["y2005".to_string(), "y2010".to_string()])
    );
}

#[test]
fn scenario_d_inclusive_min_votes() {
    let dataset = Dataset::from_records(vec![
        record("v999", 2000, "English", 8.0, 999),
        record("v1000", 2000, "English", 8.0, 1000),
    ]);
    let recommender = MovieRecommender::new(Arc::new(dataset));
    let settings = RecommendationSettings::builder()
        .with_languages(Vec::<String>::new())
        .with_genres(Vec::<String>::new())
        .with_min_votes(1000)
        .build()
        .unwrap();

    let pool = recommender.candidate_pool(&settings);
    assert_eq!(ids(&pool), HashSet::from(["v1000".to_string()]));
}

#[test]
fn scenario_e_empty_filter_result_is_not_an_error() {
    let dataset = Dataset::from_records(vec![record("x", 2000, "French", 8.0, 5000)]);
    let recommender = MovieRecommender::new(Arc::new(dataset));
    let settings = RecommendationSettings::builder()
        .with_languages(["english"])
        .build()
        .unwrap();

    assert!(recommender.recommend(&settings, 3).is_empty());
}

#[test]
fn zero_count_returns_nothing() {
    let dataset = Dataset::from_records(vec![record("x", 2000, "English", 8.0, 5000)]);
    let recommender = MovieRecommender::new(Arc::new(dataset));

    assert!(recommender.recommend(&open_settings(), 0).is_empty());
}

#[test]
fn asking_for_more_than_the_pool_returns_the_pool() {
    let dataset = Dataset::from_records(vec![
        record("a", 2000, "English", 8.0, 5000),
        record("b", 2001, "English", 7.0, 5000),
    ]);
    let recommender = MovieRecommender::new(Arc::new(dataset));

    let recs = recommender.recommend(&open_settings(), 10);
    let got: HashSet<&str> = recs.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(got, HashSet::from(["a", "b"]));
}

#[test]
fn recommends_from_csv_files() {
    let dir = TempDir::new().unwrap();
    let paths = DataPaths::new(dir.path());
    fs::write(
        &paths.movies,
        "imdb_title_id,title,year,genre,language\n\
         tt0000001,Kept,2005,\"Comedy, Drama\",\"Hindi, English\"\n\
         tt0000002,Wrong Language,2005,Comedy,French\n\
         tt0000003,Bad Year,TV Movie 2005,Comedy,English\n\
         tt0000004,Too Few Votes,2005,Comedy,English\n",
    )
    .unwrap();
    fs::write(
        &paths.ratings,
        "imdb_title_id,weighted_average_vote,total_votes\n\
         tt0000001,7.9,1500\n\
         tt0000002,8.5,1500\n\
         tt0000003,8.5,1500\n\
         tt0000004,9.0,10\n",
    )
    .unwrap();

    let dataset = Dataset::load(&paths, CachePolicy::Use).unwrap();
    assert_eq!(dataset.len(), 3);

    let recommender = MovieRecommender::new(Arc::new(dataset));
    let recs = recommender.recommend(&RecommendationSettings::default(), 3);

    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].title, "Kept");
    assert_eq!(recs[0].rating, 7.9);
    assert_eq!(recs[0].genres, vec!["comedy", "drama"]);
    assert_eq!(recs[0].languages, vec!["english", "hindi"]);
}

#[test]
fn shared_dataset_serves_concurrent_callers() {
    let dataset = Dataset::from_records(
        (0..50)
            .map(|i| record(&format!("tt{}", i), 2000, "English", i as f32 / 10.0, 5000))
            .collect(),
    );
    let recommender = MovieRecommender::new(Arc::new(dataset));
    let settings = Arc::new(open_settings());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let recommender = recommender.clone();
            let settings = settings.clone();
            std::thread::spawn(move || recommender.recommend(&settings, 5).len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 5);
    }
}
