mod display;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use data_loader::{CachePolicy, DataPaths, Dataset};
use pipeline::defaults;
use rand::rngs::StdRng;
use rand::SeedableRng;
use recommender::{MovieRecommender, RecommendationSettings};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// What Movie - random picks from the best-rated movies that match your taste
#[derive(Parser, Debug)]
#[command(name = "what-movie")]
#[command(about = "Recommend random movies from the top-rated IMDb titles", long_about = None)]
struct Cli {
    /// Number of movies to recommend (zero or negative prints nothing)
    #[arg(
        short = 'n',
        long,
        default_value_t = defaults::NUM_MOVIES as i64,
        allow_negative_numbers = true
    )]
    num_movies: i64,

    /// Consider movies released in or after this year
    #[arg(
        short = 'f',
        long,
        default_value_t = defaults::OLDEST_YEAR,
        allow_negative_numbers = true
    )]
    year_from: i32,

    /// Consider movies released in or before this year
    #[arg(
        short = 't',
        long,
        default_value_t = defaults::NEWEST_YEAR,
        allow_negative_numbers = true
    )]
    year_to: i32,

    /// Comma-separated languages; pass an empty string to allow any
    #[arg(long, value_delimiter = ',', default_values = defaults::LANGUAGES)]
    languages: Vec<String>,

    /// Comma-separated genres; pass an empty string to allow any
    #[arg(long, value_delimiter = ',', default_values = defaults::GENRES)]
    genres: Vec<String>,

    /// Minimum number of votes a movie needs (inclusive)
    #[arg(long, default_value_t = defaults::MIN_NUM_VOTES, allow_negative_numbers = true)]
    min_votes: i64,

    /// Only sample from this many top-rated matches
    #[arg(long, default_value_t = defaults::CONSIDER_TOP_N, allow_negative_numbers = true)]
    top_n: i64,

    /// Directory holding movies.csv and ratings.csv
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Where to keep the processed snapshot (defaults to the data directory)
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Rebuild the snapshot from the CSV files even if it looks valid
    #[arg(long, conflicts_with = "no_cache")]
    rebuild_cache: bool,

    /// Neither read nor write the snapshot
    #[arg(long)]
    no_cache: bool,

    /// Seed for reproducible picks
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn settings(&self) -> Result<RecommendationSettings> {
        RecommendationSettings::builder()
            .with_languages(&self.languages)
            .with_genres(&self.genres)
            .with_year_range(self.year_from, self.year_to)
            .with_min_votes(self.min_votes)
            .with_consider_top_n(self.top_n)
            .build()
            .context("Invalid recommendation settings")
    }

    fn cache_policy(&self) -> CachePolicy {
        if self.no_cache {
            CachePolicy::Bypass
        } else if self.rebuild_cache {
            CachePolicy::Rebuild
        } else {
            CachePolicy::Use
        }
    }

    fn data_paths(&self) -> DataPaths {
        let paths = DataPaths::new(&self.data_dir);
        match &self.snapshot {
            Some(snapshot) => paths.with_snapshot(snapshot),
            None => paths,
        }
    }

    /// Requested count; negative numbers mean "none"
    fn count(&self) -> usize {
        usize::try_from(self.num_movies).unwrap_or(0)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Reject bad settings before paying for the dataset load
    let settings = cli.settings()?;
    let count = cli.count();

    let paths = cli.data_paths();
    let start = Instant::now();
    let dataset = Dataset::load(&paths, cli.cache_policy()).with_context(|| {
        format!(
            "Failed to load IMDb dataset from {}",
            paths.data_dir.display()
        )
    })?;
    info!("Dataset ready in {:.2?}", start.elapsed());

    let recommender = MovieRecommender::new(Arc::new(dataset));
    let recommendations = match cli.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            recommender.recommend_with_rng(&settings, count, &mut rng)
        }
        None => recommender.recommend(&settings, count),
    };

    match cli.format {
        OutputFormat::Json => {
            let json = display::to_json(&recommendations).context("Failed to encode JSON output")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            display::print_recommendations(&recommendations);
            display::print_shortfall(recommendations.len(), count);
        }
    }

    Ok(())
}
