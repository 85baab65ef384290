use data_loader::{CachePolicy, DataPaths, Dataset};
use std::time::Instant;

fn main() {
    let paths = DataPaths::new("data");

    println!("Building IMDb dataset from CSV...\n");

    let start = Instant::now();
    let dataset = Dataset::load(&paths, CachePolicy::Rebuild).expect("Failed to load dataset");
    let from_csv = start.elapsed();

    let start = Instant::now();
    let cached = Dataset::load(&paths, CachePolicy::Use).expect("Failed to load snapshot");
    let from_snapshot = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Records: {}", dataset.len());
    println!("From CSV: {:?}", from_csv);
    println!("From snapshot: {:?} ({} records)", from_snapshot, cached.len());
    println!(
        "\nSnapshot speedup: {:.1}x",
        from_csv.as_secs_f64() / from_snapshot.as_secs_f64().max(f64::EPSILON)
    );
}
