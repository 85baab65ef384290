//! Terminal and JSON rendering of recommendations.

use colored::Colorize;
use recommender::MovieRecommendation;

/// Header text for the `index`-th recommendation (0-based)
pub fn heading(index: usize) -> String {
    format!("Movie #{}", index + 1)
}

/// One "Label: value" line per displayed column
pub fn detail_lines(rec: &MovieRecommendation) -> Vec<String> {
    vec![
        format!("Title: {}", rec.title),
        format!("Rating: {:.1}", rec.rating),
        format!("Year: {}", rec.year),
        format!("Genre(s): {}", rec.genres.join(", ")),
        format!("Language: {}", rec.languages.join(", ")),
    ]
}

/// Print every recommendation with a hyphen-ruled heading
pub fn print_recommendations(recommendations: &[MovieRecommendation]) {
    for (i, rec) in recommendations.iter().enumerate() {
        let heading = heading(i);
        let rule = "-".repeat(heading.len());
        println!("{}", rule);
        println!("{}", heading.bold().blue());
        println!("{}", rule);
        for line in detail_lines(rec) {
            println!("{}", line);
        }
    }
}

/// Print the "nothing / not enough found" notice
pub fn print_shortfall(found: usize, requested: usize) {
    if found == 0 {
        println!("{}", "No movies found matching the given filters.".yellow());
    } else if found < requested {
        println!(
            "{}",
            format!(
                "Only {} of {} requested movies matched the given filters.",
                found, requested
            )
            .yellow()
        );
    }
}

pub fn to_json(recommendations: &[MovieRecommendation]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(recommendations)
}
