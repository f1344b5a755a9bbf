use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    analytics,
    catalog::{CatalogClient, CatalogError},
    error, info, success,
    types::{FeatureTableRow, GenreTableRow, RecommendationTableRow},
    utils, warning,
};

pub async fn analyze(playlist_id: String, json: bool) {
    let client = CatalogClient::from_env();

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Analyzing playlist {}...", playlist_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let analysis = match analytics::analyze_playlist(&client, &playlist_id).await {
        Ok(analysis) => {
            pb.finish_and_clear();
            analysis
        }
        Err(e @ CatalogError::RateLimited { .. }) => {
            pb.finish_and_clear();
            error!("{}. Try again later.", e);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to analyze playlist: {}", e);
        }
    };

    if json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => error!("Failed to render analysis: {}", e),
        }
        return;
    }

    success!(
        "Analyzed playlist {} ({} tracks).",
        analysis.playlist_id,
        analysis.track_count
    );

    if analysis.genre_counts.is_empty() {
        warning!("No genres found for this playlist.");
    } else {
        let mut genre_rows: Vec<GenreTableRow> = analysis
            .genre_counts
            .entries
            .iter()
            .map(|entry| GenreTableRow {
                genre: entry.genre.clone(),
                count: entry.count,
            })
            .collect();
        utils::sort_genre_rows(&mut genre_rows);

        println!("\nGenres:\n{}", Table::new(genre_rows));
    }

    if analysis.statistics.numeric.is_empty() {
        warning!("No audio features available for this playlist.");
    } else {
        let feature_rows: Vec<FeatureTableRow> = analysis
            .statistics
            .numeric
            .iter()
            .map(|summary| FeatureTableRow {
                feature: summary.dimension.to_string(),
                average: utils::fmt_metric(summary.average),
                minimum: utils::fmt_metric(summary.minimum),
                maximum: utils::fmt_metric(summary.maximum),
                median: utils::fmt_metric(summary.median),
            })
            .collect();

        println!("\nAudio features:\n{}", Table::new(feature_rows));

        for summary in &analysis.statistics.categorical {
            info!("Most common {}: {}", summary.dimension, summary.mode);
        }
    }

    if analysis.recommendations.is_empty() {
        info!("No recommendations for this playlist.");
    } else {
        let recommendation_rows: Vec<RecommendationTableRow> = analysis
            .recommendations
            .iter()
            .map(|track| RecommendationTableRow {
                name: track.name.clone(),
                artists: utils::artist_summary(&track.artists),
            })
            .collect();

        println!("\nRecommendations:\n{}", Table::new(recommendation_rows));
    }
}
