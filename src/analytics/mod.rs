//! # Analytics Module
//!
//! This module implements the playlist analytics pipeline: given a playlist
//! id it produces genre counts, top genres, per-dimension audio-feature
//! statistics, and a list of recommended tracks seeded from those results.
//!
//! ## Pipeline
//!
//! One analytics run moves through four phases:
//!
//! ```text
//! Fetch tracks (paginated catalog listing)
//!          ↓
//! Fetch features ∥ Aggregate genres     (parallel, read-only, independent)
//!          ↓ (join point)
//! Compute statistics                    (pure, no I/O)
//!          ↓
//! Build + submit recommendation query
//! ```
//!
//! ### Phase Components
//!
//! - [`batch`] - Fetches per-track audio features in batches of at most 100
//!   ids, issuing batches concurrently and merging replies back into
//!   playlist order
//! - [`genres`] - Resolves every (track, artist) pair's genre tags and
//!   accumulates a deterministic, insertion-ordered genre distribution
//! - [`stats`] - Computes average, minimum, maximum, and median per numeric
//!   dimension and the mode per categorical dimension, skipping absent
//!   feature vectors everywhere
//! - [`seeds`] - Turns the top genres and statistics into one bounded
//!   recommendation query and submits it
//!
//! ## Failure Policy
//!
//! Component errors bubble unmodified to [`analyze_playlist`], which fails
//! the entire request on any of them, including recommendation submission.
//! There is no partial report. The complementary lenient policy applies to
//! data quality only: playlist entries without a track object and tracks
//! without audio features are excluded from aggregation rather than treated
//! as errors.
//!
//! ## Concurrency
//!
//! Feature batches and per-track genre lookups run as spawned tasks; their
//! results are merged only after all tasks of a phase complete, in spawn
//! order, so output ordering never depends on task completion order. Nothing
//! here shares mutable state across tasks. All entities live for a single
//! run; there is no cross-request cache.

use chrono::Utc;

use crate::{
    catalog::{CatalogClient, CatalogError},
    types::PlaylistAnalysis,
};

pub mod batch;
pub mod genres;
pub mod seeds;
pub mod stats;

/// Runs the full analytics pipeline for one playlist.
///
/// # Arguments
///
/// * `client` - Catalog client used for all remote calls
/// * `playlist_id` - Catalog ID of the playlist to analyze
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(PlaylistAnalysis)` - Genre distribution, top genres, feature
///   statistics, and recommendations for the playlist
/// - `Err(CatalogError)` - The first component error; the request fails as
///   a whole (see the module docs for the failure policy)
///
/// # Example
///
/// ```
/// let client = CatalogClient::from_env();
/// let analysis = analyze_playlist(&client, "37i9dQZF1DXcBWIGoYBM5M").await?;
/// println!("top genres: {:?}", analysis.top_genres);
/// ```
pub async fn analyze_playlist(
    client: &CatalogClient,
    playlist_id: &str,
) -> Result<PlaylistAnalysis, CatalogError> {
    let items = client.playlist_tracks(playlist_id).await?;

    // entries without a track object carry no id to look features up with
    let track_ids: Vec<String> = items
        .iter()
        .filter_map(|item| item.track.as_ref().map(|track| track.id.clone()))
        .collect();

    let (features, genre_counts) = tokio::join!(
        batch::fetch_audio_features(client, &track_ids),
        genres::aggregate_genres(client, &items),
    );
    let features = features?;
    let genre_counts = genre_counts?;

    let statistics = stats::compute_statistics(&features);
    let top_genres = genres::top_genres(&genre_counts, seeds::MAX_SEED_GENRES);

    let query = seeds::build_query(&top_genres, &statistics);
    let recommendations = seeds::submit(client, query).await?;

    Ok(PlaylistAnalysis {
        playlist_id: playlist_id.to_string(),
        track_count: items.len(),
        genre_counts,
        top_genres,
        statistics,
        recommendations,
        generated_at: Utc::now().timestamp() as u64,
    })
}
