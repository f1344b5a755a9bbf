use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    },
};

use axum::{
    Extension, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use playlytics::{
    analytics,
    analytics::batch::fetch_audio_features,
    catalog::{CatalogClient, CatalogError, retry::DEFAULT_MAX_RETRIES},
    server,
    types::PlaylistAnalysis,
};

/// In-process stand-in for the music catalog API. Each test spawns its own
/// instance with canned data and reads the per-endpoint hit counters back.
#[derive(Clone, Default)]
struct MockCatalog {
    items: Arc<Vec<Value>>,
    artist_genres: Arc<HashMap<String, Vec<String>>>,
    danceability: Arc<HashMap<String, f64>>,
    absent_features: Arc<Vec<String>>,
    playlist_calls: Arc<AtomicU32>,
    feature_calls: Arc<AtomicU32>,
    artist_calls: Arc<AtomicU32>,
    recommendation_calls: Arc<AtomicU32>,
    recommendation_params: Arc<Mutex<Option<HashMap<String, String>>>>,
    feature_rate_limits: Arc<AtomicU32>,
    fail_recommendations: bool,
}

fn track_item(id: &str, artist_ids: &[&str]) -> Value {
    let artists: Vec<Value> = artist_ids
        .iter()
        .map(|artist_id| json!({"id": artist_id, "name": format!("Artist {artist_id}")}))
        .collect();
    json!({"track": {"id": id, "name": format!("Track {id}"), "artists": artists}})
}

fn feature_json(mock: &MockCatalog, id: &str) -> Value {
    let danceability = mock.danceability.get(id).copied().unwrap_or(0.5);
    json!({
        "danceability": danceability,
        "energy": 0.6,
        "valence": 0.4,
        "tempo": 120.0,
        "acousticness": 0.1,
        "instrumentalness": 0.0,
        "liveness": 0.2,
        "speechiness": 0.05,
        "key": 5,
        "mode": 1,
        "time_signature": 4
    })
}

async fn playlist_tracks_handler(
    Path(playlist_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    Extension(mock): Extension<MockCatalog>,
) -> Response {
    mock.playlist_calls.fetch_add(1, Ordering::SeqCst);

    if playlist_id == "missing" {
        return (StatusCode::NOT_FOUND, "no such playlist").into_response();
    }

    let limit: usize = params
        .get("limit")
        .and_then(|value| value.parse().ok())
        .unwrap_or(100);
    let offset: usize = params
        .get("offset")
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);

    let total = mock.items.len();
    let page: Vec<Value> = mock.items.iter().skip(offset).take(limit).cloned().collect();
    let next: Value = if offset + page.len() < total {
        json!(format!("offset={}", offset + page.len()))
    } else {
        Value::Null
    };

    Json(json!({"items": page, "next": next, "total": total})).into_response()
}

async fn audio_features_handler(
    Query(params): Query<HashMap<String, String>>,
    Extension(mock): Extension<MockCatalog>,
) -> Response {
    mock.feature_calls.fetch_add(1, Ordering::SeqCst);

    let rate_limited = mock
        .feature_rate_limits
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |v| v.checked_sub(1))
        .is_ok();
    if rate_limited {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            [("retry-after", "0")],
            "rate limited",
        )
            .into_response();
    }

    let ids = params.get("ids").cloned().unwrap_or_default();
    let audio_features: Vec<Value> = ids
        .split(',')
        .filter(|id| !id.is_empty())
        .map(|id| {
            if mock.absent_features.iter().any(|absent| absent == id) {
                Value::Null
            } else {
                feature_json(&mock, id)
            }
        })
        .collect();

    Json(json!({"audio_features": audio_features})).into_response()
}

async fn artist_handler(
    Path(artist_id): Path<String>,
    Extension(mock): Extension<MockCatalog>,
) -> Response {
    mock.artist_calls.fetch_add(1, Ordering::SeqCst);

    let genres = mock
        .artist_genres
        .get(&artist_id)
        .cloned()
        .unwrap_or_default();
    Json(json!({"id": artist_id, "name": format!("Artist {artist_id}"), "genres": genres}))
        .into_response()
}

async fn recommendations_handler(
    Query(params): Query<HashMap<String, String>>,
    Extension(mock): Extension<MockCatalog>,
) -> Response {
    mock.recommendation_calls.fetch_add(1, Ordering::SeqCst);
    *mock.recommendation_params.lock().await = Some(params);

    if mock.fail_recommendations {
        return (StatusCode::INTERNAL_SERVER_ERROR, "catalog exploded").into_response();
    }

    Json(json!({
        "tracks": [
            {"id": "r1", "name": "Recommended One", "artists": [{"id": "ra1", "name": "Rec Artist"}]},
            {"id": "r2", "name": "Recommended Two", "artists": [{"id": "ra2", "name": "Other Artist"}]}
        ]
    }))
    .into_response()
}

async fn spawn_catalog(mock: MockCatalog) -> String {
    let app = Router::new()
        .route("/playlists/{id}/tracks", get(playlist_tracks_handler))
        .route("/audio-features", get(audio_features_handler))
        .route("/artists/{id}", get(artist_handler))
        .route("/recommendations", get(recommendations_handler))
        .layer(Extension(mock));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client_for(base_url: String) -> CatalogClient {
    CatalogClient::new(base_url, "test-token".to_string())
}

#[tokio::test]
async fn test_batch_partition_invariant() {
    for n in [0usize, 1, 100, 101, 250] {
        let mock = MockCatalog::default();
        let feature_calls = mock.feature_calls.clone();
        let base_url = spawn_catalog(mock).await;
        let client = client_for(base_url);

        let track_ids: Vec<String> = (0..n).map(|i| format!("t{i}")).collect();
        let features = fetch_audio_features(&client, &track_ids).await.unwrap();

        // ceil(N / 100) catalog calls, merged result of length N
        assert_eq!(
            feature_calls.load(Ordering::SeqCst) as usize,
            n.div_ceil(100),
            "unexpected batch count for N = {n}"
        );
        assert_eq!(features.len(), n);
    }
}

#[tokio::test]
async fn test_batch_merge_preserves_input_order() {
    let n = 250usize;
    let danceability: HashMap<String, f64> =
        (0..n).map(|i| (format!("t{i}"), i as f64 / 1000.0)).collect();

    let mock = MockCatalog {
        danceability: Arc::new(danceability),
        ..Default::default()
    };
    let base_url = spawn_catalog(mock).await;
    let client = client_for(base_url);

    let track_ids: Vec<String> = (0..n).map(|i| format!("t{i}")).collect();
    let features = fetch_audio_features(&client, &track_ids).await.unwrap();

    // Batches may complete in any order; the merge must not care
    for (i, entry) in features.iter().enumerate() {
        let entry = entry.as_ref().expect("feature should be present");
        assert!((entry.danceability - i as f64 / 1000.0).abs() < 1e-9);
    }
}

#[tokio::test]
async fn test_absent_features_stay_absent_markers() {
    let mock = MockCatalog {
        absent_features: Arc::new(vec!["t1".to_string()]),
        ..Default::default()
    };
    let base_url = spawn_catalog(mock).await;
    let client = client_for(base_url);

    let track_ids: Vec<String> = vec!["t0".into(), "t1".into(), "t2".into()];
    let features = fetch_audio_features(&client, &track_ids).await.unwrap();

    assert_eq!(features.len(), 3);
    assert!(features[0].is_some());
    assert!(features[1].is_none());
    assert!(features[2].is_some());
}

#[tokio::test]
async fn test_rate_limited_batches_recover_through_retry() {
    let mock = MockCatalog {
        feature_rate_limits: Arc::new(AtomicU32::new(2)),
        ..Default::default()
    };
    let feature_calls = mock.feature_calls.clone();
    let base_url = spawn_catalog(mock).await;
    let client = client_for(base_url);

    let track_ids: Vec<String> = vec!["t0".into()];
    let features = fetch_audio_features(&client, &track_ids).await.unwrap();

    // two 429 replies plus the successful third attempt
    assert_eq!(feature_calls.load(Ordering::SeqCst), 3);
    assert_eq!(features.len(), 1);
    assert!(features[0].is_some());
}

#[tokio::test]
async fn test_exhausted_rate_limit_budget_is_fatal() {
    let mock = MockCatalog {
        feature_rate_limits: Arc::new(AtomicU32::new(u32::MAX)),
        ..Default::default()
    };
    let feature_calls = mock.feature_calls.clone();
    let base_url = spawn_catalog(mock).await;
    let client = client_for(base_url);

    let track_ids: Vec<String> = vec!["t0".into()];
    let result = fetch_audio_features(&client, &track_ids).await;

    // 1 initial attempt + DEFAULT_MAX_RETRIES, then the error surfaces
    assert_eq!(
        feature_calls.load(Ordering::SeqCst),
        DEFAULT_MAX_RETRIES + 1
    );
    assert!(matches!(result, Err(CatalogError::RateLimited { .. })));
}

#[tokio::test]
async fn test_playlist_listing_follows_pagination() {
    let items: Vec<Value> = (0..150).map(|i| track_item(&format!("t{i}"), &[])).collect();
    let mock = MockCatalog {
        items: Arc::new(items),
        ..Default::default()
    };
    let playlist_calls = mock.playlist_calls.clone();
    let base_url = spawn_catalog(mock).await;
    let client = client_for(base_url);

    let items = client.playlist_tracks("pl1").await.unwrap();

    assert_eq!(items.len(), 150);
    assert_eq!(playlist_calls.load(Ordering::SeqCst), 2);
    // original playlist order survives the page merge
    assert_eq!(items[0].track.as_ref().unwrap().id, "t0");
    assert_eq!(items[149].track.as_ref().unwrap().id, "t149");
}

fn scenario_mock() -> MockCatalog {
    // Three tracks; artist a1 (pop, rock) appears on two of them, artist a2
    // (rock) on the third. Danceability 0.2 / 0.5 / 0.8.
    let items = vec![
        track_item("t1", &["a1"]),
        track_item("t2", &["a1"]),
        track_item("t3", &["a2"]),
    ];
    let artist_genres: HashMap<String, Vec<String>> = HashMap::from([
        ("a1".to_string(), vec!["pop".to_string(), "rock".to_string()]),
        ("a2".to_string(), vec!["rock".to_string()]),
    ]);
    let danceability: HashMap<String, f64> = HashMap::from([
        ("t1".to_string(), 0.2),
        ("t2".to_string(), 0.5),
        ("t3".to_string(), 0.8),
    ]);

    MockCatalog {
        items: Arc::new(items),
        artist_genres: Arc::new(artist_genres),
        danceability: Arc::new(danceability),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_end_to_end_analysis() {
    let mock = scenario_mock();
    let artist_calls = mock.artist_calls.clone();
    let recommendation_params = mock.recommendation_params.clone();
    let base_url = spawn_catalog(mock).await;
    let client = client_for(base_url);

    let analysis = analytics::analyze_playlist(&client, "pl1").await.unwrap();

    assert_eq!(analysis.playlist_id, "pl1");
    assert_eq!(analysis.track_count, 3);

    // counting rule: +1 per (track, artist, genre) occurrence
    assert_eq!(analysis.genre_counts.count_of("rock"), 3);
    assert_eq!(analysis.genre_counts.count_of("pop"), 2);
    assert_eq!(analysis.top_genres, vec!["rock", "pop"]);

    // one lookup per (track, artist) pair, no dedup across tracks
    assert_eq!(artist_calls.load(Ordering::SeqCst), 3);

    let danceability = analysis
        .statistics
        .numeric
        .iter()
        .find(|summary| summary.dimension.to_string() == "danceability")
        .expect("danceability summary missing");
    assert!((danceability.median - 0.5).abs() < 1e-9);
    assert!((danceability.minimum - 0.2).abs() < 1e-9);
    assert!((danceability.maximum - 0.8).abs() < 1e-9);

    // the submitted query carries the derived constraints
    let params = recommendation_params
        .lock()
        .await
        .clone()
        .expect("recommendations were never requested");
    assert_eq!(params.get("seed_genres").unwrap(), "rock,pop");
    assert_eq!(params.get("limit").unwrap(), "20");
    assert_eq!(params.get("min_danceability").unwrap(), "0.2");
    assert_eq!(params.get("max_danceability").unwrap(), "0.8");
    assert_eq!(params.get("target_danceability").unwrap(), "0.5");

    assert_eq!(analysis.recommendations.len(), 2);
    assert_eq!(analysis.recommendations[0].name, "Recommended One");
}

#[tokio::test]
async fn test_empty_playlist_yields_empty_report_without_seed_query() {
    let mock = MockCatalog::default();
    let recommendation_calls = mock.recommendation_calls.clone();
    let feature_calls = mock.feature_calls.clone();
    let base_url = spawn_catalog(mock).await;
    let client = client_for(base_url);

    let analysis = analytics::analyze_playlist(&client, "pl1").await.unwrap();

    assert_eq!(analysis.track_count, 0);
    assert!(analysis.genre_counts.is_empty());
    assert!(analysis.statistics.numeric.is_empty());
    assert!(analysis.top_genres.is_empty());
    assert!(analysis.recommendations.is_empty());
    // no tracks: no feature batches, and the seedless query never leaves
    assert_eq!(feature_calls.load(Ordering::SeqCst), 0);
    assert_eq!(recommendation_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_entries_without_track_object_are_skipped() {
    let items = vec![
        track_item("t1", &["a1"]),
        json!({"track": null}),
        track_item("t2", &["a1"]),
    ];
    let mock = MockCatalog {
        items: Arc::new(items),
        artist_genres: Arc::new(HashMap::from([(
            "a1".to_string(),
            vec!["rock".to_string()],
        )])),
        ..Default::default()
    };
    let artist_calls = mock.artist_calls.clone();
    let base_url = spawn_catalog(mock).await;
    let client = client_for(base_url);

    let analysis = analytics::analyze_playlist(&client, "pl1").await.unwrap();

    // the null entry is not an error, it just contributes nothing
    assert_eq!(analysis.track_count, 3);
    assert_eq!(analysis.genre_counts.count_of("rock"), 2);
    assert_eq!(artist_calls.load(Ordering::SeqCst), 2);
    assert_eq!(analysis.statistics.numeric.len(), 8);
}

#[tokio::test]
async fn test_recommendation_failure_fails_the_whole_request() {
    let mock = MockCatalog {
        fail_recommendations: true,
        ..scenario_mock()
    };
    let base_url = spawn_catalog(mock).await;
    let client = client_for(base_url);

    let result = analytics::analyze_playlist(&client, "pl1").await;

    // no partial report: genre/statistics data is not returned either
    assert!(matches!(result, Err(CatalogError::Upstream(_))));
}

#[tokio::test]
async fn test_unknown_playlist_is_not_found() {
    let mock = MockCatalog::default();
    let base_url = spawn_catalog(mock).await;
    let client = client_for(base_url);

    let result = analytics::analyze_playlist(&client, "missing").await;

    assert!(matches!(result, Err(CatalogError::NotFound(_))));
}

#[tokio::test]
async fn test_analyze_endpoint_serves_analysis_json() {
    let mock = scenario_mock();
    let base_url = spawn_catalog(mock).await;

    let app = server::router(client_for(base_url));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let response = reqwest::get(format!("http://{addr}/analyze/pl1"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let analysis: PlaylistAnalysis = response.json().await.unwrap();
    assert_eq!(analysis.top_genres, vec!["rock", "pop"]);
    assert_eq!(analysis.recommendations.len(), 2);

    let health = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(health.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn test_analyze_endpoint_maps_not_found() {
    let mock = MockCatalog::default();
    let base_url = spawn_catalog(mock).await;

    let app = server::router(client_for(base_url));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let response = reqwest::get(format!("http://{addr}/analyze/missing"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}
