use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistDetail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub danceability: f64,
    pub energy: f64,
    pub valence: f64,
    pub tempo: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub speechiness: f64,
    pub key: i64,
    pub mode: i64,
    pub time_signature: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesBatchResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Option<Vec<Track>>,
}

/// The eight numeric audio-feature dimensions tracked by the analytics
/// pipeline. Each variant knows its wire name and how to read its value out
/// of an [`AudioFeatures`] record, so statistics and query building iterate
/// over `ALL` instead of repeating per-field code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericDimension {
    Danceability,
    Energy,
    Valence,
    Tempo,
    Acousticness,
    Instrumentalness,
    Liveness,
    Speechiness,
}

impl NumericDimension {
    pub const ALL: [NumericDimension; 8] = [
        NumericDimension::Danceability,
        NumericDimension::Energy,
        NumericDimension::Valence,
        NumericDimension::Tempo,
        NumericDimension::Acousticness,
        NumericDimension::Instrumentalness,
        NumericDimension::Liveness,
        NumericDimension::Speechiness,
    ];

    pub fn param_name(&self) -> &'static str {
        match self {
            NumericDimension::Danceability => "danceability",
            NumericDimension::Energy => "energy",
            NumericDimension::Valence => "valence",
            NumericDimension::Tempo => "tempo",
            NumericDimension::Acousticness => "acousticness",
            NumericDimension::Instrumentalness => "instrumentalness",
            NumericDimension::Liveness => "liveness",
            NumericDimension::Speechiness => "speechiness",
        }
    }

    pub fn value_of(&self, features: &AudioFeatures) -> f64 {
        match self {
            NumericDimension::Danceability => features.danceability,
            NumericDimension::Energy => features.energy,
            NumericDimension::Valence => features.valence,
            NumericDimension::Tempo => features.tempo,
            NumericDimension::Acousticness => features.acousticness,
            NumericDimension::Instrumentalness => features.instrumentalness,
            NumericDimension::Liveness => features.liveness,
            NumericDimension::Speechiness => features.speechiness,
        }
    }
}

impl std::fmt::Display for NumericDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.param_name())
    }
}

/// The discrete audio-feature dimensions summarized by their mode: musical
/// key (0-11), mode (minor/major as 0/1) and time signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalDimension {
    Key,
    Mode,
    TimeSignature,
}

impl CategoricalDimension {
    pub const ALL: [CategoricalDimension; 3] = [
        CategoricalDimension::Key,
        CategoricalDimension::Mode,
        CategoricalDimension::TimeSignature,
    ];

    pub fn param_name(&self) -> &'static str {
        match self {
            CategoricalDimension::Key => "key",
            CategoricalDimension::Mode => "mode",
            CategoricalDimension::TimeSignature => "time_signature",
        }
    }

    pub fn value_of(&self, features: &AudioFeatures) -> i64 {
        match self {
            CategoricalDimension::Key => features.key,
            CategoricalDimension::Mode => features.mode,
            CategoricalDimension::TimeSignature => features.time_signature,
        }
    }
}

impl std::fmt::Display for CategoricalDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.param_name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: u64,
}

/// Genre occurrence counts in first-seen insertion order. The order is part
/// of the contract: ranking ties are broken by it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenreDistribution {
    pub entries: Vec<GenreCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericSummary {
    pub dimension: NumericDimension,
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub median: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalSummary {
    pub dimension: CategoricalDimension,
    pub mode: i64,
}

/// Per-dimension statistics for one analytics run. Dimensions with no
/// present values are omitted rather than reported as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureStatistics {
    pub numeric: Vec<NumericSummary>,
    pub categorical: Vec<CategoricalSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericBound {
    pub dimension: NumericDimension,
    pub minimum: f64,
    pub maximum: f64,
    pub target: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalTarget {
    pub dimension: CategoricalDimension,
    pub target: i64,
}

/// A bounded recommendation request: up to five genre seeds plus the
/// constraints derived from [`FeatureStatistics`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationQuery {
    pub seed_genres: Vec<String>,
    pub numeric_bounds: Vec<NumericBound>,
    pub categorical_targets: Vec<CategoricalTarget>,
    pub limit: u32,
}

/// The combined result of one playlist analytics run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistAnalysis {
    pub playlist_id: String,
    pub track_count: usize,
    pub genre_counts: GenreDistribution,
    pub top_genres: Vec<String>,
    pub statistics: FeatureStatistics,
    pub recommendations: Vec<Track>,
    pub generated_at: u64,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    pub genre: String,
    pub count: u64,
}

#[derive(Tabled)]
pub struct FeatureTableRow {
    pub feature: String,
    pub average: String,
    pub minimum: String,
    pub maximum: String,
    pub median: String,
}

#[derive(Tabled)]
pub struct RecommendationTableRow {
    pub name: String,
    pub artists: String,
}
