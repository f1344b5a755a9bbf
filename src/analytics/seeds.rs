use crate::{
    catalog::{
        CatalogClient, CatalogError,
        retry::{DEFAULT_BASE_WAIT, DEFAULT_MAX_RETRIES, execute_with_retry},
    },
    types::{
        CategoricalTarget, FeatureStatistics, NumericBound, RecommendationQuery, Track,
    },
    utils,
};

/// Maximum number of genre seeds accepted by the catalog per query.
pub const MAX_SEED_GENRES: usize = 5;

/// Fixed result cap requested from the catalog.
pub const RECOMMENDATION_LIMIT: u32 = 20;

/// Builds a bounded recommendation query from top genres and statistics.
///
/// Takes at most [`MAX_SEED_GENRES`] genres and, for every numeric dimension
/// present in `statistics`, a bound of minimum = stats.min,
/// maximum = stats.max, target = stats.median. The median is used over the
/// mean because it is less sensitive to outlier tracks in a playlist.
/// Categorical dimensions become target-only constraints from their mode.
pub fn build_query(
    top_genres: &[String],
    statistics: &FeatureStatistics,
) -> RecommendationQuery {
    let seed_genres: Vec<String> = top_genres.iter().take(MAX_SEED_GENRES).cloned().collect();

    let numeric_bounds: Vec<NumericBound> = statistics
        .numeric
        .iter()
        .map(|summary| NumericBound {
            dimension: summary.dimension,
            minimum: summary.minimum,
            maximum: summary.maximum,
            target: summary.median,
        })
        .collect();

    let categorical_targets: Vec<CategoricalTarget> = statistics
        .categorical
        .iter()
        .map(|summary| CategoricalTarget {
            dimension: summary.dimension,
            target: summary.mode,
        })
        .collect();

    RecommendationQuery {
        seed_genres,
        numeric_bounds,
        categorical_targets,
        limit: RECOMMENDATION_LIMIT,
    }
}

impl RecommendationQuery {
    /// Encodes the query as catalog request parameters: comma-joined
    /// `seed_genres`, `limit`, and `min_*`/`max_*`/`target_*` per
    /// constrained dimension.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("seed_genres".to_string(), self.seed_genres.join(",")),
            ("limit".to_string(), self.limit.to_string()),
        ];

        for bound in &self.numeric_bounds {
            let name = bound.dimension.param_name();
            params.push((format!("min_{name}"), utils::fmt_metric(bound.minimum)));
            params.push((format!("max_{name}"), utils::fmt_metric(bound.maximum)));
            params.push((format!("target_{name}"), utils::fmt_metric(bound.target)));
        }

        for target in &self.categorical_targets {
            params.push((
                format!("target_{}", target.dimension.param_name()),
                target.target.to_string(),
            ));
        }

        params
    }
}

/// Submits a recommendation query through the rate-limit executor.
///
/// A query without genre seeds short-circuits to an empty list without any
/// catalog call; genre-less recommendation is not supported by this
/// pipeline. An empty reply from the catalog is likewise an empty list, not
/// an error.
pub async fn submit(
    client: &CatalogClient,
    query: RecommendationQuery,
) -> Result<Vec<Track>, CatalogError> {
    if query.seed_genres.is_empty() {
        return Ok(Vec::new());
    }

    execute_with_retry(
        || client.recommendations(&query),
        DEFAULT_MAX_RETRIES,
        DEFAULT_BASE_WAIT,
    )
    .await
}
