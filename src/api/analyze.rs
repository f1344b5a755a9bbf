use axum::{Extension, extract::Path, http::StatusCode, response::Json};

use crate::{
    analytics,
    catalog::{CatalogClient, CatalogError},
    types::PlaylistAnalysis,
};

pub async fn analyze(
    Path(playlist_id): Path<String>,
    Extension(client): Extension<CatalogClient>,
) -> Result<Json<PlaylistAnalysis>, (StatusCode, String)> {
    match analytics::analyze_playlist(&client, &playlist_id).await {
        Ok(analysis) => Ok(Json(analysis)),
        Err(err) => Err((status_for(&err), err.to_string())),
    }
}

fn status_for(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Upstream(_) => StatusCode::BAD_GATEWAY,
        CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
