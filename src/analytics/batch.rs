use crate::{
    catalog::{
        CatalogClient, CatalogError,
        retry::{DEFAULT_BASE_WAIT, DEFAULT_MAX_RETRIES, execute_with_retry},
    },
    types::AudioFeatures,
};

/// Maximum number of track ids per audio-feature call, the catalog's
/// documented per-call ceiling.
pub const FEATURE_BATCH_SIZE: usize = 100;

/// Fetches audio features for an ordered list of track ids.
///
/// Partitions `track_ids` into consecutive batches of at most
/// [`FEATURE_BATCH_SIZE`] (exactly `ceil(N / 100)` catalog calls) and
/// issues the batches as concurrent tasks, each retried through the
/// rate-limit executor. Handles are awaited in spawn order, so the merged
/// result always has one entry per input id in input order no matter which
/// batch finishes first. Tracks the catalog has no features for stay `None`
/// in the merged vector; they are markers for the statistics layer, never
/// zeroed vectors.
///
/// # Errors
///
/// A single failed batch (retries exhausted, upstream error, or a reply
/// whose length does not match the request) fails the whole fetch. There is
/// no partial-success mode; callers needing best-effort behavior must
/// degrade above this layer.
pub async fn fetch_audio_features(
    client: &CatalogClient,
    track_ids: &[String],
) -> Result<Vec<Option<AudioFeatures>>, CatalogError> {
    let mut handles = Vec::new();

    for chunk in track_ids.chunks(FEATURE_BATCH_SIZE) {
        let client = client.clone();
        let ids = chunk.to_vec();
        let handle = tokio::spawn(async move {
            let features = execute_with_retry(
                || client.audio_features_batch(&ids),
                DEFAULT_MAX_RETRIES,
                DEFAULT_BASE_WAIT,
            )
            .await?;

            if features.len() != ids.len() {
                return Err(CatalogError::Internal(format!(
                    "catalog returned {} feature entries for a batch of {}",
                    features.len(),
                    ids.len()
                )));
            }

            Ok(features)
        });
        handles.push(handle);
    }

    let mut merged: Vec<Option<AudioFeatures>> = Vec::with_capacity(track_ids.len());
    for handle in handles {
        let batch = handle
            .await
            .map_err(|e| CatalogError::Internal(format!("feature batch task failed: {}", e)))??;
        merged.extend(batch);
    }

    Ok(merged)
}
