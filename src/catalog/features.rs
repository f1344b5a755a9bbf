use crate::{
    catalog::{CatalogClient, CatalogError, decode_response},
    types::{AudioFeatures, AudioFeaturesBatchResponse},
};

impl CatalogClient {
    /// Retrieves audio features for up to 100 tracks in a single request.
    ///
    /// The catalog aligns its reply positionally with the requested ids and
    /// reports unavailable features as `null`; both properties are preserved
    /// here, so the returned vector has one (possibly absent) entry per
    /// requested id in request order.
    ///
    /// # Arguments
    ///
    /// * `track_ids` - Track ids to look up (at most 100, the catalog's
    ///   documented per-call ceiling; partitioning into conforming batches
    ///   is the feature fetcher's job)
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Option<AudioFeatures>>)` - One entry per id, `None` where
    ///   the catalog has no features for that track
    /// - `Err(CatalogError)` - Rate limit or upstream error
    ///
    /// # Batch Processing
    ///
    /// Ids are joined with commas into a single query parameter; one API
    /// call covers the whole batch.
    pub async fn audio_features_batch(
        &self,
        track_ids: &[String],
    ) -> Result<Vec<Option<AudioFeatures>>, CatalogError> {
        let ids = track_ids.join(",");
        let api_url = format!(
            "{uri}/audio-features?ids={ids}",
            uri = self.api_url(),
            ids = ids
        );

        let response = self
            .http()
            .get(&api_url)
            .bearer_auth(self.token())
            .send()
            .await?;

        let batch: AudioFeaturesBatchResponse = decode_response(response).await?;
        Ok(batch.audio_features)
    }
}
