use crate::{
    catalog::{CatalogClient, CatalogError, decode_response},
    types::{RecommendationQuery, RecommendationsResponse, Track},
};

impl CatalogClient {
    /// Submits a seeded recommendation query to the catalog.
    ///
    /// The query is encoded as `seed_genres` plus `min_*`/`max_*`/`target_*`
    /// parameters per constrained dimension (see
    /// [`RecommendationQuery::to_query_params`]). A reply with a missing or
    /// null track list decodes to an empty vector; the catalog finding
    /// nothing is a valid outcome, not an error.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Track>)` - Recommended tracks, possibly empty
    /// - `Err(CatalogError)` - Rate limit or upstream error
    pub async fn recommendations(
        &self,
        query: &RecommendationQuery,
    ) -> Result<Vec<Track>, CatalogError> {
        let api_url = format!("{uri}/recommendations", uri = self.api_url());

        let response = self
            .http()
            .get(&api_url)
            .query(&query.to_query_params())
            .bearer_auth(self.token())
            .send()
            .await?;

        let recommended: RecommendationsResponse = decode_response(response).await?;
        Ok(recommended.tracks.unwrap_or_default())
    }
}
