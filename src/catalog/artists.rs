use crate::{
    catalog::{CatalogClient, CatalogError, decode_response},
    types::ArtistDetail,
};

impl CatalogClient {
    /// Retrieves the genre tags of a single artist.
    ///
    /// An artist without genre tags yields an empty list, not an error; the
    /// aggregation layer treats that as "contributes nothing".
    ///
    /// # Arguments
    ///
    /// * `artist_id` - Catalog ID of the artist
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<String>)` - The artist's genre tags, possibly empty
    /// - `Err(CatalogError)` - Rate limit, not-found, or upstream error
    pub async fn artist_genres(&self, artist_id: &str) -> Result<Vec<String>, CatalogError> {
        let api_url = format!(
            "{uri}/artists/{id}",
            uri = self.api_url(),
            id = artist_id
        );

        let response = self
            .http()
            .get(&api_url)
            .bearer_auth(self.token())
            .send()
            .await?;

        let artist: ArtistDetail = decode_response(response).await?;
        Ok(artist.genres)
    }
}
