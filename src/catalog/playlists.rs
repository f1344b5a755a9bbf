use crate::{
    catalog::{
        CatalogClient, CatalogError, decode_response,
        retry::{DEFAULT_BASE_WAIT, DEFAULT_MAX_RETRIES, execute_with_retry},
    },
    types::{PlaylistItem, PlaylistTracksResponse},
};

/// Page size for playlist track listings (the catalog's documented maximum).
pub const PLAYLIST_PAGE_SIZE: u32 = 100;

impl CatalogClient {
    /// Retrieves one page of a playlist's tracks.
    ///
    /// # Arguments
    ///
    /// * `playlist_id` - Catalog ID of the playlist
    /// * `limit` - Maximum number of items for this page (1-100)
    /// * `offset` - Zero-based index of the first item to return
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(PlaylistTracksResponse)` - Page items plus pagination metadata
    /// - `Err(CatalogError)` - Rate limit, not-found, or upstream error
    ///
    /// # Errors
    ///
    /// An unknown playlist id surfaces as [`CatalogError::NotFound`]; a 429
    /// response surfaces as [`CatalogError::RateLimited`] and is left to the
    /// caller to retry.
    pub async fn playlist_tracks_page(
        &self,
        playlist_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<PlaylistTracksResponse, CatalogError> {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks?limit={limit}&offset={offset}",
            uri = self.api_url(),
            id = playlist_id,
            limit = limit,
            offset = offset
        );

        let response = self
            .http()
            .get(&api_url)
            .bearer_auth(self.token())
            .send()
            .await?;

        decode_response(response).await
    }

    /// Retrieves all tracks of a playlist, following pagination.
    ///
    /// Fetches pages of [`PLAYLIST_PAGE_SIZE`] items until the catalog
    /// reports no further page. Each page request goes through the
    /// rate-limit executor, so a 429 on page three does not restart the
    /// listing from the beginning. Items are returned in playlist order;
    /// entries whose underlying track object is missing are preserved as-is
    /// so callers can apply their own data-quality policy.
    ///
    /// # Example
    ///
    /// ```
    /// let items = client.playlist_tracks("37i9dQZF1DXcBWIGoYBM5M").await?;
    /// println!("{} entries", items.len());
    /// ```
    pub async fn playlist_tracks(
        &self,
        playlist_id: &str,
    ) -> Result<Vec<PlaylistItem>, CatalogError> {
        let mut items: Vec<PlaylistItem> = Vec::new();
        let mut offset: u32 = 0;

        loop {
            let page = execute_with_retry(
                || self.playlist_tracks_page(playlist_id, PLAYLIST_PAGE_SIZE, offset),
                DEFAULT_MAX_RETRIES,
                DEFAULT_BASE_WAIT,
            )
            .await?;

            let fetched = page.items.len() as u32;
            items.extend(page.items);

            if fetched == 0 || page.next.is_none() {
                break;
            }
            offset += fetched;
        }

        Ok(items)
    }
}
