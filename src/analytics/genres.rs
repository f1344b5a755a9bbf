use crate::{
    catalog::{
        CatalogClient, CatalogError,
        retry::{DEFAULT_BASE_WAIT, DEFAULT_MAX_RETRIES, execute_with_retry},
    },
    types::{GenreCount, GenreDistribution, PlaylistItem},
};

impl GenreDistribution {
    /// Adds one occurrence of `genre`, appending a new entry the first time
    /// a genre is seen so insertion order is preserved.
    pub fn increment(&mut self, genre: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.genre == genre) {
            entry.count += 1;
        } else {
            self.entries.push(GenreCount {
                genre: genre.to_string(),
                count: 1,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, genre: &str) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.genre == genre)
            .map_or(0, |entry| entry.count)
    }
}

/// Aggregates a genre distribution across a playlist's tracks.
///
/// For every playlist entry holding a track, one task resolves the genre
/// tags of each of the track's artists and reports one occurrence per
/// (track, artist, genre) combination: an artist tagged "rock" and "pop"
/// appearing on two tracks adds 2 to both genres, and the same genre from
/// two different artists on one track counts twice. Lookups are issued per
/// occurrence; an artist appearing on three tracks is looked up three
/// times. Task results are merged in spawn order, which makes the
/// first-seen ordering of the distribution deterministic.
///
/// Entries with a missing track object and artists with no genre tags
/// contribute nothing. Any catalog error fails the aggregation; there is no
/// silent empty-result fallback at this layer.
pub async fn aggregate_genres(
    client: &CatalogClient,
    items: &[PlaylistItem],
) -> Result<GenreDistribution, CatalogError> {
    let mut handles = Vec::new();

    for item in items {
        let Some(track) = &item.track else {
            continue;
        };

        let client = client.clone();
        let artists = track.artists.clone();
        let handle = tokio::spawn(async move {
            let mut occurrences: Vec<String> = Vec::new();
            for artist in &artists {
                let genres = execute_with_retry(
                    || client.artist_genres(&artist.id),
                    DEFAULT_MAX_RETRIES,
                    DEFAULT_BASE_WAIT,
                )
                .await?;
                occurrences.extend(genres);
            }
            Ok::<Vec<String>, CatalogError>(occurrences)
        });
        handles.push(handle);
    }

    // merge partial results in spawn order; completion order must not leak
    // into the first-seen ranking
    let mut distribution = GenreDistribution::default();
    for handle in handles {
        let occurrences = handle
            .await
            .map_err(|e| CatalogError::Internal(format!("genre lookup task failed: {}", e)))??;
        for genre in occurrences {
            distribution.increment(&genre);
        }
    }

    Ok(distribution)
}

/// Returns the `n` most frequent genres, most frequent first.
///
/// Ties are broken by first-seen insertion order of the distribution, not
/// alphabetically; the stable sort guarantees it. The result is shorter
/// than `n` when the distribution has fewer distinct genres.
pub fn top_genres(distribution: &GenreDistribution, n: usize) -> Vec<String> {
    let mut ranked = distribution.entries.clone();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
        .into_iter()
        .take(n)
        .map(|entry| entry.genre)
        .collect()
}
