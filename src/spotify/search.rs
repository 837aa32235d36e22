use crate::{
    types::{SearchTracksResponse, Track},
    utils,
};

use super::client::SpotifyClient;

/// Random search offsets fall in `[0, MAX_SEARCH_OFFSET)`.
const MAX_SEARCH_OFFSET: u32 = 500;

/// Maximum length of a random search query.
const MAX_QUERY_LENGTH: usize = 5;

impl SpotifyClient {
    /// Searches for a single track at the given result offset.
    pub async fn search_track(
        &self,
        query: &str,
        offset: u32,
    ) -> Result<SearchTracksResponse, reqwest::Error> {
        let api_url = format!(
            "{uri}/search?q={query}&type=track&limit=1&offset={offset}",
            uri = &self.config.api_url,
            query = query,
            offset = offset
        );

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(self.bearer())
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<SearchTracksResponse>().await?;

        Ok(json)
    }
}

/// Samples one track with a random query and a random offset.
///
/// Returns the first hit, or `None` when the search failed or matched
/// nothing. Failures are swallowed on purpose: one bad sample must never
/// abort the other forty-nine.
pub async fn random_song(client: &SpotifyClient) -> Option<Track> {
    let query = utils::random_string(MAX_QUERY_LENGTH);
    let offset = utils::random_offset(MAX_SEARCH_OFFSET);

    match client.search_track(&query, offset).await {
        Ok(response) => response.tracks.items.into_iter().next(),
        Err(_) => None,
    }
}
