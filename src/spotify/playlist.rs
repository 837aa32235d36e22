use crate::types::{
    AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
    CreatePlaylistResponse,
};

use super::client::SpotifyClient;

pub const PLAYLIST_NAME: &str = "Random Playlist";
pub const PLAYLIST_DESCRIPTION: &str = "Random playlist...";

impl SpotifyClient {
    /// Creates the private playlist the sampled tracks will land in.
    pub async fn create_playlist(&self) -> Result<CreatePlaylistResponse, reqwest::Error> {
        let api_url = format!("{uri}/me/playlists", uri = &self.config.api_url);

        let body = CreatePlaylistRequest {
            name: PLAYLIST_NAME.to_string(),
            description: PLAYLIST_DESCRIPTION.to_string(),
            public: false,
            collaborative: false,
        };

        let response = self
            .http
            .post(&api_url)
            .bearer_auth(self.bearer())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        response.json::<CreatePlaylistResponse>().await
    }

    /// Adds the given track URIs in one batch call. An empty batch is still
    /// sent; what the provider does with it is the provider's business.
    pub async fn add_tracks(
        &self,
        playlist_id: &str,
        uris: Vec<String>,
    ) -> Result<AddTrackToPlaylistResponse, reqwest::Error> {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks",
            uri = &self.config.api_url,
            id = playlist_id
        );

        let body = AddTrackToPlaylistRequest { uris };

        let response = self
            .http
            .post(&api_url)
            .bearer_auth(self.bearer())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        response.json::<AddTrackToPlaylistResponse>().await
    }
}
