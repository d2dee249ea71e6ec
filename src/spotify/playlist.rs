use async_trait::async_trait;
use reqwest::Client;

use crate::{
    Res,
    ports::PlaylistSource,
    types::{PlaylistRef, PlaylistResponse},
};

pub struct SpotifyClient {
    client: Client,
    api_url: String,
}

impl SpotifyClient {
    /// Creates a client for the Web API rooted at `api_url`
    /// (e.g. `https://api.spotify.com/v1`).
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Retrieves a playlist with its cover images and track list.
    ///
    /// # Errors
    ///
    /// Any non-success status (401 for a bad token, 404 for an unknown
    /// playlist, 429 when rate limited), network failure or undecodable body
    /// is returned as a `reqwest::Error`. Nothing is retried.
    ///
    /// # Example
    ///
    /// ```
    /// let client = SpotifyClient::new("https://api.spotify.com/v1");
    /// let playlist_id = utils::extract_playlist_id("37i9dQZF1DXcBWIGoYBM5M")?;
    /// let playlist = client.get_playlist("BQC...", &playlist_id).await?;
    /// ```
    pub async fn get_playlist(
        &self,
        token: &str,
        playlist: &PlaylistRef,
    ) -> Result<PlaylistResponse, reqwest::Error> {
        let api_url = format!(
            "{uri}/playlists/{id}",
            uri = &self.api_url,
            id = playlist.as_str()
        );

        let response = self
            .client
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        response.json::<PlaylistResponse>().await
    }
}

#[async_trait]
impl PlaylistSource for SpotifyClient {
    async fn fetch_playlist(&self, token: &str, playlist: &PlaylistRef) -> Res<PlaylistResponse> {
        Ok(self.get_playlist(token, playlist).await?)
    }
}
