use async_trait::async_trait;
use reqwest::Client;

use crate::{
    Res,
    ports::TrackSearch,
    types::{LocalTrack, SearchQuery, SearchResponse},
};

pub struct LibraryClient {
    client: Client,
    api_url: String,
}

impl LibraryClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Runs a free-text search restricted to the query's result type.
    ///
    /// A response without a `tracks` field is an empty result. Entries are
    /// not validated here, so a malformed later entry cannot hide the first.
    /// Non-success statuses and bodies that are not a JSON object are errors.
    pub async fn search_tracks(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<LocalTrack>, reqwest::Error> {
        let api_url = format!("{uri}/search", uri = &self.api_url);

        let response = self
            .client
            .get(&api_url)
            .query(&[
                ("q", query.query.as_str()),
                ("type", query.result_type.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let json = response.json::<SearchResponse>().await?;
        Ok(json.into_tracks())
    }
}

#[async_trait]
impl TrackSearch for LibraryClient {
    async fn search(&self, query: &SearchQuery) -> Res<Vec<LocalTrack>> {
        Ok(self.search_tracks(query).await?)
    }
}
