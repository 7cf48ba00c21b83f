use crate::client::{YoutubeClient, RAPIDAPI_HOST};
use crate::models::SearchResponse;

impl YoutubeClient {
    /// Search videos by keyword
    /// GET /search/?q={query}&hl=en&gl=US
    pub async fn search(&self, query: &str) -> crate::Result<SearchResponse> {
        let response = self
            .http()
            .get(self.url("/search/"))
            .query(&[("q", query), ("hl", "en"), ("gl", "US")])
            .header("x-rapidapi-key", self.api_key())
            .header("x-rapidapi-host", RAPIDAPI_HOST)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
