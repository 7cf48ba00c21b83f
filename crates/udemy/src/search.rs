use crate::client::{UdemyClient, RAPIDAPI_HOST};
use crate::models::{SearchRequest, SearchResponse};

impl UdemyClient {
    /// Search courses by keyword
    /// POST /v1/udemy/search?text={query}
    ///
    /// Search parameters (page, sort order, locale) are fixed; the upstream
    /// API takes the keyword as a query parameter next to the JSON body.
    pub async fn search(&self, query: &str) -> crate::Result<SearchResponse> {
        let response = self
            .http()
            .post(self.url("/v1/udemy/search"))
            .query(&[("text", query)])
            .header("x-rapidapi-key", self.api_key())
            .header("x-rapidapi-host", RAPIDAPI_HOST)
            .json(&SearchRequest::default())
            .send()
            .await?;
        self.handle_response(response).await
    }
}
