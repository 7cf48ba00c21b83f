use reqwest::Client;

use crate::error::CourseraError;

const BASE_URL: &str = "https://collection-for-coursera-courses.p.rapidapi.com";
pub(crate) const RAPIDAPI_HOST: &str = "collection-for-coursera-courses.p.rapidapi.com";

pub struct CourseraClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CourseraClient {
    /// Create a CourseraClient with a reqwest Client and a RapidAPI key.
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create a CourseraClient that talks to a custom base URL.
    pub fn with_base_url(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CourseraError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| CourseraError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
