//! YouTube course provider adapter

use std::sync::Arc;

use async_trait::async_trait;
use youtube::{SearchItem, YoutubeClient};

use crate::{Course, CourseProvider, Platform, ProviderError};

/// YouTube video search provider
pub struct YoutubeProvider {
    client: Arc<YoutubeClient>,
}

impl YoutubeProvider {
    pub fn new(client: Arc<YoutubeClient>) -> Self {
        Self { client }
    }

    /// Create a YoutubeProvider with a reqwest Client and a RapidAPI key
    pub fn with_http_client(http_client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client: Arc::new(YoutubeClient::new(http_client, api_key)),
        }
    }
}

#[async_trait]
impl CourseProvider for YoutubeProvider {
    async fn search(&self, query: &str) -> Result<Vec<Course>, ProviderError> {
        let response = self.client.search(query).await?;
        Ok(response
            .contents
            .iter()
            .enumerate()
            .map(|(index, item)| map_search_item(item, index))
            .collect())
    }

    fn platform(&self) -> Platform {
        Platform::Youtube
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}

fn map_search_item(item: &SearchItem, index: usize) -> Course {
    let video = item.video.as_ref();
    let video_id = video.and_then(|v| v.video_id.as_deref());

    Course {
        // Items occasionally arrive without a native id; fall back to the
        // position within this response so display keys stay stable.
        id: video_id
            .map(str::to_string)
            .unwrap_or_else(|| index.to_string()),
        title: video.and_then(|v| v.title.clone()).unwrap_or_default(),
        url: format!(
            "https://www.youtube.com/watch?v={}",
            video_id.unwrap_or_default()
        ),
        platform: Platform::Youtube,
        price: None,
        rating: None,
        reviews: None,
        thumbnail: video
            .and_then(|v| v.thumbnails.first())
            .and_then(|t| t.url.clone()),
    }
}
