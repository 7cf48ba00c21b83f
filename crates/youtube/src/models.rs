use serde::Deserialize;

/// Search response from GET /search/
///
/// The upstream payload is loosely shaped; every nested field can be absent
/// and an item may not be a video at all (channels, playlists).
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub contents: Vec<SearchItem>,
}

/// One element of the search result list
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub video: Option<Video>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub video_id: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}
