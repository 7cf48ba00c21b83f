use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upstream source a course record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Udemy,
    Coursera,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::Youtube => "youtube",
            Platform::Udemy => "udemy",
            Platform::Coursera => "coursera",
        };
        f.write_str(name)
    }
}

/// Normalized course record produced by every provider adapter
///
/// `id` is the provider-native identifier; it is only unique per
/// `(platform, id)`. Everything besides `id`, `title`, `url` and `platform`
/// is optional — an absent price means the course is free to the consumer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub url: String,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}
