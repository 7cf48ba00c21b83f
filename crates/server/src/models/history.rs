use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted course view event
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    pub user_id: String,
    pub course_id: String,
    pub title: String,
    pub url: String,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Request body for recording a course view
///
/// Required fields are validated by [`CreateHistoryRequest::into_entry`] so
/// the endpoint can answer with a single "Missing required fields" error
/// instead of a per-field deserialization failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHistoryRequest {
    pub user_id: Option<String>,
    pub course_id: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub platform: Option<String>,
    pub price: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
    pub thumbnail: Option<String>,
}

/// Validated view event ready to be persisted
#[derive(Debug, Clone)]
pub struct CreateHistoryEntry {
    pub user_id: String,
    pub course_id: String,
    pub title: String,
    pub url: String,
    pub platform: String,
    pub price: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Option<i64>,
    pub thumbnail: Option<String>,
}

impl CreateHistoryRequest {
    /// Validate required fields; blank strings count as missing.
    pub fn into_entry(self) -> Option<CreateHistoryEntry> {
        fn required(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Some(CreateHistoryEntry {
            user_id: required(self.user_id)?,
            course_id: required(self.course_id)?,
            title: required(self.title)?,
            url: required(self.url)?,
            platform: required(self.platform)?,
            price: self.price,
            rating: self.rating,
            reviews: self.reviews,
            thumbnail: self.thumbnail,
        })
    }
}

/// Pagination metadata for the history feed
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
}

/// One page of a user's viewing history
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryPage {
    pub history: Vec<HistoryEntry>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveHistoryResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteHistoryResponse {
    pub message: String,
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateHistoryRequest {
        CreateHistoryRequest {
            user_id: Some("u1".to_string()),
            course_id: Some("c1".to_string()),
            title: Some("Intro to Rust".to_string()),
            url: Some("https://example.com/c1".to_string()),
            platform: Some("udemy".to_string()),
            price: Some("$19.99".to_string()),
            rating: Some(4.5),
            reviews: Some(1000),
            thumbnail: None,
        }
    }

    #[test]
    fn accepts_complete_request() {
        let entry = full_request().into_entry().unwrap();
        assert_eq!(entry.user_id, "u1");
        assert_eq!(entry.price.as_deref(), Some("$19.99"));
    }

    #[test]
    fn rejects_missing_platform() {
        let mut request = full_request();
        request.platform = None;
        assert!(request.into_entry().is_none());
    }

    #[test]
    fn rejects_blank_required_field() {
        let mut request = full_request();
        request.title = Some("   ".to_string());
        assert!(request.into_entry().is_none());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let mut request = full_request();
        request.price = None;
        request.rating = None;
        request.reviews = None;
        let entry = request.into_entry().unwrap();
        assert!(entry.price.is_none());
        assert!(entry.rating.is_none());
    }
}
