//! Coursera catalog provider adapter

use std::sync::Arc;

use async_trait::async_trait;
use coursera::{CourseraClient, CourseraCourse};

use crate::{Course, CourseProvider, Platform, ProviderError};

/// Coursera catalog search provider
///
/// The catalog carries no pricing, rating or thumbnail data.
pub struct CourseraProvider {
    client: Arc<CourseraClient>,
}

impl CourseraProvider {
    pub fn new(client: Arc<CourseraClient>) -> Self {
        Self { client }
    }

    /// Create a CourseraProvider with a reqwest Client and a RapidAPI key
    pub fn with_http_client(http_client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client: Arc::new(CourseraClient::new(http_client, api_key)),
        }
    }
}

#[async_trait]
impl CourseProvider for CourseraProvider {
    async fn search(&self, query: &str) -> Result<Vec<Course>, ProviderError> {
        let response = self.client.search(query).await?;
        Ok(response.courses.iter().map(map_course).collect())
    }

    fn platform(&self) -> Platform {
        Platform::Coursera
    }

    fn name(&self) -> &'static str {
        "coursera"
    }
}

fn map_course(course: &CourseraCourse) -> Course {
    Course {
        id: course.course_id.clone().unwrap_or_default(),
        title: course.course_name.clone().unwrap_or_default(),
        url: course.course_url.clone().unwrap_or_default(),
        platform: Platform::Coursera,
        price: None,
        rating: None,
        reviews: None,
        thumbnail: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_catalog_entry() {
        let course: CourseraCourse = serde_json::from_value(serde_json::json!({
            "course_id": "ml-001",
            "course_name": "Machine Learning",
            "course_url": "https://www.coursera.org/learn/machine-learning"
        }))
        .unwrap();

        let mapped = map_course(&course);
        assert_eq!(mapped.id, "ml-001");
        assert_eq!(mapped.title, "Machine Learning");
        assert_eq!(mapped.platform, Platform::Coursera);
        assert!(mapped.price.is_none());
        assert!(mapped.thumbnail.is_none());
    }

    #[test]
    fn missing_fields_map_to_empty_strings() {
        let course: CourseraCourse = serde_json::from_value(serde_json::json!({})).unwrap();

        let mapped = map_course(&course);
        assert_eq!(mapped.id, "");
        assert_eq!(mapped.title, "");
        assert_eq!(mapped.url, "");
    }
}
