//! Udemy course provider adapter

use std::sync::Arc;

use async_trait::async_trait;
use udemy::{UdemyClient, UdemyCourse};

use crate::{Course, CourseProvider, Platform, ProviderError};

/// Thumbnail variant used for course cards
const THUMBNAIL_INDEX: usize = 4;

/// Udemy marketplace search provider
pub struct UdemyProvider {
    client: Arc<UdemyClient>,
}

impl UdemyProvider {
    pub fn new(client: Arc<UdemyClient>) -> Self {
        Self { client }
    }

    /// Create an UdemyProvider with a reqwest Client and a RapidAPI key
    pub fn with_http_client(http_client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client: Arc::new(UdemyClient::new(http_client, api_key)),
        }
    }
}

#[async_trait]
impl CourseProvider for UdemyProvider {
    async fn search(&self, query: &str) -> Result<Vec<Course>, ProviderError> {
        let response = self.client.search(query).await?;
        Ok(response.data.courses.iter().map(map_course).collect())
    }

    fn platform(&self) -> Platform {
        Platform::Udemy
    }

    fn name(&self) -> &'static str {
        "udemy"
    }
}

fn map_course(course: &UdemyCourse) -> Course {
    Course {
        id: course
            .course_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
        title: course.title.clone().unwrap_or_default(),
        url: course
            .url
            .as_deref()
            .map(|path| format!("https://www.udemy.com{}", path))
            .unwrap_or_default(),
        platform: Platform::Udemy,
        price: course
            .purchase
            .as_ref()
            .and_then(|p| p.price.as_ref())
            .and_then(|p| p.price_string.clone()),
        rating: course.rating,
        reviews: course.num_reviews,
        thumbnail: course.images.get(THUMBNAIL_INDEX).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(json: serde_json::Value) -> UdemyCourse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn maps_complete_course() {
        let mapped = map_course(&course(serde_json::json!({
            "course_id": 567828,
            "title": "The Complete Python Bootcamp",
            "url": "/course/complete-python-bootcamp/",
            "purchase": { "price": { "price_string": "$19.99" } },
            "rating": 4.6,
            "num_reviews": 490123,
            "images": ["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"]
        })));

        assert_eq!(mapped.id, "567828");
        assert_eq!(
            mapped.url,
            "https://www.udemy.com/course/complete-python-bootcamp/"
        );
        assert_eq!(mapped.platform, Platform::Udemy);
        assert_eq!(mapped.price.as_deref(), Some("$19.99"));
        assert_eq!(mapped.rating, Some(4.6));
        assert_eq!(mapped.reviews, Some(490123));
        assert_eq!(mapped.thumbnail.as_deref(), Some("e.jpg"));
    }

    #[test]
    fn missing_pricing_and_images_map_to_none() {
        let mapped = map_course(&course(serde_json::json!({
            "course_id": 111,
            "title": "Free Course",
            "url": "/course/free-course/",
            "images": ["only-one.jpg"]
        })));

        assert!(mapped.price.is_none());
        assert!(mapped.thumbnail.is_none());
        assert!(mapped.rating.is_none());
        assert!(mapped.reviews.is_none());
    }
}
