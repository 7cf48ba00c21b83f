use serde::{Deserialize, Serialize};

/// Search request body for POST /v1/udemy/search
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub page: i64,
    pub page_size: i64,
    pub ratings: String,
    pub instructional_level: Vec<String>,
    pub lang: Vec<String>,
    pub price: Vec<String>,
    pub duration: Vec<String>,
    pub subtitles_lang: Vec<String>,
    pub sort: String,
    pub features: Vec<String>,
    pub locale: String,
    pub extract_pricing: bool,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            ratings: String::new(),
            instructional_level: Vec::new(),
            lang: Vec::new(),
            price: Vec::new(),
            duration: Vec::new(),
            subtitles_lang: Vec::new(),
            sort: "popularity".to_string(),
            features: Vec::new(),
            locale: "en_US".to_string(),
            extract_pricing: true,
        }
    }
}

/// Search response from POST /v1/udemy/search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: SearchData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub courses: Vec<UdemyCourse>,
}

/// Course item in search results
#[derive(Debug, Clone, Deserialize)]
pub struct UdemyCourse {
    pub course_id: Option<i64>,
    pub title: Option<String>,
    /// Site-relative URL ("/course/python-bootcamp/")
    pub url: Option<String>,
    pub purchase: Option<Purchase>,
    pub rating: Option<f64>,
    pub num_reviews: Option<i64>,
    /// Thumbnail variants by ascending size
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Purchase {
    pub price: Option<Price>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Price {
    pub price_string: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_matches_search_defaults() {
        let body = serde_json::to_value(SearchRequest::default()).unwrap();
        assert_eq!(body["page"], 1);
        assert_eq!(body["page_size"], 10);
        assert_eq!(body["sort"], "popularity");
        assert_eq!(body["locale"], "en_US");
        assert_eq!(body["extract_pricing"], true);
    }

    #[test]
    fn decodes_course_without_pricing() {
        let json = serde_json::json!({
            "data": {
                "courses": [
                    {
                        "course_id": 12345,
                        "title": "Rust for Beginners",
                        "url": "/course/rust-for-beginners/",
                        "rating": 4.6,
                        "num_reviews": 1021
                    }
                ]
            }
        });

        let response: SearchResponse = serde_json::from_value(json).unwrap();
        let course = &response.data.courses[0];
        assert_eq!(course.course_id, Some(12345));
        assert!(course.purchase.is_none());
        assert!(course.images.is_empty());
    }
}
