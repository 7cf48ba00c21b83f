use serde::Deserialize;

/// Catalog response from GET /rapidapi/course/get_course.php
#[derive(Debug, Clone, Deserialize)]
pub struct CourseCatalogResponse {
    #[serde(default)]
    pub courses: Vec<CourseraCourse>,
}

/// Course item in the catalog listing
#[derive(Debug, Clone, Deserialize)]
pub struct CourseraCourse {
    pub course_id: Option<String>,
    pub course_name: Option<String>,
    pub course_url: Option<String>,
}
