use crate::client::{CourseraClient, RAPIDAPI_HOST};
use crate::models::CourseCatalogResponse;

impl CourseraClient {
    /// Search the course catalog by keyword
    /// GET /rapidapi/course/get_course.php?page_no=1&course_institution={query}
    ///
    /// The upstream endpoint reuses `course_institution` as its free-text
    /// search parameter.
    pub async fn search(&self, query: &str) -> crate::Result<CourseCatalogResponse> {
        let encoded = urlencoding::encode(query);
        let response = self
            .http()
            .get(self.url(&format!(
                "/rapidapi/course/get_course.php?page_no=1&course_institution={}",
                encoded
            )))
            .header("x-rapidapi-key", self.api_key())
            .header("x-rapidapi-host", RAPIDAPI_HOST)
            .send()
            .await?;
        self.handle_response(response).await
    }
}
