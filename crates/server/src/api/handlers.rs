mod courses;
mod history;
mod search;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

/// Query parameters for course search endpoints
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Search term
    pub query: Option<String>,
}

/// Extract a non-empty search term or fail with a 400.
fn require_query(params: &SearchParams) -> AppResult<&str> {
    match params.query.as_deref().map(str::trim) {
        Some(query) if !query.is_empty() => Ok(query),
        _ => Err(AppError::bad_request("Query parameter is required")),
    }
}

// Re-export all handlers
pub use courses::search_courses;
pub use history::{delete_history, get_history, save_history};
pub use search::{search_coursera, search_udemy, search_youtube};

// Re-export utoipa path structs for OpenAPI routing
#[doc(hidden)]
pub use courses::__path_search_courses;
#[doc(hidden)]
pub use history::{__path_delete_history, __path_get_history, __path_save_history};
#[doc(hidden)]
pub use search::{__path_search_coursera, __path_search_udemy, __path_search_youtube};
