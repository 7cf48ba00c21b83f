use axum::{
    extract::{Query, State},
    Json,
};

use catalog::{Course, CourseProvider};

use crate::error::AppResult;
use crate::state::AppState;

use super::{require_query, SearchParams};

/// Search YouTube videos
#[utoipa::path(
    get,
    path = "/api/search/youtube",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Normalized search results", body = Vec<Course>),
        (status = 400, description = "Missing query parameter"),
        (status = 500, description = "Upstream call failed")
    )
)]
pub async fn search_youtube(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Course>>> {
    let query = require_query(&params)?;
    let courses = state.youtube.search(query).await?;
    Ok(Json(courses))
}

/// Search Udemy courses
#[utoipa::path(
    get,
    path = "/api/search/udemy",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Normalized search results", body = Vec<Course>),
        (status = 400, description = "Missing query parameter"),
        (status = 500, description = "Upstream call failed")
    )
)]
pub async fn search_udemy(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Course>>> {
    let query = require_query(&params)?;
    let courses = state.udemy.search(query).await?;
    Ok(Json(courses))
}

/// Search the Coursera catalog
#[utoipa::path(
    get,
    path = "/api/search/coursera",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Normalized search results", body = Vec<Course>),
        (status = 400, description = "Missing query parameter"),
        (status = 500, description = "Upstream call failed")
    )
)]
pub async fn search_coursera(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Course>>> {
    let query = require_query(&params)?;
    let courses = state.coursera.search(query).await?;
    Ok(Json(courses))
}
