use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};
use crate::models::{
    CreateHistoryRequest, DeleteHistoryResponse, HistoryPage, Pagination, SaveHistoryResponse,
};
use crate::repositories::HistoryRepository;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 10;

/// Query parameters for reading history
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct HistoryParams {
    /// User whose history to read
    pub user_id: Option<String>,
    /// Page size (default 10)
    pub limit: Option<i64>,
    /// 1-based page number (default 1)
    pub page: Option<i64>,
}

/// Query parameters for clearing history
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ClearHistoryParams {
    /// User whose history to clear
    pub user_id: Option<String>,
    /// Restrict the deletion to one course
    pub course_id: Option<String>,
}

fn require_user_id(user_id: &Option<String>) -> AppResult<&str> {
    match user_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(AppError::bad_request("User ID is required")),
    }
}

/// Record a course view
#[utoipa::path(
    post,
    path = "/api/history",
    tag = "history",
    request_body = CreateHistoryRequest,
    responses(
        (status = 200, description = "History saved", body = SaveHistoryResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn save_history(
    State(state): State<AppState>,
    Json(payload): Json<CreateHistoryRequest>,
) -> AppResult<Json<SaveHistoryResponse>> {
    let entry = payload
        .into_entry()
        .ok_or_else(|| AppError::bad_request("Missing required fields"))?;

    HistoryRepository::record_view(&state.db, entry).await?;

    Ok(Json(SaveHistoryResponse {
        message: "Course history saved successfully".to_string(),
    }))
}

/// Read a user's paginated viewing history, most recent first
#[utoipa::path(
    get,
    path = "/api/history",
    tag = "history",
    params(HistoryParams),
    responses(
        (status = 200, description = "One page of history", body = HistoryPage),
        (status = 400, description = "Missing user id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> AppResult<Json<HistoryPage>> {
    let user_id = require_user_id(&params.user_id)?;
    let page = params.page.filter(|p| *p > 0).unwrap_or(1);
    let page_size = params.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_PAGE_SIZE);

    let (entries, total_items) = HistoryRepository::list(&state.db, user_id, page, page_size).await?;

    let total_pages = (total_items + page_size - 1) / page_size;

    Ok(Json(HistoryPage {
        history: entries,
        pagination: Pagination {
            current_page: page,
            total_pages,
            total_items,
            items_per_page: page_size,
        },
    }))
}

/// Clear a user's viewing history
#[utoipa::path(
    delete,
    path = "/api/history",
    tag = "history",
    params(ClearHistoryParams),
    responses(
        (status = 200, description = "History deleted", body = DeleteHistoryResponse),
        (status = 400, description = "Missing user id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_history(
    State(state): State<AppState>,
    Query(params): Query<ClearHistoryParams>,
) -> AppResult<Json<DeleteHistoryResponse>> {
    let user_id = require_user_id(&params.user_id)?;

    let deleted_count =
        HistoryRepository::clear(&state.db, user_id, params.course_id.as_deref()).await?;

    Ok(Json(DeleteHistoryResponse {
        message: "Course history deleted successfully".to_string(),
        deleted_count,
    }))
}
