use utoipa::OpenApi;

use catalog::{Course, Platform};

use crate::models::{
    CreateHistoryRequest, DeleteHistoryResponse, HistoryEntry, HistoryPage, Pagination,
    SaveHistoryResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CourseHub API",
        version = "1.0.0"
    ),
    tags(
        (name = "search", description = "Per-provider course search endpoints"),
        (name = "courses", description = "Aggregate course search endpoints"),
        (name = "history", description = "Viewing history endpoints")
    ),
    components(schemas(
        Course,
        Platform,
        HistoryEntry,
        CreateHistoryRequest,
        HistoryPage,
        Pagination,
        SaveHistoryResponse,
        DeleteHistoryResponse
    ))
)]
pub struct ApiDoc;
