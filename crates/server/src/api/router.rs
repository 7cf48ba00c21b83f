use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{openapi::ApiDoc, state::AppState};

use super::handlers;

pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::search_youtube))
        .routes(routes!(handlers::search_udemy))
        .routes(routes!(handlers::search_coursera))
        .routes(routes!(handlers::search_courses))
        .routes(routes!(
            handlers::save_history,
            handlers::get_history,
            handlers::delete_history
        ))
        .with_state(state)
        .split_for_parts();

    (router, api)
}
