use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};

use catalog::Course;

use crate::error::AppResult;
use crate::state::AppState;

use super::{require_query, SearchParams};

/// Aggregate search across every configured provider
///
/// A provider that fails or times out contributes an empty list; the request
/// as a whole still succeeds as long as the aggregation can run.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "courses",
    params(SearchParams),
    responses(
        (status = 200, description = "Search results keyed by provider name", body = Object),
        (status = 400, description = "Missing query parameter"),
        (status = 500, description = "Aggregation could not run")
    )
)]
pub async fn search_courses(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<BTreeMap<&'static str, Vec<Course>>>> {
    let query = require_query(&params)?;
    let outcomes = state.aggregator.aggregate(query).await?;

    let mut results = BTreeMap::new();
    for outcome in outcomes {
        // Failures were already logged by the aggregator; the slot degrades
        // to an empty list so sibling providers still render.
        results.insert(outcome.provider, outcome.result.unwrap_or_default());
    }

    Ok(Json(results))
}
