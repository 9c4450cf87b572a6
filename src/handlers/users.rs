//! User search endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::domain::models::UserSummary;
use crate::infrastructure::ServerState;
use crate::shared::logging::log_search_served;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

/// GET /api/users/search?q=
/// Users matching `q`; a `limit` above the configured cap is clamped
pub async fn search_users_handler(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<UserSummary>> {
    let cap = state.config.search_limit;
    let limit = params.limit.map_or(cap, |requested| requested.min(cap));

    let results = state.directory.search(&params.q, limit);
    log_search_served(&params.q, results.len());

    Json(results)
}
