//! Current session endpoint

use axum::{extract::State, http::StatusCode, Json};

use crate::domain::models::Identity;
use crate::infrastructure::{resolve_session, ServerState};

/// GET /api/session
/// Serialized identity of the signed-in user, `null` when anonymous.
/// 502 when the auth provider cannot answer.
pub async fn session_handler(
    State(state): State<ServerState>,
) -> Result<Json<Option<Identity>>, StatusCode> {
    resolve_session(state.auth.as_ref())
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to resolve session: {}", e);
            StatusCode::BAD_GATEWAY
        })
}
