//! JSON API served by the standalone server

use axum::{routing::get, Router};

use crate::infrastructure::ServerState;

/// Current session
pub mod session;

/// User search
pub mod users;

pub use session::session_handler;
pub use users::{search_users_handler, SearchParams};

/// All API routes, bound to `state`
pub fn api_router(state: ServerState) -> Router {
    Router::new()
        .route("/api/session", get(session_handler))
        .route("/api/users/search", get(search_users_handler))
        .with_state(state)
}
