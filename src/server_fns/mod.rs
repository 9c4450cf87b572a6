//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::models::{Identity, UserSummary};

/// Where the sign-in and account affordances point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthLinks {
    pub sign_in_url: String,
    pub sign_out_url: String,
}

impl Default for AuthLinks {
    fn default() -> Self {
        Self {
            sign_in_url: crate::shared::constants::DEFAULT_SIGN_IN_URL.to_string(),
            sign_out_url: crate::shared::constants::DEFAULT_SIGN_OUT_URL.to_string(),
        }
    }
}

/// Serialized identity of the signed-in user, `None` when anonymous.
/// Errors only when the auth provider itself fails.
#[server]
pub async fn current_identity() -> Result<Option<Identity>, ServerFnError> {
    let state = crate::infrastructure::server_state();
    crate::infrastructure::resolve_session(state.auth.as_ref())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn auth_links() -> Result<AuthLinks, ServerFnError> {
    let config = &crate::infrastructure::server_state().config;
    Ok(AuthLinks {
        sign_in_url: config.sign_in_url.clone(),
        sign_out_url: config.sign_out_url.clone(),
    })
}

/// Users matching `query`, capped at the configured limit
#[server]
pub async fn search_users(query: String) -> Result<Vec<UserSummary>, ServerFnError> {
    let state = crate::infrastructure::server_state();
    let results = state.directory.search(&query, state.config.search_limit);
    crate::shared::logging::log_search_served(&query, results.len());
    Ok(results)
}
