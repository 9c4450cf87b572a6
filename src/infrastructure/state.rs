//! Server-wide state shared by server functions and axum handlers

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::auth::{AuthProvider, StaticAuthProvider};
use super::directory::UserDirectory;
use crate::config::AppConfig;
use crate::shared::errors::Result;

#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<dyn AuthProvider>,
    pub directory: Arc<UserDirectory>,
}

impl ServerState {
    pub fn new(config: AppConfig, auth: Arc<dyn AuthProvider>, directory: UserDirectory) -> Self {
        Self {
            config: Arc::new(config),
            auth,
            directory: Arc::new(directory),
        }
    }

    /// Load the fixtures named in `config`
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let directory = match &config.directory_file {
            Some(path) => UserDirectory::load(path)?,
            None => UserDirectory::default(),
        };
        let auth = match &config.session_file {
            Some(path) => StaticAuthProvider::load(path)?,
            None => StaticAuthProvider::anonymous(),
        };
        Ok(Self::new(config, Arc::new(auth), directory))
    }
}

/// Process-wide state for server functions, built from the environment.
/// A broken configuration is logged and replaced by an empty, anonymous setup.
static SERVER_STATE: Lazy<ServerState> = Lazy::new(|| {
    let loaded = AppConfig::from_env()
        .map_err(|e| e.to_string())
        .and_then(|config| ServerState::from_config(config).map_err(|e| e.to_string()));

    loaded.unwrap_or_else(|e| {
        tracing::error!("Failed to load server state: {}. Falling back to defaults.", e);
        ServerState::new(
            AppConfig::default(),
            Arc::new(StaticAuthProvider::anonymous()),
            UserDirectory::default(),
        )
    })
});

pub fn server_state() -> &'static ServerState {
    &SERVER_STATE
}
