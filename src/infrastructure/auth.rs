//! Session resolution against the auth provider

use async_trait::async_trait;
use std::path::Path;

use crate::domain::models::{AuthUser, Identity};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::log_session_resolved;

/// Source of the currently signed-in user
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// `Ok(None)` when nobody is signed in; `Err` only when the provider
    /// itself could not answer.
    async fn current_user(&self) -> Result<Option<AuthUser>>;
}

/// Provider with a fixed answer, loaded from a JSON fixture
#[derive(Debug, Clone, Default)]
pub struct StaticAuthProvider {
    user: Option<AuthUser>,
}

impl StaticAuthProvider {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: AuthUser) -> Self {
        Self { user: Some(user) }
    }

    /// Read the signed-in user from `path`
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| AppError::InvalidFixture {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let user: AuthUser = serde_json::from_str(&raw).map_err(|e| AppError::InvalidFixture {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::signed_in(user))
    }
}

#[async_trait]
impl AuthProvider for StaticAuthProvider {
    async fn current_user(&self) -> Result<Option<AuthUser>> {
        Ok(self.user.clone())
    }
}

/// Resolve the current session into the serialized identity the navbar takes.
///
/// Provider failures are returned untouched; the caller decides how to
/// report them (502 from the API, anonymous navbar in the app).
pub async fn resolve_session(provider: &dyn AuthProvider) -> Result<Option<Identity>> {
    let identity = provider.current_user().await?.map(Identity::from);
    log_session_resolved(identity.as_ref().map(|i| i.id.as_str()));
    Ok(identity)
}
