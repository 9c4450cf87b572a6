use serde::{Deserialize, Serialize};

/// One email address as listed by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddress {
    pub email_address: String,
}

/// The signed-in user as the auth provider reports it.
///
/// Only the fields the navbar needs are kept; anything else the provider
/// sends is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
}

impl AuthUser {
    /// First listed address, which the provider treats as primary
    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses
            .first()
            .map(|email| email.email_address.as_str())
    }
}

/// Minimal, transport-safe identity handed from the server to the navbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub username: Option<String>,
    pub email_address: String,
}

impl Identity {
    /// Handle used in `/profile/{handle}`.
    ///
    /// Username first, then the local part of the email address. Falls back
    /// to the user id when the provider gave neither.
    pub fn profile_handle(&self) -> String {
        if let Some(username) = self.username.as_deref().filter(|u| !u.is_empty()) {
            return username.to_string();
        }

        let local_part = email_local_part(&self.email_address);
        if local_part.is_empty() {
            self.id.clone()
        } else {
            local_part.to_string()
        }
    }
}

impl From<AuthUser> for Identity {
    fn from(user: AuthUser) -> Self {
        let email_address = user.primary_email().unwrap_or_default().to_string();
        Self {
            id: user.id,
            username: user.username,
            email_address,
        }
    }
}

/// Substring before the first `@` (whole string when there is none)
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}
