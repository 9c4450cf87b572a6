//! Values shared by the search widget and the server

use std::time::Duration;

/// Quiet period after the last keystroke before a search is issued
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Minimum trimmed query length (in characters) that triggers a search
pub const MIN_QUERY_LEN: usize = 2;

/// Upper bound on a single backend search call
pub const SEARCH_REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Default number of users the backend returns per query
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Message shown when a search call fails
pub const SEARCH_ERROR_MESSAGE: &str = "Something went wrong while searching.";

pub const DEFAULT_AVATAR: &str = "/default-avatar.png";
pub const UNNAMED_USER: &str = "Unnamed User";
pub const AVATAR_ALT_FALLBACK: &str = "User";

pub const DEFAULT_SIGN_IN_URL: &str = "/sign-in";
pub const DEFAULT_SIGN_OUT_URL: &str = "/sign-out";
