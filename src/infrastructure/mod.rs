// Server-side infrastructure: auth provider, user directory, shared state
pub mod auth;
pub mod directory;
pub mod state;

pub use auth::{AuthProvider, StaticAuthProvider, resolve_session};
pub use directory::UserDirectory;
pub use state::{ServerState, server_state};
