// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod identity;
pub mod user;

pub use identity::{AuthUser, EmailAddress, Identity};
pub use user::UserSummary;
