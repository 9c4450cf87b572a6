use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Auth provider error: {0}")]
    AuthProvider(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Search timed out after {0} ms")]
    SearchTimeout(u64),

    #[error("Invalid fixture {path}: {reason}")]
    InvalidFixture { path: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
