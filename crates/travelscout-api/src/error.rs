use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything that can go wrong between us and the catalog document
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network response was not ok: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}
