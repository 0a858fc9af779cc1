// crates/finder-core/src/error.rs

use thiserror::Error;

/// Errors raised while configuring or talking to outside capabilities.
///
/// Search outcomes are *not* errors: a remote status such as
/// `OVER_QUERY_LIMIT` travels as [`crate::SearchOutcome::Failed`] so that the
/// controller can show it in the advisory banner.
#[derive(Debug, Error)]
pub enum FinderError {
    /// No places API key was configured. The map/search capability cannot start.
    #[error("No Google Maps API key configured (set {0})")]
    MissingApiKey(&'static str),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

pub type Result<T> = std::result::Result<T, FinderError>;
