/// Error types for the planner client
use thiserror::Error;

/// Failure talking to the backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network failure or an unreadable body
    #[error("Request failed: {0}")]
    Transport(String),

    /// Body was not the JSON we expected
    #[error("Unexpected response (HTTP {status}): {detail}")]
    Parse { status: u16, detail: String },

    /// The backend answered with `ok: false`
    #[error("{0}")]
    Backend(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Outcome of a plan run (or saved-trip view) that produced no result
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Caught before any request was sent
    #[error("{0}")]
    MissingInput(&'static str),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// Backend has no forecast for the requested window
    #[error("{0}")]
    NoDataForWindow(String),
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
