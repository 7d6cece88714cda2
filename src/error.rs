//! Error types for notion-pr-sync

use thiserror::Error;

/// All errors that can occur during a sync run
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Tracker API returned a non-success response or an unusable body
    #[error("tracker API error: {0}")]
    Tracker(String),

    /// Tracker has no page with the requested id
    #[error("tracker page not found: {0}")]
    PageNotFound(String),

    /// Transport-level failure talking to the tracker
    #[error("tracker transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Code-host API failure
    #[error("code host API error: {0}")]
    Platform(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::Platform(err.to_string())
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
