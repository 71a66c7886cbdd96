//! Error types for Lenster

use thiserror::Error;

/// Main error type for Lenster operations
#[derive(Error, Debug)]
pub enum LensterError {
    /// HTTP request to the indexing API failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The GraphQL endpoint answered with an `errors` array
    #[error("GraphQL error: {}", messages.join("; "))]
    GraphQl { messages: Vec<String> },

    /// Server returned a non-success status or a body without data
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Requested profile is not one of the session's profiles
    #[error("Profile not in session: {0}")]
    ProfileNotInSession(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using LensterError
pub type Result<T> = std::result::Result<T, LensterError>;
