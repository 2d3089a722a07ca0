//! Error types for Monday.com operations.
//!
//! These errors are mapped to core port errors at the boundary; only
//! client construction surfaces them directly.

use thiserror::Error;

/// Result type alias for Monday.com operations.
pub type MondayResult<T> = Result<T, MondayError>;

/// Errors related to Monday.com API operations.
#[derive(Debug, Error)]
pub enum MondayError {
    /// API request failed with an HTTP error status.
    #[error("Monday.com API request failed with status {status}: {body}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// The response carried GraphQL errors.
    #[error("GraphQL errors: {}", messages.join("; "))]
    Graphql {
        /// Error messages reported by the API
        messages: Vec<String>,
    },

    /// The requested board does not exist or is not visible to the token.
    #[error("Board '{board_id}' not found")]
    BoardNotFound {
        /// The board that was requested
        board_id: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Monday.com API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
