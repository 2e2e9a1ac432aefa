//! Advisor error types.

use thiserror::Error;

/// Errors from a single advisor exchange.
///
/// None of these reach the shopper: the session logs them and answers with
/// [`FALLBACK_REPLY`](crate::FALLBACK_REPLY) instead.
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// The API key environment variable is unset or empty.
    #[error("API key not set: export {0}")]
    MissingApiKey(String),

    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Advisor service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The service answered without any text.
    #[error("Advisor service returned no text")]
    EmptyResponse,

    /// Request or response body could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;
