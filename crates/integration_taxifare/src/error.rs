//! Fare prediction error types

use thiserror::Error;

/// Errors that can occur when calling the prediction endpoint
#[derive(Debug, Error)]
pub enum FareApiError {
    /// The request never got a response
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The endpoint answered with anything other than 200
    #[error("Unexpected status: HTTP {status}")]
    UnexpectedStatus {
        /// HTTP status code returned
        status: u16,
    },

    /// 200 response without a numeric `fare`
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
