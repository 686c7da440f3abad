//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding
///
/// Callers of [`crate::GeocodingClient::geocode`] never see these; they exist
/// for logging and for [`crate::GeocodingClient::try_geocode`].
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Address was empty or whitespace only
    #[error("Address must not be empty")]
    EmptyAddress,

    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Geocoding request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Geocoding service answered with a non-success status
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Search returned no results
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
