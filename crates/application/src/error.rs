//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Prediction endpoint unreachable or answered with a non-200 status
    #[error("Prediction API error: {0}")]
    PredictionApi(String),

    /// Prediction endpoint answered 200 without a usable fare
    #[error("Malformed prediction response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_api_message() {
        let err = ApplicationError::PredictionApi("HTTP 500".to_string());
        assert_eq!(err.to_string(), "Prediction API error: HTTP 500");
    }

    #[test]
    fn malformed_response_message() {
        let err = ApplicationError::MalformedResponse("missing field `fare`".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed prediction response: missing field `fare`"
        );
    }
}
