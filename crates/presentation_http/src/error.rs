//! API error handling
//!
//! Every failure is returned as an [`ErrorResponse`] with a stable `code`.
//! Internal error details are only exposed outside production.

use std::sync::atomic::{AtomicBool, Ordering};

use application::FareOutcome;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use infrastructure::TemplateError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Global flag to control error detail exposure
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details are included in responses
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{message}")]
    AddressNotFound {
        code: &'static str,
        message: String,
    },

    #[error("{0}")]
    PredictionFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Error for a pipeline outcome that produced no fare
    ///
    /// Returns `None` for a successful estimate.
    #[must_use]
    pub fn from_outcome(outcome: &FareOutcome) -> Option<Self> {
        match outcome {
            FareOutcome::PickupNotFound | FareOutcome::DropoffNotFound => {
                Some(Self::AddressNotFound {
                    code: outcome.code(),
                    message: outcome.message(),
                })
            },
            FareOutcome::PredictionFailed => Some(Self::PredictionFailed(outcome.message())),
            FareOutcome::Estimated { .. } => None,
        }
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AddressNotFound { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PredictionFailed(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            Self::Validation(msg) => ("validation_error", msg, None),
            Self::AddressNotFound { code, message } => (code, message, None),
            Self::PredictionFailed(msg) => ("prediction_api_error", msg, None),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                let details = should_expose_details().then_some(msg);
                (
                    "internal_error",
                    "An internal error occurred".to_string(),
                    details,
                )
            },
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        Self::Internal(err.to_string())
    }
}
