//! Result of a single fare submission
//!
//! Each submission ends in exactly one of these states. Only a successful
//! estimate carries a route preview; failures never render a partial map.

use domain::{FareEstimate, RoutePreview};
use serde::Serialize;

/// Shown when the pickup address cannot be geocoded
pub const PICKUP_NOT_FOUND_MESSAGE: &str =
    "Could not locate the pickup address. Try to be more precise.";

/// Shown when the dropoff address cannot be geocoded
pub const DROPOFF_NOT_FOUND_MESSAGE: &str =
    "Could not locate the dropoff address. Try to be more precise.";

/// Shown when the prediction endpoint fails, marker included
pub const PREDICTION_API_ERROR_MESSAGE: &str =
    "❌ API error — please check the server or your parameters.";

/// Terminal display state of a submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FareOutcome {
    /// Pickup address could not be resolved
    PickupNotFound,
    /// Dropoff address could not be resolved
    DropoffNotFound,
    /// Prediction endpoint failed
    PredictionFailed,
    /// Fare estimated
    Estimated {
        /// Predicted fare
        fare: FareEstimate,
        /// Pickup and dropoff markers for the map
        preview: RoutePreview,
    },
}

impl FareOutcome {
    /// User-facing text for this outcome
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::PickupNotFound => PICKUP_NOT_FOUND_MESSAGE.to_string(),
            Self::DropoffNotFound => DROPOFF_NOT_FOUND_MESSAGE.to_string(),
            Self::PredictionFailed => PREDICTION_API_ERROR_MESSAGE.to_string(),
            Self::Estimated { fare, .. } => fare.display(),
        }
    }

    /// Stable machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::PickupNotFound => "pickup_not_found",
            Self::DropoffNotFound => "dropoff_not_found",
            Self::PredictionFailed => "prediction_api_error",
            Self::Estimated { .. } => "estimated",
        }
    }

    /// Whether a fare was estimated
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Estimated { .. })
    }

    /// The route preview, only present on success
    #[must_use]
    pub const fn preview(&self) -> Option<&RoutePreview> {
        match self {
            Self::Estimated { preview, .. } => Some(preview),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::Coordinate;

    use super::*;

    fn estimated(amount: f64) -> FareOutcome {
        FareOutcome::Estimated {
            fare: FareEstimate::new(amount),
            preview: RoutePreview::new(
                Coordinate::new(40.758, -73.985).unwrap(),
                Coordinate::new(40.641, -73.778).unwrap(),
            ),
        }
    }

    #[test]
    fn success_message_is_formatted_fare() {
        assert_eq!(estimated(23.5).message(), "$23.50");
    }

    #[test]
    fn failure_messages() {
        assert_eq!(
            FareOutcome::PickupNotFound.message(),
            PICKUP_NOT_FOUND_MESSAGE
        );
        assert_eq!(
            FareOutcome::DropoffNotFound.message(),
            DROPOFF_NOT_FOUND_MESSAGE
        );
        assert_eq!(
            FareOutcome::PredictionFailed.message(),
            PREDICTION_API_ERROR_MESSAGE
        );
    }

    #[test]
    fn failures_have_no_preview() {
        assert!(FareOutcome::PickupNotFound.preview().is_none());
        assert!(FareOutcome::DropoffNotFound.preview().is_none());
        assert!(FareOutcome::PredictionFailed.preview().is_none());
        assert!(!FareOutcome::PredictionFailed.is_success());
    }

    #[test]
    fn success_has_preview() {
        let outcome = estimated(52.0);
        assert!(outcome.is_success());
        assert_eq!(outcome.preview().map(|p| p.points.len()), Some(2));
    }

    #[test]
    fn prediction_failure_keeps_marker_and_wording() {
        assert_eq!(
            FareOutcome::PredictionFailed.message(),
            "❌ API error — please check the server or your parameters."
        );
        assert!(!FareOutcome::PickupNotFound.message().starts_with('❌'));
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(FareOutcome::PickupNotFound.code(), "pickup_not_found");
        assert_eq!(FareOutcome::DropoffNotFound.code(), "dropoff_not_found");
        assert_eq!(FareOutcome::PredictionFailed.code(), "prediction_api_error");
        assert_eq!(estimated(1.0).code(), "estimated");
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(FareOutcome::PickupNotFound).unwrap();
        assert_eq!(json["status"], "pickup_not_found");

        let json = serde_json::to_value(estimated(23.5)).unwrap();
        assert_eq!(json["status"], "estimated");
        assert_eq!(json["preview"]["points"][0]["color"], "#4DF527");
    }
}
