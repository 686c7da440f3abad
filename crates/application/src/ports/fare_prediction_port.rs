//! Fare prediction port
//!
//! Sends resolved trip parameters to a remote prediction service.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use domain::{Coordinate, FareEstimate, PassengerCount, PICKUP_DATETIME_FORMAT};
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::error::ApplicationError;

/// Trip parameters once both endpoints have been geocoded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareQuery {
    pub pickup: Coordinate,
    pub dropoff: Coordinate,
    pub pickup_datetime: NaiveDateTime,
    pub passenger_count: PassengerCount,
}

impl FareQuery {
    /// Pickup timestamp in the prediction endpoint's format
    #[must_use]
    pub fn pickup_datetime_param(&self) -> String {
        self.pickup_datetime
            .format(PICKUP_DATETIME_FORMAT)
            .to_string()
    }
}

/// Port for fare prediction
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FarePredictionPort: Send + Sync {
    /// Request a single fare prediction. One attempt, no retry.
    async fn predict(&self, query: &FareQuery) -> Result<FareEstimate, ApplicationError>;
}
