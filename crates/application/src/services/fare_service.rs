//! Fare estimation service
//!
//! Runs one submission end to end: geocode both addresses, stop at the first
//! unresolved one, otherwise ask the prediction service once and build the
//! route preview. The calls are issued one after another; nothing is cached
//! or retried between submissions.

use std::fmt;
use std::sync::Arc;

use domain::{RoutePreview, TripRequest};
use tracing::{debug, info, instrument, warn};

use crate::outcome::FareOutcome;
use crate::ports::{FarePredictionPort, FareQuery, GeocodingPort};

/// Orchestrates geocoding and fare prediction for a trip request
#[derive(Clone)]
pub struct FareService {
    geocoder: Arc<dyn GeocodingPort>,
    predictor: Arc<dyn FarePredictionPort>,
}

impl fmt::Debug for FareService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FareService")
            .field("geocoder", &"<GeocodingPort>")
            .field("predictor", &"<FarePredictionPort>")
            .finish()
    }
}

impl FareService {
    /// Create a new fare service
    pub fn new(geocoder: Arc<dyn GeocodingPort>, predictor: Arc<dyn FarePredictionPort>) -> Self {
        Self {
            geocoder,
            predictor,
        }
    }

    /// Estimate the fare for a trip
    #[instrument(
        skip(self, request),
        fields(passengers = %request.passenger_count, pickup_at = %request.pickup_datetime)
    )]
    pub async fn estimate(&self, request: &TripRequest) -> FareOutcome {
        let pickup = self.geocoder.geocode(&request.pickup_address).await;
        let dropoff = self.geocoder.geocode(&request.dropoff_address).await;

        let Some(pickup) = pickup else {
            info!(address = %request.pickup_address, "Pickup address not found");
            return FareOutcome::PickupNotFound;
        };
        let Some(dropoff) = dropoff else {
            info!(address = %request.dropoff_address, "Dropoff address not found");
            return FareOutcome::DropoffNotFound;
        };

        debug!(%pickup, %dropoff, "Both addresses resolved");

        let query = FareQuery {
            pickup,
            dropoff,
            pickup_datetime: request.pickup_datetime,
            passenger_count: request.passenger_count,
        };

        match self.predictor.predict(&query).await {
            Ok(fare) => {
                info!(fare = fare.amount(), "Fare estimated");
                FareOutcome::Estimated {
                    fare,
                    preview: RoutePreview::new(pickup, dropoff),
                }
            },
            Err(e) => {
                warn!(error = %e, "Fare prediction failed");
                FareOutcome::PredictionFailed
            },
        }
    }
}
