//! Fare prediction adapter - Implements FarePredictionPort using integration_taxifare

use application::error::ApplicationError;
use application::ports::{FarePredictionPort, FareQuery};
use async_trait::async_trait;
use domain::FareEstimate;
use integration_taxifare::{
    FareApiError, FarePredictionClient, PredictionParams, TaxiFareClient, TaxiFareConfig,
};
use tracing::{debug, instrument};

/// Adapter for the remote taxifare prediction endpoint
pub struct TaxiFarePredictionAdapter {
    client: Box<dyn FarePredictionClient>,
}

impl std::fmt::Debug for TaxiFarePredictionAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxiFarePredictionAdapter")
            .field("client", &"<FarePredictionClient>")
            .finish()
    }
}

impl TaxiFarePredictionAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &TaxiFareConfig) -> Result<Self, ApplicationError> {
        let client =
            TaxiFareClient::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Wrap an existing prediction client
    pub fn new(client: impl FarePredictionClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Convert a fare query into wire parameters
    fn to_params(query: &FareQuery) -> PredictionParams {
        PredictionParams {
            pickup_datetime: query.pickup_datetime_param(),
            pickup_longitude: query.pickup.longitude(),
            pickup_latitude: query.pickup.latitude(),
            dropoff_longitude: query.dropoff.longitude(),
            dropoff_latitude: query.dropoff.latitude(),
            passenger_count: query.passenger_count.get(),
        }
    }

    /// Map integration error to application error
    fn map_error(err: FareApiError) -> ApplicationError {
        match err {
            FareApiError::ConnectionFailed(e) => ApplicationError::PredictionApi(e),
            FareApiError::UnexpectedStatus { status } => {
                ApplicationError::PredictionApi(format!("HTTP {status}"))
            },
            FareApiError::MalformedResponse(e) => ApplicationError::MalformedResponse(e),
            FareApiError::ConfigurationError(e) => ApplicationError::Configuration(e),
        }
    }
}

#[async_trait]
impl FarePredictionPort for TaxiFarePredictionAdapter {
    #[instrument(skip(self, query))]
    async fn predict(&self, query: &FareQuery) -> Result<FareEstimate, ApplicationError> {
        let params = Self::to_params(query);
        debug!(?params, "Requesting fare prediction");

        self.client
            .predict(&params)
            .await
            .map(FareEstimate::new)
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain::{Coordinate, PassengerCount};

    use super::*;

    fn query() -> FareQuery {
        FareQuery {
            pickup: Coordinate::new(40.758, -73.985).unwrap(),
            dropoff: Coordinate::new(40.641, -73.778).unwrap(),
            pickup_datetime: NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            passenger_count: PassengerCount::new(3).unwrap(),
        }
    }

    #[test]
    fn params_use_wire_names_and_format() {
        let params = TaxiFarePredictionAdapter::to_params(&query());
        assert_eq!(params.pickup_datetime, "2026-10-18 09:30:00");
        assert!((params.pickup_longitude - (-73.985)).abs() < f64::EPSILON);
        assert!((params.pickup_latitude - 40.758).abs() < f64::EPSILON);
        assert!((params.dropoff_longitude - (-73.778)).abs() < f64::EPSILON);
        assert!((params.dropoff_latitude - 40.641).abs() < f64::EPSILON);
        assert_eq!(params.passenger_count, 3);
    }

    #[test]
    fn status_errors_map_to_prediction_api() {
        let err = TaxiFarePredictionAdapter::map_error(FareApiError::UnexpectedStatus {
            status: 404,
        });
        assert!(matches!(err, ApplicationError::PredictionApi(ref m) if m == "HTTP 404"));
    }

    #[test]
    fn malformed_body_maps_to_malformed_response() {
        let err = TaxiFarePredictionAdapter::map_error(FareApiError::MalformedResponse(
            "missing field `fare`".into(),
        ));
        assert!(matches!(err, ApplicationError::MalformedResponse(_)));
    }

    #[test]
    fn connection_errors_map_to_prediction_api() {
        let err =
            TaxiFarePredictionAdapter::map_error(FareApiError::ConnectionFailed("refused".into()));
        assert!(matches!(err, ApplicationError::PredictionApi(ref m) if m == "refused"));
    }
}
