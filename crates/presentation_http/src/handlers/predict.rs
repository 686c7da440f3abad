//! Fare prediction API handler

use application::FareOutcome;
use axum::{Json, extract::State};
use domain::{PassengerCount, RoutePreview, TripRequest};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

const fn default_passenger_count() -> u32 {
    1
}

/// Fare prediction request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PredictRequest {
    /// Free-text pickup address
    #[validate(length(max = 512, message = "must be at most 512 characters"))]
    #[schema(example = "Times Square, New York")]
    pub pickup_address: String,

    /// Free-text dropoff address
    #[validate(length(max = 512, message = "must be at most 512 characters"))]
    #[schema(example = "JFK Airport, New York")]
    pub dropoff_address: String,

    /// Pickup time as `YYYY-MM-DD HH:MM:SS`
    #[schema(example = "2026-10-18 09:30:00")]
    pub pickup_datetime: String,

    /// Number of passengers
    #[serde(default = "default_passenger_count")]
    #[validate(range(min = 1, max = 8, message = "must be between 1 and 8"))]
    #[schema(minimum = 1, maximum = 8, default = 1)]
    pub passenger_count: u32,
}

impl PredictRequest {
    /// Convert into a trip request
    ///
    /// # Errors
    ///
    /// Returns a validation error if the datetime or passenger count is invalid.
    pub fn into_trip(self) -> Result<TripRequest, ApiError> {
        let pickup_datetime = TripRequest::parse_pickup_datetime(&self.pickup_datetime)?;
        let passenger_count = PassengerCount::new(self.passenger_count)?;
        Ok(TripRequest::new(
            self.pickup_address,
            self.dropoff_address,
            pickup_datetime,
            passenger_count,
        ))
    }
}

/// One map marker
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapPointResponse {
    pub latitude: f64,
    pub longitude: f64,
    /// Marker colour as `#RRGGBB`
    pub color: String,
}

/// Two-point route preview
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapResponse {
    /// Initial zoom level
    pub zoom: u8,
    /// Marker radius in meters
    pub point_size: u32,
    /// Pickup first, then dropoff
    pub points: Vec<MapPointResponse>,
}

impl From<&RoutePreview> for MapResponse {
    fn from(preview: &RoutePreview) -> Self {
        Self {
            zoom: preview.zoom,
            point_size: preview.point_size,
            points: preview
                .points
                .iter()
                .map(|p| MapPointResponse {
                    latitude: p.latitude,
                    longitude: p.longitude,
                    color: p.color.clone(),
                })
                .collect(),
        }
    }
}

/// Fare prediction response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictResponse {
    /// Predicted fare
    pub fare: f64,
    /// Fare formatted for display, e.g. `$23.50`
    pub display: String,
    /// Route preview
    pub map: MapResponse,
}

/// Predict the fare for a trip
#[utoipa::path(
    post,
    path = "/v1/predict",
    tag = "predict",
    request_body = PredictRequest,
    responses(
        (status = 200, description = "Fare estimated", body = PredictResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 422, description = "Address could not be located", body = crate::error::ErrorResponse),
        (status = 502, description = "Prediction service failed", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn predict_fare(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PredictRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let trip = request.into_trip()?;
    let outcome = state.fare_service.estimate(&trip).await;

    let FareOutcome::Estimated { fare, preview } = &outcome else {
        return Err(ApiError::from_outcome(&outcome)
            .unwrap_or_else(|| ApiError::Internal("unmapped fare outcome".to_string())));
    };

    info!(fare = fare.amount(), "Fare estimated");
    Ok(Json(PredictResponse {
        fare: fare.amount(),
        display: fare.display(),
        map: MapResponse::from(preview),
    }))
}
