//! Prediction request and response payloads

use serde::{Deserialize, Serialize};

/// Query parameters of a prediction request, in wire order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionParams {
    /// `YYYY-MM-DD HH:MM:SS`
    pub pickup_datetime: String,
    pub pickup_longitude: f64,
    pub pickup_latitude: f64,
    pub dropoff_longitude: f64,
    pub dropoff_latitude: f64,
    pub passenger_count: u8,
}

/// Body of a successful prediction
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub fare: f64,
}
