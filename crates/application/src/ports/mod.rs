//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod fare_prediction_port;
mod geocoding_port;

pub use fare_prediction_port::{FarePredictionPort, FareQuery};
#[cfg(test)]
pub use fare_prediction_port::MockFarePredictionPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
