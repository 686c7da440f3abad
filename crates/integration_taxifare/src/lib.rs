//! Taxi fare prediction integration
//!
//! Client for a remote fare-prediction endpoint (by default the public
//! `taxifare.lewagon.ai` service). The endpoint takes pickup/dropoff
//! coordinates, a pickup timestamp and a passenger count as query parameters
//! and answers with `{"fare": <number>}`.
//!
//! Each call is a single attempt: no retries, and no timeout unless one is
//! configured explicitly.

mod client;
mod config;
mod error;
mod models;

pub use client::{FarePredictionClient, TaxiFareClient};
pub use config::TaxiFareConfig;
pub use error::FareApiError;
pub use models::{PredictionParams, PredictionResponse};
