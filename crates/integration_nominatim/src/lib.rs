//! Nominatim geocoding integration
//!
//! Converts free-form address strings to coordinates using the
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org) search API.
//!
//! # Architecture
//!
//! [`GeocodingClient`] defines the interface, implemented by
//! [`NominatimGeocodingClient`]. Failures are typed internally as
//! [`GeocodingError`] (see [`GeocodingClient::try_geocode`]), while
//! [`GeocodingClient::geocode`] collapses every failure into `None`.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_nominatim::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! if let Some(coord) = client.geocode("Times Square, New York").await {
//!     println!("{coord}");
//! }
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, NominatimGeocodingClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
