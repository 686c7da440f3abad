//! Nominatim geocoding client

use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::models::NominatimResult;

/// Trait for forward-geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve an address, keeping the reason for any failure
    async fn try_geocode(&self, address: &str) -> Result<Coordinate, GeocodingError>;

    /// Resolve an address, collapsing every failure into `None`
    async fn geocode(&self, address: &str) -> Option<Coordinate> {
        match self.try_geocode(address).await {
            Ok(coordinate) => Some(coordinate),
            Err(GeocodingError::EmptyAddress | GeocodingError::AddressNotFound(_)) => None,
            Err(e) => {
                warn!(error = %e, "Geocoding failed");
                None
            },
        }
    }
}

/// Nominatim-based geocoding client
///
/// Issues exactly one `GET /search` per lookup, without caching or retries.
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    fn parse_coordinate(result: &NominatimResult) -> Result<Coordinate, GeocodingError> {
        let lat: f64 = result
            .lat
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid latitude: {}", result.lat)))?;
        let lon: f64 = result
            .lon
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid longitude: {}", result.lon)))?;

        Coordinate::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn try_geocode(&self, address: &str) -> Result<Coordinate, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            debug!("Skipping geocoding of blank address");
            return Err(GeocodingError::EmptyAddress);
        }

        let params = [("q", address), ("format", "json"), ("limit", "1")];

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(self.search_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let result = results
            .first()
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        let coordinate = Self::parse_coordinate(result)?;
        debug!(
            %address,
            lat = coordinate.latitude(),
            lon = coordinate.longitude(),
            matched = result.display_name.as_deref().unwrap_or_default(),
            "Geocoded address"
        );

        Ok(coordinate)
    }
}
