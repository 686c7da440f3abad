//! Geocoding adapter - Implements GeocodingPort using integration_nominatim

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::Coordinate;
use integration_nominatim::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
use tracing::instrument;

/// Adapter for forward geocoding via Nominatim
pub struct NominatimGeocodingAdapter {
    client: Box<dyn GeocodingClient>,
}

impl std::fmt::Debug for NominatimGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominatimGeocodingAdapter")
            .field("client", &"<GeocodingClient>")
            .finish()
    }
}

impl NominatimGeocodingAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Wrap an existing geocoding client
    pub fn new(client: impl GeocodingClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }
}

#[async_trait]
impl GeocodingPort for NominatimGeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Option<Coordinate> {
        self.client.geocode(address).await
    }
}
