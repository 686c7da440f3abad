//! Fare prediction HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::config::TaxiFareConfig;
use crate::error::FareApiError;
use crate::models::{PredictionParams, PredictionResponse};

/// Trait for fare prediction clients
#[async_trait]
pub trait FarePredictionClient: Send + Sync {
    /// Request a fare for the given trip parameters
    async fn predict(&self, params: &PredictionParams) -> Result<f64, FareApiError>;
}

/// HTTP client for the taxifare prediction API
#[derive(Debug)]
pub struct TaxiFareClient {
    client: Client,
    predict_url: String,
}

impl TaxiFareClient {
    /// Create a new prediction client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TaxiFareConfig) -> Result<Self, FareApiError> {
        config
            .validate()
            .map_err(FareApiError::ConfigurationError)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| FareApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            predict_url: config.predict_url(),
        })
    }
}

#[async_trait]
impl FarePredictionClient for TaxiFareClient {
    #[instrument(skip(self), fields(url = %self.predict_url))]
    async fn predict(&self, params: &PredictionParams) -> Result<f64, FareApiError> {
        let response = self
            .client
            .get(&self.predict_url)
            .query(params)
            .send()
            .await
            .map_err(|e| FareApiError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FareApiError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FareApiError::ConnectionFailed(e.to_string()))?;

        let parsed: PredictionResponse = serde_json::from_str(&body)
            .map_err(|e| FareApiError::MalformedResponse(e.to_string()))?;

        debug!(fare = parsed.fare, "Prediction received");
        Ok(parsed.fare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_config() {
        let config = TaxiFareConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            TaxiFareClient::new(&config),
            Err(FareApiError::ConfigurationError(_))
        ));
    }

    #[test]
    fn default_client_targets_public_endpoint() {
        let client = TaxiFareClient::new(&TaxiFareConfig::default()).unwrap();
        assert_eq!(client.predict_url, "https://taxifare.lewagon.ai/predict");
    }
}
