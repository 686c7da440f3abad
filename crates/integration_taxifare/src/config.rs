//! Prediction service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the fare prediction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxiFareConfig {
    /// Base URL of the prediction service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the prediction endpoint
    #[serde(default = "default_predict_path")]
    pub predict_path: String,

    /// Request timeout in seconds (unset = wait indefinitely)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://taxifare.lewagon.ai".to_string()
}

fn default_predict_path() -> String {
    "/predict".to_string()
}

impl Default for TaxiFareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            predict_path: default_predict_path(),
            timeout_secs: None,
        }
    }
}

impl TaxiFareConfig {
    /// Create a configuration pointing at a local mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Full URL of the prediction endpoint
    #[must_use]
    pub fn predict_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.predict_path.trim_start_matches('/')
        )
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("prediction.base_url must not be empty".to_string());
        }

        if self.timeout_secs == Some(0) {
            return Err("prediction.timeout_secs must be greater than 0 when set".to_string());
        }

        Ok(())
    }
}
