//! Defaults for the fare form.

use serde::{Deserialize, Serialize};

/// Initial values shown in the fare form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Pre-filled pickup address
    #[serde(default = "default_pickup")]
    pub default_pickup: String,

    /// Pre-filled dropoff address
    #[serde(default = "default_dropoff")]
    pub default_dropoff: String,
}

fn default_pickup() -> String {
    "Times Square, New York".to_string()
}

fn default_dropoff() -> String {
    "JFK Airport, New York".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_pickup: default_pickup(),
            default_dropoff: default_dropoff(),
        }
    }
}

impl FormConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_pickup.trim().is_empty() || self.default_dropoff.trim().is_empty() {
            return Err("form default addresses must not be empty".to_string());
        }
        Ok(())
    }
}
