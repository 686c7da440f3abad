//! Application configuration
//!
//! Values are layered: built-in defaults, then an optional `config.toml`,
//! then `TAXIFARE_` environment variables (nested keys separated by `__`,
//! e.g. `TAXIFARE_SERVER__PORT=8080`).

mod form;
mod logging;
mod server;

use std::fmt;

pub use form::FormConfig;
use integration_nominatim::NominatimConfig;
use integration_taxifare::TaxiFareConfig;
pub use logging::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;

/// Prefix of environment variables read by [`AppConfig::load`]
const ENV_PREFIX: &str = "TAXIFARE";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Form defaults shown on the landing page
    #[serde(default)]
    pub form: FormConfig,

    /// Address geocoding service
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Fare prediction service
    #[serde(default)]
    pub prediction: TaxiFareConfig,

    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_layered("config", ENV_PREFIX)
    }

    /// Layer the named file (extension optional) under variables carrying `env_prefix`
    fn load_layered(file: &str, env_prefix: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from a TOML string, ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or has wrong value types.
    pub fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Check all sections, collecting every problem found
    ///
    /// # Errors
    ///
    /// Returns the list of validation messages if any section is invalid.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let errors: Vec<String> = [
            self.server.validate(),
            self.form.validate(),
            self.geocoding.validate(),
            self.prediction.validate(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Whether running in production
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
