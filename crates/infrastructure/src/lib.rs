//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the Nominatim and taxifare
//! HTTP clients, and provides configuration loading, tracing setup and the
//! HTML page templates.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, Environment, FormConfig, LogFormat, LoggingConfig, ServerConfig};
pub use telemetry::init_tracing;
pub use templates::{FarePageView, FormView, OutcomeView, TemplateEngine, TemplateError};
