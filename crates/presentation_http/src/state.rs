//! Application state shared across handlers

use std::sync::Arc;

use application::FareService;
use infrastructure::{AppConfig, TemplateEngine};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Fare estimation pipeline
    pub fare_service: Arc<FareService>,
    /// HTML page renderer
    pub templates: TemplateEngine,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
