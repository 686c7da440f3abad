//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, openapi, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // HTML form
        .route("/", get(handlers::form::show_form))
        .route("/predict", post(handlers::form::submit_form))
        // Prediction API (v1)
        .route("/v1/predict", post(handlers::predict::predict_fare))
        // API documentation
        .merge(openapi::create_openapi_routes())
        // Attach state
        .with_state(state)
}
