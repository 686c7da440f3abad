//! OpenAPI documentation module
//!
//! Describes the JSON endpoints and serves them through Swagger UI.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// Path of the generated OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI documentation for the TaxiFare API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TaxiFare Predictor API",
        version = "0.1.0",
        description = "Geocodes pickup and dropoff addresses and predicts the taxi fare between them",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "predict", description = "Fare prediction")
    ),
    paths(
        handlers::health::health_check,
        handlers::predict::predict_fare,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::predict::PredictRequest,
            handlers::predict::PredictResponse,
            handlers::predict::MapResponse,
            handlers::predict::MapPointResponse,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Create OpenAPI documentation routes
///
/// Adds the following routes:
/// - `/api-docs/openapi.json` - OpenAPI document
/// - `/swagger-ui/*` - Swagger UI interactive documentation
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}
