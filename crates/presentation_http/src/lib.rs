//! TaxiFare HTTP presentation layer
//!
//! Serves the fare form, the JSON prediction API and its OpenAPI document.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use middleware::{ValidatedJson, ValidationError};
pub use routes::create_router;
pub use state::AppState;
