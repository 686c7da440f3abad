//! Application layer - Use cases and orchestration
//!
//! Defines the ports the fare pipeline talks to and the service that wires
//! one submission through geocoding, prediction and result rendering.

pub mod error;
pub mod outcome;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use outcome::FareOutcome;
pub use ports::*;
pub use services::*;
