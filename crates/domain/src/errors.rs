//! Domain-level errors

use thiserror::Error;

use crate::value_objects::PassengerCount;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Passenger count outside the accepted range
    #[error(
        "Invalid passenger count: {0} (must be between {min} and {max})",
        min = PassengerCount::MIN,
        max = PassengerCount::MAX
    )]
    InvalidPassengerCount(u32),

    /// Latitude/longitude not finite or out of range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}
