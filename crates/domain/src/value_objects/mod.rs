//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod passenger_count;

pub use coordinate::Coordinate;
pub use passenger_count::PassengerCount;
