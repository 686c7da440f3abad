//! Domain layer for the TaxiFare predictor
//!
//! Holds the trip request that a form submission produces, the coordinate and
//! passenger-count value objects guarding its invariants, and the fare and
//! route-preview results that get rendered back to the user.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
