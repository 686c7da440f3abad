//! Passenger count value object

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

/// Number of passengers for a trip, always within [`Self::MIN`, `Self::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct PassengerCount(u8);

impl PassengerCount {
    /// Smallest accepted passenger count
    pub const MIN: u8 = 1;
    /// Largest accepted passenger count
    pub const MAX: u8 = 8;

    /// Create a passenger count
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPassengerCount` outside [1, 8].
    pub fn new(count: u32) -> Result<Self, DomainError> {
        u8::try_from(count)
            .ok()
            .filter(|c| (Self::MIN..=Self::MAX).contains(c))
            .map(Self)
            .ok_or(DomainError::InvalidPassengerCount(count))
    }

    /// Get the raw count
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for PassengerCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<PassengerCount> for u8 {
    fn from(count: PassengerCount) -> Self {
        count.0
    }
}

impl fmt::Display for PassengerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
