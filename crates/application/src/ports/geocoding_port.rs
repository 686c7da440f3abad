//! Geocoding port
//!
//! Resolves a free-text address to a coordinate.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

/// Port for forward geocoding
///
/// Every failure mode (blank input, no match, bad payload, network error or
/// timeout) is reported the same way: `None`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve an address to a coordinate, or `None` if it cannot be located
    async fn geocode(&self, address: &str) -> Option<Coordinate>;
}
