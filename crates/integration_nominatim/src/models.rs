//! Raw Nominatim API payloads

use serde::Deserialize;

/// One element of the `/search` response array
///
/// Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
