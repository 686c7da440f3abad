//! Two-point route preview shown under a successful estimate

use serde::Serialize;

use crate::value_objects::Coordinate;

/// Marker color for the pickup point (green)
pub const PICKUP_COLOR: &str = "#4DF527";
/// Marker color for the dropoff point (red)
pub const DROPOFF_COLOR: &str = "#FF0000";

/// One row of the map dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Hex color of the marker
    pub color: String,
}

impl MapPoint {
    fn new(coordinate: Coordinate, color: &str) -> Self {
        Self {
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
            color: color.to_string(),
        }
    }
}

/// Map dataset for a pickup/dropoff pair
///
/// Always exactly two rows: pickup first, dropoff second.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePreview {
    pub points: Vec<MapPoint>,
    /// Initial map zoom level
    pub zoom: u8,
    /// Marker size in map units
    pub point_size: u32,
}

impl RoutePreview {
    /// Default zoom for the preview map
    pub const ZOOM: u8 = 11;
    /// Default marker size
    pub const POINT_SIZE: u32 = 50;

    /// Build the preview for a resolved pickup and dropoff
    #[must_use]
    pub fn new(pickup: Coordinate, dropoff: Coordinate) -> Self {
        Self {
            points: vec![
                MapPoint::new(pickup, PICKUP_COLOR),
                MapPoint::new(dropoff, DROPOFF_COLOR),
            ],
            zoom: Self::ZOOM,
            point_size: Self::POINT_SIZE,
        }
    }

    /// Point the map should be centered on
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(&self) -> (f64, f64) {
        let n = self.points.len().max(1) as f64;
        let lat = self.points.iter().map(|p| p.latitude).sum::<f64>() / n;
        let lon = self.points.iter().map(|p| p.longitude).sum::<f64>() / n;
        (lat, lon)
    }
}
