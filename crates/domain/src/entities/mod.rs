//! Domain entities - request-scoped trip data and its results

mod fare_estimate;
mod route_preview;
mod trip_request;

pub use fare_estimate::FareEstimate;
pub use route_preview::{DROPOFF_COLOR, MapPoint, PICKUP_COLOR, RoutePreview};
pub use trip_request::{PICKUP_DATETIME_FORMAT, TripRequest};
