//! Trip request entity
//!
//! Built fresh from the input form on every submission and dropped once the
//! fare has been rendered. Nothing about a request outlives it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::errors::DomainError;
use crate::value_objects::PassengerCount;

/// Wire format of the pickup timestamp sent to the prediction endpoint
pub const PICKUP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single fare estimation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripRequest {
    /// Free-text pickup address
    pub pickup_address: String,
    /// Free-text dropoff address
    pub dropoff_address: String,
    /// Pickup date and time of day, combined
    pub pickup_datetime: NaiveDateTime,
    /// Number of passengers (1-8)
    pub passenger_count: PassengerCount,
}

impl TripRequest {
    /// Create a new trip request
    #[must_use]
    pub fn new(
        pickup_address: impl Into<String>,
        dropoff_address: impl Into<String>,
        pickup_datetime: NaiveDateTime,
        passenger_count: PassengerCount,
    ) -> Self {
        Self {
            pickup_address: pickup_address.into(),
            dropoff_address: dropoff_address.into(),
            pickup_datetime,
            passenger_count,
        }
    }

    /// Create a trip request from separate date and time pickers
    #[must_use]
    pub fn from_parts(
        pickup_address: impl Into<String>,
        dropoff_address: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        passenger_count: PassengerCount,
    ) -> Self {
        Self::new(
            pickup_address,
            dropoff_address,
            date.and_time(time),
            passenger_count,
        )
    }

    /// Pickup timestamp as sent to the prediction endpoint
    #[must_use]
    pub fn pickup_datetime_param(&self) -> String {
        self.pickup_datetime
            .format(PICKUP_DATETIME_FORMAT)
            .to_string()
    }

    /// Parse a pickup timestamp in [`PICKUP_DATETIME_FORMAT`]
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if the input does not match.
    pub fn parse_pickup_datetime(input: &str) -> Result<NaiveDateTime, DomainError> {
        NaiveDateTime::parse_from_str(input.trim(), PICKUP_DATETIME_FORMAT)
            .map_err(|e| DomainError::InvalidDateTime(format!("{input}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn from_parts_combines_date_and_time() {
        let time = NaiveTime::from_hms_opt(18, 5, 0).unwrap();
        let request = TripRequest::from_parts(
            "Times Square, New York",
            "JFK Airport, New York",
            sample_date(),
            time,
            PassengerCount::default(),
        );

        assert_eq!(request.pickup_datetime.date(), sample_date());
        assert_eq!(request.pickup_datetime.time(), time);
        assert_eq!(request.pickup_address, "Times Square, New York");
    }

    #[test]
    fn datetime_param_uses_wire_format() {
        let time = NaiveTime::from_hms_opt(7, 3, 9).unwrap();
        let request =
            TripRequest::from_parts("a", "b", sample_date(), time, PassengerCount::default());
        assert_eq!(request.pickup_datetime_param(), "2026-03-14 07:03:09");
    }

    #[test]
    fn parse_pickup_datetime_roundtrips_wire_format() {
        let parsed = TripRequest::parse_pickup_datetime("2026-03-14 07:03:09").unwrap();
        assert_eq!(parsed.format(PICKUP_DATETIME_FORMAT).to_string(), "2026-03-14 07:03:09");
    }

    #[test]
    fn parse_pickup_datetime_rejects_iso_t_separator() {
        let err = TripRequest::parse_pickup_datetime("2026-03-14T07:03:09").unwrap_err();
        assert!(matches!(err, DomainError::InvalidDateTime(_)));
    }
}
