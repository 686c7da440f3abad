//! HTML form handlers

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use domain::{PassengerCount, TripRequest};
use infrastructure::{FarePageView, FormConfig, FormView};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Longest accepted address, in characters
pub const MAX_ADDRESS_LEN: usize = 512;

/// Submitted form fields, kept as text so bad input can be echoed back
#[derive(Debug, Clone, Deserialize)]
pub struct FareForm {
    #[serde(default)]
    pub pickup_address: String,
    #[serde(default)]
    pub dropoff_address: String,
    #[serde(default)]
    pub pickup_date: String,
    #[serde(default)]
    pub pickup_time: String,
    #[serde(default)]
    pub passenger_count: String,
}

impl From<&FareForm> for FormView {
    fn from(form: &FareForm) -> Self {
        Self {
            pickup_address: form.pickup_address.clone(),
            dropoff_address: form.dropoff_address.clone(),
            pickup_date: form.pickup_date.clone(),
            pickup_time: form.pickup_time.clone(),
            passenger_count: form.passenger_count.clone(),
        }
    }
}

/// Initial form values: configured addresses, the given moment, one passenger
#[must_use]
pub fn default_form(config: &FormConfig, now: NaiveDateTime) -> FormView {
    FormView {
        pickup_address: config.default_pickup.clone(),
        dropoff_address: config.default_dropoff.clone(),
        pickup_date: now.format("%Y-%m-%d").to_string(),
        pickup_time: now.format("%H:%M").to_string(),
        passenger_count: PassengerCount::default().to_string(),
    }
}

/// Parse a time input, with or without seconds
fn parse_time(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .ok()
}

/// Turn submitted fields into a trip request
///
/// # Errors
///
/// Returns a user-facing message for the first invalid field.
pub fn parse_form(form: &FareForm) -> Result<TripRequest, String> {
    for (label, address) in [
        ("Pickup", &form.pickup_address),
        ("Dropoff", &form.dropoff_address),
    ] {
        if address.chars().count() > MAX_ADDRESS_LEN {
            return Err(format!(
                "{label} address must be at most {MAX_ADDRESS_LEN} characters."
            ));
        }
    }

    let date = NaiveDate::parse_from_str(form.pickup_date.trim(), "%Y-%m-%d")
        .map_err(|_| "Pickup date must be a valid date (YYYY-MM-DD).".to_string())?;
    let time = parse_time(&form.pickup_time)
        .ok_or_else(|| "Pickup time must be a valid time (HH:MM).".to_string())?;
    let passengers = form
        .passenger_count
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(|n| PassengerCount::new(n).ok())
        .ok_or_else(|| {
            format!(
                "Passengers must be a whole number between {} and {}.",
                PassengerCount::MIN,
                PassengerCount::MAX
            )
        })?;

    Ok(TripRequest::from_parts(
        form.pickup_address.clone(),
        form.dropoff_address.clone(),
        date,
        time,
        passengers,
    ))
}

/// Render the empty fare form
#[instrument(skip(state))]
pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let form = default_form(&state.config.form, Local::now().naive_local());
    let html = state.templates.render_fare_page(&FarePageView::new(form))?;
    Ok(Html(html))
}

/// Run the estimate for a submitted form and render the result
#[instrument(skip(state, form))]
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<FareForm>,
) -> Result<Response, ApiError> {
    let view = FarePageView::new(FormView::from(&form));

    let request = match parse_form(&form) {
        Ok(request) => request,
        Err(message) => {
            debug!(%message, "Rejected form input");
            let html = state
                .templates
                .render_fare_page(&view.with_validation_error(message))?;
            return Ok((StatusCode::BAD_REQUEST, Html(html)).into_response());
        },
    };

    let outcome = state.fare_service.estimate(&request).await;
    let html = state
        .templates
        .render_fare_page(&view.with_outcome(&outcome))?;
    Ok(Html(html).into_response())
}
