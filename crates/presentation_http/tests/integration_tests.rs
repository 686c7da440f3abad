//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use application::{
    FareService,
    error::ApplicationError,
    ports::{FarePredictionPort, FareQuery, GeocodingPort},
};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use domain::{Coordinate, FareEstimate};
use infrastructure::{AppConfig, TemplateEngine};
use presentation_http::{
    error::ErrorResponse, handlers::predict::PredictResponse, routes::create_router,
    state::AppState,
};
use serde_json::json;

const PICKUP: &str = "Times Square, New York";
const DROPOFF: &str = "JFK Airport, New York";

/// Geocoder resolving a fixed set of addresses
struct StubGeocoder {
    known: HashMap<&'static str, Coordinate>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl GeocodingPort for StubGeocoder {
    async fn geocode(&self, address: &str) -> Option<Coordinate> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.known.get(address).copied()
    }
}

/// Predictor returning a canned fare or failure
struct StubPredictor {
    fare: Option<f64>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl FarePredictionPort for StubPredictor {
    async fn predict(&self, _query: &FareQuery) -> Result<FareEstimate, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.fare
            .map(FareEstimate::new)
            .ok_or_else(|| ApplicationError::PredictionApi("HTTP 500".to_string()))
    }
}

struct Harness {
    server: TestServer,
    geocode_calls: Arc<AtomicUsize>,
    predict_calls: Arc<AtomicUsize>,
}

fn harness(known: &[&'static str], fare: Option<f64>) -> Harness {
    let coords = HashMap::from([
        (PICKUP, Coordinate::new(40.758, -73.985).expect("valid")),
        (DROPOFF, Coordinate::new(40.641, -73.778).expect("valid")),
    ]);
    let known = known
        .iter()
        .filter_map(|a| coords.get(a).map(|c| (*a, *c)))
        .collect();

    let geocode_calls = Arc::new(AtomicUsize::new(0));
    let predict_calls = Arc::new(AtomicUsize::new(0));

    let fare_service = FareService::new(
        Arc::new(StubGeocoder {
            known,
            calls: Arc::clone(&geocode_calls),
        }),
        Arc::new(StubPredictor {
            fare,
            calls: Arc::clone(&predict_calls),
        }),
    );

    let state = AppState {
        fare_service: Arc::new(fare_service),
        templates: TemplateEngine::new().expect("templates compile"),
        config: Arc::new(AppConfig::default()),
    };

    Harness {
        server: TestServer::new(create_router(state)).expect("Failed to create test server"),
        geocode_calls,
        predict_calls,
    }
}

fn form(passengers: &'static str) -> [(&'static str, &'static str); 5] {
    [
        ("pickup_address", PICKUP),
        ("dropoff_address", DROPOFF),
        ("pickup_date", "2026-10-18"),
        ("pickup_time", "09:30"),
        ("passenger_count", passengers),
    ]
}

fn api_body(passengers: u32) -> serde_json::Value {
    json!({
        "pickup_address": PICKUP,
        "dropoff_address": DROPOFF,
        "pickup_datetime": "2026-10-18 09:30:00",
        "passenger_count": passengers,
    })
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let h = harness(&[], None);
    let response = h.server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let h = harness(&[], None);
    let response = h.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    assert!(response.text().contains("/v1/predict"));
}

// ============================================================================
// HTML form
// ============================================================================

#[tokio::test]
async fn form_page_has_defaults() {
    let h = harness(&[], None);
    let response = h.server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("TaxiFare Predictor 3000"));
    assert!(html.contains(PICKUP));
    assert!(html.contains(DROPOFF));
    assert!(html.contains("Predict fare"));
    assert_eq!(h.geocode_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn form_submit_shows_fare_and_map() {
    let h = harness(&[PICKUP, DROPOFF], Some(52.0));
    let response = h.server.post("/predict").form(&form("1")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Estimated fare"));
    assert!(html.contains("$52.00"));
    assert!(html.contains("Route preview"));
    assert!(html.contains("#4DF527"));
    assert!(html.contains("#FF0000"));
    assert_eq!(h.predict_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn form_submit_reports_unknown_pickup() {
    let h = harness(&[DROPOFF], Some(52.0));
    let response = h.server.post("/predict").form(&form("1")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Could not locate the pickup address. Try to be more precise."));
    assert!(!html.contains("Route preview"));
    assert_eq!(h.predict_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn form_submit_reports_api_error() {
    let h = harness(&[PICKUP, DROPOFF], None);
    let response = h.server.post("/predict").form(&form("1")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("❌ API error — please check the server or your parameters."));
    assert!(!html.contains("Route preview"));
}

#[tokio::test]
async fn form_rejects_out_of_range_passengers_without_network() {
    let h = harness(&[PICKUP, DROPOFF], Some(52.0));
    let response = h.server.post("/predict").form(&form("9")).await;

    response.assert_status_bad_request();
    assert!(response.text().contains("between 1 and 8"));
    assert_eq!(h.geocode_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.predict_calls.load(Ordering::SeqCst), 0);
}

// ============================================================================
// JSON API
// ============================================================================

#[tokio::test]
async fn api_predicts_fare() {
    let h = harness(&[PICKUP, DROPOFF], Some(23.5));
    let response = h.server.post("/v1/predict").json(&api_body(2)).await;

    response.assert_status_ok();
    let body: PredictResponse = response.json();
    assert!((body.fare - 23.5).abs() < f64::EPSILON);
    assert_eq!(body.display, "$23.50");
    assert_eq!(body.map.zoom, 11);
    assert_eq!(body.map.point_size, 50);
    assert_eq!(body.map.points.len(), 2);
    assert_eq!(body.map.points[0].color, "#4DF527");
    assert_eq!(body.map.points[1].color, "#FF0000");
    assert_eq!(h.geocode_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn api_unknown_dropoff_is_unprocessable() {
    let h = harness(&[PICKUP], Some(23.5));
    let response = h.server.post("/v1/predict").json(&api_body(1)).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "dropoff_not_found");
    assert_eq!(
        body.error,
        "Could not locate the dropoff address. Try to be more precise."
    );
    assert_eq!(h.predict_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn api_both_unknown_reports_pickup() {
    let h = harness(&[], Some(23.5));
    let response = h.server.post("/v1/predict").json(&api_body(1)).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "pickup_not_found");
    assert_eq!(h.geocode_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn api_prediction_failure_is_bad_gateway() {
    let h = harness(&[PICKUP, DROPOFF], None);
    let response = h.server.post("/v1/predict").json(&api_body(1)).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "prediction_api_error");
    assert_eq!(
        body.error,
        "❌ API error — please check the server or your parameters."
    );
}

#[tokio::test]
async fn api_rejects_invalid_passenger_count() {
    let h = harness(&[PICKUP, DROPOFF], Some(23.5));
    let response = h.server.post("/v1/predict").json(&api_body(0)).await;

    response.assert_status_bad_request();
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "validation_error");
    assert_eq!(h.geocode_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn api_rejects_malformed_datetime() {
    let h = harness(&[PICKUP, DROPOFF], Some(23.5));
    let mut body = api_body(1);
    body["pickup_datetime"] = json!("tomorrow morning");
    let response = h.server.post("/v1/predict").json(&body).await;

    response.assert_status_bad_request();
    let body: ErrorResponse = response.json();
    assert_eq!(body.code, "validation_error");
    assert_eq!(h.geocode_calls.load(Ordering::SeqCst), 0);
}
