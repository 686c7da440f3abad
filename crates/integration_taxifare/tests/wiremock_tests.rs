//! Integration tests for the prediction client (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_taxifare::{
    FareApiError, FarePredictionClient, PredictionParams, TaxiFareClient, TaxiFareConfig,
};

fn client_for(server: &MockServer) -> TaxiFareClient {
    TaxiFareClient::new(&TaxiFareConfig::for_testing(server.uri())).unwrap()
}

fn times_square_to_jfk() -> PredictionParams {
    PredictionParams {
        pickup_datetime: "2026-10-18 09:30:00".to_string(),
        pickup_longitude: -73.985,
        pickup_latitude: 40.758,
        dropoff_longitude: -73.778,
        dropoff_latitude: 40.641,
        passenger_count: 1,
    }
}

#[tokio::test]
async fn test_predict_success_sends_all_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/predict"))
        .and(query_param("pickup_datetime", "2026-10-18 09:30:00"))
        .and(query_param("pickup_longitude", "-73.985"))
        .and(query_param("pickup_latitude", "40.758"))
        .and(query_param("dropoff_longitude", "-73.778"))
        .and(query_param("dropoff_latitude", "40.641"))
        .and(query_param("passenger_count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"fare": 52.0}"#))
        .expect(1)
        .mount(&server)
        .await;

    let fare = client_for(&server)
        .predict(&times_square_to_jfk())
        .await
        .unwrap();

    assert!((fare - 52.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_predict_fractional_fare() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"fare": 23.5}"#))
        .mount(&server)
        .await;

    let fare = client_for(&server)
        .predict(&times_square_to_jfk())
        .await
        .unwrap();

    assert!((fare - 23.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_predict_not_found_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict(&times_square_to_jfk())
        .await
        .unwrap_err();

    assert!(matches!(err, FareApiError::UnexpectedStatus { status: 404 }));
}

#[tokio::test]
async fn test_predict_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).predict(&times_square_to_jfk()).await;

    assert!(matches!(
        result.unwrap_err(),
        FareApiError::UnexpectedStatus { status: 500 }
    ));
}

#[tokio::test]
async fn test_predict_other_success_status_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(202).set_body_string(r#"{"fare": 10.0}"#))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict(&times_square_to_jfk())
        .await
        .unwrap_err();

    assert!(matches!(err, FareApiError::UnexpectedStatus { status: 202 }));
}

#[tokio::test]
async fn test_predict_missing_fare_fails_closed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"prediction": 12.0}"#))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict(&times_square_to_jfk())
        .await
        .unwrap_err();

    assert!(matches!(err, FareApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_predict_non_json_body_fails_closed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Internal hiccup"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .predict(&times_square_to_jfk())
        .await
        .unwrap_err();

    assert!(matches!(err, FareApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_predict_connection_refused() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = TaxiFareClient::new(&TaxiFareConfig::for_testing(uri)).unwrap();
    let err = client.predict(&times_square_to_jfk()).await.unwrap_err();

    assert!(matches!(err, FareApiError::ConnectionFailed(_)));
}
