//! TaxiFare HTTP Server
//!
//! Main entry point for the fare form and prediction API.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use application::FareService;
use infrastructure::{
    AppConfig, NominatimGeocodingAdapter, TaxiFarePredictionAdapter, TemplateEngine, init_tracing,
};
use presentation_http::{
    error::set_expose_internal_errors,
    routes,
    server::{ShutdownOutcome, serve_until},
    state::AppState,
};
use tokio::{net::TcpListener, signal};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config.logging).context("failed to initialize tracing")?;

    info!("🚕 TaxiFare Predictor v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    if let Err(errors) = config.validate() {
        anyhow::bail!("invalid configuration: {}", errors.join("; "));
    }

    info!(
        environment = %config.environment,
        geocoding = %config.geocoding.base_url,
        prediction = %config.prediction.predict_url(),
        "Configuration loaded"
    );

    set_expose_internal_errors(!config.is_production());

    // Wire the pipeline
    let geocoder = NominatimGeocodingAdapter::with_config(&config.geocoding)?;
    let predictor = TaxiFarePredictionAdapter::with_config(&config.prediction)?;
    let fare_service = FareService::new(Arc::new(geocoder), Arc::new(predictor));

    let state = AppState {
        fare_service: Arc::new(fare_service),
        templates: TemplateEngine::new()?,
        config: Arc::new(config.clone()),
    };

    // Add middleware (order matters: first added = innermost)
    let app = routes::create_router(state)
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size_bytes))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 API docs: http://{}/swagger-ui", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);

    match serve_until(listener, app, shutdown_signal(), shutdown_timeout).await? {
        ShutdownOutcome::Drained => info!("👋 Server shutdown complete"),
        ShutdownOutcome::TimedOut => warn!("👋 Server shutdown forced after timeout"),
    }
    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
