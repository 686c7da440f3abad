//! TaxiFare CLI
//!
//! Runs fare estimates from the terminal and checks a running server.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::{error::Error, process::ExitCode, sync::Arc};

use application::{FareOutcome, FareService};
use chrono::{Local, NaiveDate, NaiveTime};
use anyhow::Context;
use clap::{Parser, Subcommand};
use domain::{PassengerCount, TripRequest};
use infrastructure::{
    AppConfig, LoggingConfig, NominatimGeocodingAdapter, TaxiFarePredictionAdapter, init_tracing,
};
use tracing::{debug, warn};

/// TaxiFare CLI
#[derive(Debug, Parser)]
#[command(name = "taxifare-cli")]
#[command(author, version, about = "TaxiFare Predictor CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Estimate the fare between two addresses
    ///
    /// Example: taxifare-cli predict --pickup "Times Square, New York" --dropoff "JFK Airport"
    Predict {
        /// Pickup address (default: configured form default)
        #[arg(long)]
        pickup: Option<String>,

        /// Dropoff address (default: configured form default)
        #[arg(long)]
        dropoff: Option<String>,

        /// Pickup date as YYYY-MM-DD (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Pickup time as HH:MM or HH:MM:SS (default: now)
        #[arg(long, value_parser = parse_time)]
        time: Option<NaiveTime>,

        /// Number of passengers
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=8))]
        passengers: u32,
    },

    /// Check that a server is up
    Health {
        /// Server URL
        #[arg(short, long, env = "TAXIFARE_URL", default_value = "http://localhost:3000")]
        url: String,
    },
}

/// Get log filter from verbosity level
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Format endpoint URL
fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_time(input: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .map_err(|e| format!("expected HH:MM or HH:MM:SS: {e}"))
}

/// Render an outcome as the lines printed to the terminal
fn outcome_lines(outcome: &FareOutcome) -> Vec<String> {
    let mut lines = Vec::new();
    match outcome {
        FareOutcome::Estimated { fare, preview } => {
            lines.push(format!("💰 Estimated fare: {fare}"));
            lines.push("Route preview (🟢 pickup | 🔴 dropoff):".to_string());
            lines.push(format!("{:>12} {:>12}  color", "latitude", "longitude"));
            for point in &preview.points {
                lines.push(format!(
                    "{:>12.6} {:>12.6}  {}",
                    point.latitude, point.longitude, point.color
                ));
            }
        },
        _ => lines.push(outcome.message()),
    }
    lines
}

/// Configuration for an estimate; unreadable or invalid settings abort the run
fn predict_config<E>(loaded: Result<AppConfig, E>) -> anyhow::Result<AppConfig>
where
    E: Error + Send + Sync + 'static,
{
    let config = loaded
        .context("failed to load configuration from config.toml or TAXIFARE_* variables")?;
    if let Err(errors) = config.validate() {
        anyhow::bail!("invalid configuration: {}", errors.join("; "));
    }
    Ok(config)
}

async fn run_predict(
    config: &AppConfig,
    request: &TripRequest,
) -> anyhow::Result<FareOutcome> {
    let geocoder = NominatimGeocodingAdapter::with_config(&config.geocoding)?;
    let predictor = TaxiFarePredictionAdapter::with_config(&config.prediction)?;
    let service = FareService::new(Arc::new(geocoder), Arc::new(predictor));

    debug!(?request, "Running estimate");
    Ok(service.estimate(request).await)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let loaded = AppConfig::load();

    // Set up logging based on verbosity
    let logging = LoggingConfig {
        format: loaded
            .as_ref()
            .map(|config| config.logging.format)
            .unwrap_or_default(),
        filter: log_filter_from_verbosity(cli.verbose).to_string(),
    };
    init_tracing(&logging)?;

    match cli.command {
        Commands::Predict {
            pickup,
            dropoff,
            date,
            time,
            passengers,
        } => {
            let config = predict_config(loaded)?;

            let now = Local::now().naive_local();
            let request = TripRequest::from_parts(
                pickup.unwrap_or_else(|| config.form.default_pickup.clone()),
                dropoff.unwrap_or_else(|| config.form.default_dropoff.clone()),
                date.unwrap_or_else(|| now.date()),
                time.unwrap_or_else(|| now.time()),
                PassengerCount::new(passengers)?,
            );

            println!(
                "🚕 {} → {} at {} ({} passenger(s))",
                request.pickup_address,
                request.dropoff_address,
                request.pickup_datetime_param(),
                request.passenger_count
            );

            let outcome = run_predict(&config, &request).await?;
            let lines = outcome_lines(&outcome);
            if outcome.is_success() {
                lines.iter().for_each(|line| println!("{line}"));
                Ok(ExitCode::SUCCESS)
            } else {
                lines.iter().for_each(|line| eprintln!("{line}"));
                Ok(ExitCode::FAILURE)
            }
        },

        Commands::Health { url } => {
            if let Err(e) = &loaded {
                warn!("Ignoring unreadable configuration: {}", e);
            }
            let response = reqwest::get(endpoint_url(&url, "/health")).await?;
            let status = response.status();
            let body = response.json::<serde_json::Value>().await?;

            println!("📊 Server health ({status}):");
            println!("{}", serde_json::to_string_pretty(&body)?);

            Ok(if status.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        },
    }
}
