//! HTML rendering for the fare form and its result
//!
//! Templates are embedded at compile time and rendered with Tera.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{FarePageView, TemplateEngine};
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_fare_page(&view)?;
//! ```

use std::sync::Arc;

use application::FareOutcome;
use domain::{MapPoint, PassengerCount, RoutePreview};
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

/// Name of the fare page template
pub const FARE_PAGE_TEMPLATE: &str = "fare_page.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Values shown in the form inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    /// Pickup address input
    pub pickup_address: String,
    /// Dropoff address input
    pub dropoff_address: String,
    /// Date input, `YYYY-MM-DD`
    pub pickup_date: String,
    /// Time input, `HH:MM` or `HH:MM:SS`
    pub pickup_time: String,
    /// Passenger stepper value, as submitted
    pub passenger_count: String,
}

/// Map section of a successful result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// One row per endpoint, pickup first
    pub points: Vec<MapPoint>,
    /// Initial zoom level
    pub zoom: u8,
    /// Marker radius in meters
    pub point_size: u32,
    /// Latitude the map is centred on
    pub center_latitude: f64,
    /// Longitude the map is centred on
    pub center_longitude: f64,
}

impl From<&RoutePreview> for MapView {
    fn from(preview: &RoutePreview) -> Self {
        let (center_latitude, center_longitude) = preview.center();
        Self {
            points: preview.points.clone(),
            zoom: preview.zoom,
            point_size: preview.point_size,
            center_latitude,
            center_longitude,
        }
    }
}

/// Result banner of a submitted form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeView {
    /// Whether a fare was estimated
    pub success: bool,
    /// Error text, or the formatted fare on success
    pub message: String,
    /// Route preview, present only on success
    pub map: Option<MapView>,
}

impl From<&FareOutcome> for OutcomeView {
    fn from(outcome: &FareOutcome) -> Self {
        Self {
            success: outcome.is_success(),
            message: outcome.message(),
            map: outcome.preview().map(MapView::from),
        }
    }
}

/// Everything the fare page template needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarePageView {
    /// Form input values
    pub form: FormView,
    /// Pipeline result, absent before the first submission
    pub outcome: Option<OutcomeView>,
    /// Input validation error, shown instead of a result
    pub validation_error: Option<String>,
}

impl FarePageView {
    /// Fresh form without a result
    #[must_use]
    pub const fn new(form: FormView) -> Self {
        Self {
            form,
            outcome: None,
            validation_error: None,
        }
    }

    /// Attach a pipeline result
    #[must_use]
    pub fn with_outcome(mut self, outcome: &FareOutcome) -> Self {
        self.outcome = Some(OutcomeView::from(outcome));
        self
    }

    /// Attach an input validation error
    #[must_use]
    pub fn with_validation_error(mut self, message: impl Into<String>) -> Self {
        self.validation_error = Some(message.into());
        self
    }
}

/// Embedded templates
mod embedded {
    pub const FARE_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>TaxiFare Predictor 3000</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
  <style>
    body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
    .row { display: flex; gap: 1rem; }
    .row label { flex: 1; display: flex; flex-direction: column; }
    .banner { padding: 0.75rem 1rem; border-radius: 0.4rem; margin: 1rem 0; }
    .error { background: #fde2e2; color: #8a1c1c; }
    .success { background: #e1f7dc; color: #1f5e16; font-size: 1.4rem; }
    #map { height: 24rem; margin-top: 1rem; }
    table { border-collapse: collapse; }
    td, th { padding: 0.2rem 0.6rem; border-bottom: 1px solid #ddd; }
  </style>
</head>
<body>
  <h1>🚕 TaxiFare Predictor 3000</h1>
  <p>Get a prediction of your taxi fare!</p>

  <form method="post" action="/predict">
    <h2>📍 Pickup &amp; Dropoff</h2>
    <div class="row">
      <label>Pickup address
        <input type="text" name="pickup_address" value="{{ form.pickup_address }}">
      </label>
      <label>Dropoff address
        <input type="text" name="dropoff_address" value="{{ form.dropoff_address }}">
      </label>
    </div>

    <h2>🕒 Schedule &amp; passengers</h2>
    <div class="row">
      <label>Pickup date
        <input type="date" name="pickup_date" value="{{ form.pickup_date }}" required>
      </label>
      <label>Pickup time
        <input type="time" name="pickup_time" value="{{ form.pickup_time }}" step="1" required>
      </label>
      <label>Passengers
        <input type="number" name="passenger_count" min="{{ min_passengers }}" max="{{ max_passengers }}" value="{{ form.passenger_count }}">
      </label>
    </div>

    <hr>
    <button type="submit">🔮 Predict fare</button>
  </form>

{% if validation_error %}
  <div class="banner error">{{ validation_error }}</div>
{% endif %}
{% if outcome %}
{% if outcome.success %}
  <h2>💰 Estimated fare</h2>
  <div class="banner success">{{ outcome.message }}</div>
{% else %}
  <div class="banner error">{{ outcome.message }}</div>
{% endif %}
{% if outcome.map %}
  <h3>Route preview</h3>
  <p>🟢 Pickup (origin) &nbsp; | &nbsp; 🔴 Destination (dropoff)</p>
  <table>
    <tr><th>latitude</th><th>longitude</th><th>color</th></tr>
{% for point in outcome.map.points %}
    <tr><td>{{ point.latitude }}</td><td>{{ point.longitude }}</td><td>{{ point.color }}</td></tr>
{% endfor %}
  </table>
  <div id="map"></div>
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <script>
    const map = L.map("map").setView([{{ outcome.map.center_latitude }}, {{ outcome.map.center_longitude }}], {{ outcome.map.zoom }});
    L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
      attribution: "&copy; OpenStreetMap contributors"
    }).addTo(map);
    const points = {{ outcome.map.points | json_encode() | safe }};
    for (const p of points) {
      L.circle([p.latitude, p.longitude], {
        radius: {{ outcome.map.point_size }},
        color: p.color,
        fillColor: p.color,
        fillOpacity: 0.9
      }).addTo(map);
    }
  </script>
{% endif %}
{% endif %}
</body>
</html>
"##;
}

/// Tera-backed renderer for the fare pages
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.tera.get_template_names().count())
            .finish()
    }
}

impl TemplateEngine {
    /// Create an engine with the embedded templates compiled
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_template(FARE_PAGE_TEMPLATE, embedded::FARE_PAGE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        debug!("Compiled embedded templates");
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render the fare page
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_fare_page(&self, view: &FarePageView) -> Result<String, TemplateError> {
        let mut ctx = Context::from_serialize(view)?;
        ctx.insert("min_passengers", &PassengerCount::MIN);
        ctx.insert("max_passengers", &PassengerCount::MAX);
        Ok(self.tera.render(FARE_PAGE_TEMPLATE, &ctx)?)
    }
}
