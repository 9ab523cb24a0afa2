//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use super::config::MetricsConfig;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("fertilizer_advisor_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router<S>(metrics: PrometheusMetrics, path: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Record a successful recommendation
pub fn record_recommendation(fertilizer: &str, curated: bool, duration: Duration) {
    let labels = [
        ("fertilizer", fertilizer.to_string()),
        ("curated", curated.to_string()),
    ];

    counter!("recommendations_total", &labels).increment(1);
    histogram!("recommendation_duration_seconds").record(duration.as_secs_f64());
}

/// Record a failed submission by error kind
pub fn record_recommendation_failure(kind: &'static str) {
    counter!("recommendation_failures_total", "kind" => kind).increment(1);
}

/// Routes served by the API router. Anything else is a 404 and shares one label.
const KNOWN_ROUTES: [&str; 6] = [
    "/",
    "/v1/options",
    "/v1/recommendations",
    "/health",
    "/ready",
    "/live",
];

const UNMATCHED_PATH: &str = "unmatched";

/// Map a request path onto a bounded label set
fn sanitize_path(path: &str) -> String {
    if path.starts_with("/images/") {
        return "/images/{file}".to_string();
    }

    if KNOWN_ROUTES.contains(&path) {
        path.to_string()
    } else {
        UNMATCHED_PATH.to_string()
    }
}
