//! # Prometheus Metrics
//!
//! Registration metrics for the node, scraped at `/metrics` on the
//! configured metrics port. Everything lives in a dedicated
//! [`prometheus::Registry`] prefixed `dkms_`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};
use std::sync::Arc;

/// Metric handles shared by the API handlers.
#[derive(Clone)]
pub struct NodeMetrics {
    registry: Registry,
    /// Registrations that were stored.
    pub registrations_total: IntCounter,
    /// Registrations that were refused, for any reason.
    pub registration_failures_total: IntCounter,
    /// Users currently held by this node.
    pub registered_users: IntGauge,
    /// Time spent verifying and reconstructing one registration.
    pub registration_latency_seconds: Histogram,
}

impl NodeMetrics {
    /// Creates and registers all metrics. Call once at startup.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("dkms".into()), None)?;

        let registrations_total =
            IntCounter::new("registrations_total", "Total number of successful registrations")?;
        registry.register(Box::new(registrations_total.clone()))?;

        let registration_failures_total = IntCounter::new(
            "registration_failures_total",
            "Total number of refused registrations",
        )?;
        registry.register(Box::new(registration_failures_total.clone()))?;

        let registered_users =
            IntGauge::new("registered_users", "Number of users registered on this node")?;
        registry.register(Box::new(registered_users.clone()))?;

        let registration_latency_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "registration_latency_seconds",
                "Time to verify, reconstruct and store one registration",
            )
            .buckets(vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 1.0]),
        )?;
        registry.register(Box::new(registration_latency_seconds.clone()))?;

        Ok(Self {
            registry,
            registrations_total,
            registration_failures_total,
            registered_users,
            registration_latency_seconds,
        })
    }

    /// Encodes all registered metrics into the Prometheus text exposition format.
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

/// Shared metrics state passed to axum handlers.
pub type SharedMetrics = Arc<NodeMetrics>;

/// Router serving `/metrics`.
pub fn router(metrics: SharedMetrics) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
}

/// Renders `/metrics` in Prometheus text format.
async fn metrics_handler(State(metrics): State<SharedMetrics>) -> impl IntoResponse {
    match metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "metrics encoding failed").into_response()
        }
    }
}
