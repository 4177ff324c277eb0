//! Metrics collection and Prometheus export.

use crate::models::ZodiacSign;
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Installs the Prometheus recorder. Calls after the first are no-ops, which
/// lets tests initialize metrics from several places.
pub fn init_metrics() {
    if METRICS_HANDLE.get().is_some() {
        return;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = METRICS_HANDLE.set(handle);
        }
        Err(e) => tracing::warn!("Prometheus recorder not installed: {}", e),
    }
}

/// Current metrics in Prometheus text format, for the /metrics endpoint.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

pub fn record_reading_generated(sign: ZodiacSign) {
    counter!("horoscope_readings_generated_total", "sign" => sign.as_str()).increment(1);
}

pub fn record_store_query(outcome: &'static str) {
    counter!("horoscope_store_queries_total", "outcome" => outcome).increment(1);
}
