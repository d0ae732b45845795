use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Installs the Prometheus recorder. Later calls keep the first recorder.
pub fn init_metrics() {
    if METRICS_HANDLE.get().is_some() {
        return;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            let _ = METRICS_HANDLE.set(handle);
        }
        Err(e) => tracing::warn!("Failed to install Prometheus recorder: {}", e),
    }
}

pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count an employee operation by name and outcome (`ok`, `not_found`, `error`).
pub fn record_operation(operation: &'static str, outcome: &'static str) {
    counter!(
        "employee_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}
