// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics, ERRORS_TOTAL, REQUESTS_TOTAL, REQUEST_DURATION, UPLOADS_TOTAL,
    UPSTREAM_CALLS, UPSTREAM_DURATION,
};

/// Helper to record request metrics
pub fn record_request(method: &str, endpoint: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, endpoint])
        .observe(duration_secs);
}

/// Helper to record a call to an external provider
pub fn record_upstream_call(provider: &str, operation: &str, success: bool, duration_secs: f64) {
    let outcome = if success { "success" } else { "failure" };
    UPSTREAM_CALLS
        .with_label_values(&[provider, operation, outcome])
        .inc();

    UPSTREAM_DURATION
        .with_label_values(&[provider, operation])
        .observe(duration_secs);
}

pub fn record_error(error_type: &str) {
    ERRORS_TOTAL.with_label_values(&[error_type]).inc();
}

pub fn record_upload(outcome: &str) {
    UPLOADS_TOTAL.with_label_values(&[outcome]).inc();
}
