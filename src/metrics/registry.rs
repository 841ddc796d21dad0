// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec,
    HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // REQUEST METRICS
    // ============================================================================

    /// Total number of inbound requests
    pub static ref REQUESTS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("requests_total", "Total number of API requests"),
        &["method", "endpoint", "status_code"],
        REGISTRY
    ).unwrap();

    /// Request duration histogram
    pub static ref REQUEST_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        HistogramOpts::new("request_duration_seconds", "Request duration in seconds")
            .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["method", "endpoint"],
        REGISTRY
    ).unwrap();

    /// Errors rendered as HTTP error responses
    pub static ref ERRORS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("errors_total", "Total error responses by kind"),
        &["error_type"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // UPSTREAM METRICS
    // ============================================================================

    /// Calls made to external providers
    pub static ref UPSTREAM_CALLS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("upstream_calls_total", "Total calls to external providers"),
        &["provider", "operation", "outcome"], // outcome: success, failure
        REGISTRY
    ).unwrap();

    /// External provider call duration
    pub static ref UPSTREAM_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        HistogramOpts::new("upstream_duration_seconds", "External provider call duration")
            .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["provider", "operation"],
        REGISTRY
    ).unwrap();

    // ============================================================================
    // UPLOAD METRICS
    // ============================================================================

    /// Upload outcomes as reported in the response body
    pub static ref UPLOADS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("uploads_total", "Total upload requests by outcome"),
        &["outcome"], // outcome: success, unconfigured, bucket_check_failed, ...
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return them in Prometheus text format
pub fn gather_metrics() -> prometheus::Result<String> {
    TextEncoder::new().encode_to_string(&REGISTRY.gather())
}
