//! Prediction metrics.
//!
//! The embedding process owns the recorder (for example a Prometheus
//! exporter installed at startup). The `catvdog` binary installs none, so
//! there these calls are no-ops.

use metrics::{counter, histogram};

/// Metric names as constants for consistency.
pub mod names {
    pub const PREDICTIONS_TOTAL: &str = "catvdog_predictions_total";
    pub const PREDICTION_DURATION_SECONDS: &str = "catvdog_prediction_duration_seconds";
    pub const UPLOAD_BYTES: &str = "catvdog_upload_bytes";
}

/// Record a finished prediction. `outcome` is "label" or an error kind.
pub fn record_prediction(outcome: &'static str, duration_secs: f64) {
    let labels = [("outcome", outcome)];
    counter!(names::PREDICTIONS_TOTAL, &labels).increment(1);
    histogram!(names::PREDICTION_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record the size of an uploaded image.
pub fn record_upload_size(bytes: usize) {
    histogram!(names::UPLOAD_BYTES).record(bytes as f64);
}
