//! Metric descriptions for the Prometheus exporter.
//!
//! Counters are emitted at their call sites via the `metrics` macros; this
//! module only registers the help text shown on the `/metrics` endpoint.
//! All counters carry a `kind` label ("status" or "completion").

use metrics::describe_counter;

/// Register help text for every metric the service emits. Call once at
/// startup, after the recorder is installed.
pub fn register_metric_descriptions() {
    describe_counter!(
        "qemailer_emails_sent_total",
        "Total number of report emails successfully handed to the SMTP transport"
    );
    describe_counter!(
        "qemailer_emails_failed_total",
        "Total number of report emails that failed to build or send"
    );
    describe_counter!(
        "qemailer_validation_errors_total",
        "Total number of inbound reports rejected by validation"
    );
}
