//! qemailer - HTML email notifications for E2E test reports.

pub mod assembly;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod mailer;
pub mod metrics;
pub mod report;
pub mod sample;
pub mod service;
pub mod template;

// Re-export commonly used types
pub use assembly::Envelope;
pub use cli::LogFormat;
pub use http::{AppState, SendResponse, router};
pub use mailer::{EmailTransport, Mailer, SmtpTransport};
pub use metrics::register_metric_descriptions;
pub use report::{
    A11yMetric, AccessibilityResult, Defect, TestCase, TestCompletionReport, TestStatusReport,
};
pub use service::ReportMailer;
pub use template::{COMPLETION_TEMPLATE, STATUS_TEMPLATE, TemplateEngine};
