//! Centralized error types for qemailer using thiserror.
//!
//! One enum per concern; nothing is retried or swallowed. Every failure
//! aborts the single send attempt and is reported to the caller.

use thiserror::Error;

/// Errors related to configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load config file: {0}")]
    LoadError(String),
    #[error("invalid configuration: {0}")]
    ValidationError(String),
    #[error("invalid smtp configuration: {0}")]
    InvalidSmtp(String),
}

/// A required field on an inbound report is missing or blank.
///
/// Surfaced to the caller as a client-side failure before any assembly,
/// render, or send is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid field '{field}': {rule}")]
pub struct ValidationError {
    /// Wire name of the violated field (e.g. "projectName").
    pub field: String,
    /// Human-readable rule that was violated.
    pub rule: String,
}

impl ValidationError {
    pub fn new(field: &str, rule: &str) -> Self {
        Self {
            field: field.to_string(),
            rule: rule.to_string(),
        }
    }
}

/// Errors related to HTML template rendering.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template '{name}' not found")]
    NotFound { name: String },
    #[error("template render failed: {message}")]
    RenderFailed { message: String },
}

/// Errors related to email composition and delivery.
#[derive(Error, Debug)]
pub enum MailError {
    #[error("email has no recipients")]
    NoRecipients,
    #[error("failed to build email: {0}")]
    BuildFailed(String),
    #[error("failed to send email: {0}")]
    SendFailed(String),
}

/// Union of everything that can abort a send request.
#[derive(Error, Debug)]
pub enum SendError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("render error: {0}")]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Mail(#[from] MailError),
}
