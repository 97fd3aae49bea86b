//! Core configuration types and loading.

use lettre::message::Mailbox;
use serde::Deserialize;
use std::path::Path;

use super::secret::SecretString;
use crate::error::ConfigError;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/qemailer/config.yaml";

/// Main configuration structure for qemailer.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// HTTP server bind settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// SMTP relay connection settings.
    pub smtp: SmtpConfig,
    /// Default sender identity.
    pub email: EmailConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (default: 0.0.0.0).
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Listen port (default: 8080).
    #[serde(default = "default_server_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_server_port(),
        }
    }
}

/// SMTP relay configuration.
///
/// `username` and `password` support `${VAR}` environment substitution and
/// must be set together.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<SecretString>,
    #[serde(default)]
    pub tls: TlsMode,
    /// Verify the server certificate (disable only for self-signed relays).
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

fn default_smtp_port() -> u16 {
    587
}

pub(crate) fn default_true() -> bool {
    true
}

/// TLS mode for the SMTP connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// No encryption.
    None,
    /// Plain connection upgraded via STARTTLS (default).
    #[default]
    Starttls,
    /// Direct TLS connection.
    Tls,
}

/// Default sender identity used when a report carries no `senderEmail`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Default from address.
    pub from: String,
    /// Default from display name.
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

pub fn default_from_name() -> String {
    "E2E Testing Notification".to_string()
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// # Errors
    /// Returns [`ConfigError::LoadError`] if the file cannot be read.
    /// Returns [`ConfigError::ValidationError`] if the YAML is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadError(format!("{}: {}", path.display(), e)))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Validate the configuration, collecting every error found (fail-fast
    /// at startup, all problems reported at once).
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.smtp.host.trim().is_empty() {
            errors.push(ConfigError::ValidationError(
                "smtp.host must not be empty".to_string(),
            ));
        }

        match (&self.smtp.username, &self.smtp.password) {
            (Some(_), None) => errors.push(ConfigError::ValidationError(
                "smtp.password required when smtp.username is set".to_string(),
            )),
            (None, Some(_)) => errors.push(ConfigError::ValidationError(
                "smtp.username required when smtp.password is set".to_string(),
            )),
            _ => {}
        }

        if self.email.from.trim().is_empty() {
            errors.push(ConfigError::ValidationError(
                "email.from must not be empty".to_string(),
            ));
        } else if self.email.from.parse::<Mailbox>().is_err() {
            errors.push(ConfigError::ValidationError(format!(
                "email.from '{}' is not a valid address",
                self.email.from
            )));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
