//! Configuration loading and validation for qemailer.
//!
//! Handles loading the YAML configuration file, fail-fast validation,
//! and environment variable substitution for SMTP credentials.

mod env;
mod secret;
mod types;

pub use env::resolve_env_vars;
pub use secret::SecretString;
pub use types::{
    Config, DEFAULT_CONFIG_PATH, EmailConfig, ServerConfig, SmtpConfig, TlsMode,
    default_from_name,
};

#[cfg(test)]
mod tests;
