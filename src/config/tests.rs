//! Configuration loading and validation tests.

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).expect("write config");
    file
}

const MINIMAL: &str = r#"
smtp:
  host: smtp.example.com
email:
  from: noreply@example.com
"#;

#[test]
fn loads_minimal_config_with_defaults() {
    let file = write_config(MINIMAL);
    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.server.bind, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.smtp.host, "smtp.example.com");
    assert_eq!(config.smtp.port, 587);
    assert_eq!(config.smtp.tls, TlsMode::Starttls);
    assert!(config.smtp.tls_verify);
    assert_eq!(config.email.from, "noreply@example.com");
    assert_eq!(config.email.from_name, "E2E Testing Notification");
    assert!(config.validate().is_ok());
}

#[test]
fn loads_full_config() {
    let file = write_config(
        r#"
server:
  bind: 127.0.0.1
  port: 9000
smtp:
  host: relay.internal
  port: 465
  username: mailer
  password: s3cret
  tls: tls
  tls_verify: false
email:
  from: qa-reports@example.com
  from_name: QA Reports
"#,
    );
    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.smtp.tls, TlsMode::Tls);
    assert!(!config.smtp.tls_verify);
    assert_eq!(config.smtp.username.as_deref(), Some("mailer"));
    assert_eq!(
        config.smtp.password.as_ref().map(|p| p.expose()),
        Some("s3cret")
    );
    assert_eq!(config.email.from_name, "QA Reports");
    assert!(config.validate().is_ok());
}

#[test]
fn load_fails_for_missing_file() {
    let err = Config::load(std::path::Path::new("/nonexistent/config.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to load config file"));
}

#[test]
fn load_fails_for_invalid_yaml() {
    let file = write_config("smtp: [not a mapping");
    assert!(Config::load(file.path()).is_err());
}

#[test]
fn validate_rejects_empty_smtp_host() {
    let file = write_config(
        r#"
smtp:
  host: ""
email:
  from: noreply@example.com
"#,
    );
    let config = Config::load(file.path()).unwrap();

    let errors = config.validate().unwrap_err();
    assert!(errors.iter().any(|e| e.to_string().contains("smtp.host")));
}

#[test]
fn validate_rejects_username_without_password() {
    let file = write_config(
        r#"
smtp:
  host: smtp.example.com
  username: mailer
email:
  from: noreply@example.com
"#,
    );
    let config = Config::load(file.path()).unwrap();

    let errors = config.validate().unwrap_err();
    assert!(
        errors
            .iter()
            .any(|e| e.to_string().contains("smtp.password required"))
    );
}

#[test]
fn validate_rejects_password_without_username() {
    let file = write_config(
        r#"
smtp:
  host: smtp.example.com
  password: s3cret
email:
  from: noreply@example.com
"#,
    );
    let config = Config::load(file.path()).unwrap();

    let errors = config.validate().unwrap_err();
    assert!(
        errors
            .iter()
            .any(|e| e.to_string().contains("smtp.username required"))
    );
}

#[test]
fn validate_rejects_unparseable_from_address() {
    let file = write_config(
        r#"
smtp:
  host: smtp.example.com
email:
  from: "not an address"
"#,
    );
    let config = Config::load(file.path()).unwrap();

    let errors = config.validate().unwrap_err();
    assert!(errors.iter().any(|e| e.to_string().contains("email.from")));
}

#[test]
fn validate_collects_multiple_errors() {
    let file = write_config(
        r#"
smtp:
  host: ""
  username: mailer
email:
  from: ""
"#,
    );
    let config = Config::load(file.path()).unwrap();

    let errors = config.validate().unwrap_err();
    assert!(errors.len() >= 3, "expected 3+ errors, got {:?}", errors.len());
}

#[test]
fn smtp_config_debug_redacts_password() {
    let file = write_config(
        r#"
smtp:
  host: smtp.example.com
  username: mailer
  password: super-secret
email:
  from: noreply@example.com
"#,
    );
    let config = Config::load(file.path()).unwrap();

    let debug = format!("{:?}", config);
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("[REDACTED]"));
}

#[test]
fn tls_mode_parses_all_variants() {
    for (raw, expected) in [
        ("none", TlsMode::None),
        ("starttls", TlsMode::Starttls),
        ("tls", TlsMode::Tls),
    ] {
        let mode: TlsMode = serde_yaml::from_str(raw).unwrap();
        assert_eq!(mode, expected);
    }
}
