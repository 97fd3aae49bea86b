//! Secret string wrapper that never appears in logs.

use serde::Deserialize;

/// Wrapper for SMTP credentials so the value cannot leak through logging.
///
/// `Debug` and `Display` always print `[REDACTED]`; the real value is only
/// reachable through [`SecretString::expose`].
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(s: String) -> Self {
        SecretString(s)
    }

    /// Exposes the underlying secret value. Never pass the result to
    /// logging or error messages.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl std::fmt::Display for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_in_debug_and_display() {
        let secret = SecretString::new("smtp-relay-password".to_string());

        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(format!("{}", secret), "[REDACTED]");
        assert_eq!(secret.expose(), "smtp-relay-password");
    }

    #[test]
    fn redacts_when_nested_in_containers() {
        let secret = SecretString::new("hunter2".to_string());

        for repr in [
            format!("{:?}", Some(&secret)),
            format!("{:?}", vec![&secret]),
        ] {
            assert!(!repr.contains("hunter2"), "leaked in: {}", repr);
        }
    }
}
