//! Environment variable substitution for credential values.

use regex::Regex;

use crate::error::ConfigError;

/// Resolves `${VAR_NAME}` patterns in a string.
///
/// Every referenced variable must be defined; undefined variables are
/// collected and reported together.
pub fn resolve_env_vars(value: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Invalid regex");

    let mut result = value.to_string();
    let mut missing = Vec::new();

    for cap in re.captures_iter(value) {
        let full_match = cap.get(0).map(|m| m.as_str()).unwrap_or_default();
        let var_name = &cap[1];

        match std::env::var(var_name) {
            Ok(var_value) => {
                result = result.replace(full_match, &var_value);
            }
            Err(_) => {
                missing.push(var_name.to_string());
            }
        }
    }

    if missing.is_empty() {
        Ok(result)
    } else {
        Err(ConfigError::ValidationError(format!(
            "undefined environment variable{}: {}",
            if missing.len() > 1 { "s" } else { "" },
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn plain_string_passes_through() {
        assert_eq!(resolve_env_vars("no vars here").unwrap(), "no vars here");
    }

    #[test]
    #[serial]
    fn substitutes_defined_variable() {
        temp_env::with_var("QEMAILER_TEST_USER", Some("mailer"), || {
            let resolved = resolve_env_vars("${QEMAILER_TEST_USER}@smtp").unwrap();
            assert_eq!(resolved, "mailer@smtp");
        });
    }

    #[test]
    #[serial]
    fn substitutes_multiple_variables() {
        temp_env::with_vars(
            [
                ("QEMAILER_TEST_A", Some("alpha")),
                ("QEMAILER_TEST_B", Some("beta")),
            ],
            || {
                let resolved =
                    resolve_env_vars("${QEMAILER_TEST_A}:${QEMAILER_TEST_B}").unwrap();
                assert_eq!(resolved, "alpha:beta");
            },
        );
    }

    #[test]
    #[serial]
    fn undefined_variable_is_an_error() {
        temp_env::with_var("QEMAILER_TEST_MISSING", None::<&str>, || {
            let err = resolve_env_vars("${QEMAILER_TEST_MISSING}").unwrap_err();
            assert!(err.to_string().contains("QEMAILER_TEST_MISSING"));
        });
    }
}
