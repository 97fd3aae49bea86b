//! HTML rendering for report emails using minijinja.
//!
//! The two templates are embedded at compile time and loaded into a single
//! `Environment` up front. Undefined behavior is lenient so an absent field
//! renders as an empty string instead of failing the whole email, and HTML
//! auto-escape is on for every template so report text can never inject
//! markup into the rendered body.

use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::error::TemplateError;

/// Template identifier for status report emails.
pub const STATUS_TEMPLATE: &str = "test-status-email";

/// Template identifier for completion report emails.
pub const COMPLETION_TEMPLATE: &str = "test-completion-email";

/// Template engine holding the two embedded report templates.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Build the engine and compile the embedded templates.
    ///
    /// # Errors
    /// Returns [`TemplateError::RenderFailed`] if an embedded template has a
    /// syntax error. This only happens when the template files shipped with
    /// the binary are broken, so it is a startup failure.
    pub fn new() -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        env.set_auto_escape_callback(|_| AutoEscape::Html);

        env.add_template(
            STATUS_TEMPLATE,
            include_str!("../templates/test-status-email.html"),
        )
        .map_err(|e| TemplateError::RenderFailed {
            message: e.to_string(),
        })?;
        env.add_template(
            COMPLETION_TEMPLATE,
            include_str!("../templates/test-completion-email.html"),
        )
        .map_err(|e| TemplateError::RenderFailed {
            message: e.to_string(),
        })?;

        Ok(Self { env })
    }

    /// Render a template with the report bound to the `report` context key.
    ///
    /// # Errors
    /// * [`TemplateError::NotFound`] - unknown template identifier.
    /// * [`TemplateError::RenderFailed`] - the engine rejected the render.
    pub fn render<R: Serialize>(&self, name: &str, report: &R) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|_| TemplateError::NotFound {
                name: name.to_string(),
            })?;

        let html = template
            .render(context! { report => report })
            .map_err(|e| TemplateError::RenderFailed {
                message: e.to_string(),
            })?;

        tracing::trace!(template = %name, html_len = html.len(), "template rendered");
        Ok(html)
    }
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &[STATUS_TEMPLATE, COMPLETION_TEMPLATE])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{TestCompletionReport, TestStatusReport};
    use crate::sample;

    #[test]
    fn renders_status_sample_with_all_sections() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine.render(STATUS_TEMPLATE, &sample::status_report()).unwrap();

        assert!(!html.is_empty());
        assert!(html.contains("E2E Testing - Mobile App"));
        assert!(html.contains("CEPG-360265"), "defect table missing");
        assert!(html.contains("TC 3"), "test case table missing");
        assert!(html.contains("VoiceOver issues in checkout"), "a11y rows missing");
        assert!(html.contains("Rajesh Ojha"), "thank-you list missing");
        assert!(html.contains("84"), "pass rate missing");
    }

    #[test]
    fn renders_completion_sample() {
        let engine = TemplateEngine::new().unwrap();
        let html = engine
            .render(COMPLETION_TEMPLATE, &sample::completion_report())
            .unwrap();

        assert!(!html.is_empty());
        assert!(html.contains("E2E Testing - Mobile App"));
        assert!(html.contains("150"));
        assert!(html.contains("142"));
        assert!(html.contains("Signed Off with Conditions"));
    }

    #[test]
    fn missing_optional_fields_render_as_empty() {
        let engine = TemplateEngine::new().unwrap();
        let report = TestStatusReport {
            project_name: "Bare".to_string(),
            ..Default::default()
        };

        let html = engine.render(STATUS_TEMPLATE, &report).unwrap();
        assert!(html.contains("Bare"));
        assert!(!html.contains("none"), "absent field leaked as 'none'");
    }

    #[test]
    fn report_text_is_html_escaped() {
        let engine = TemplateEngine::new().unwrap();
        let report = TestCompletionReport {
            project_name: "<script>alert(1)</script>".to_string(),
            total_test_cases: Some(1),
            ..Default::default()
        };

        let html = engine.render(COMPLETION_TEMPLATE, &report).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn unknown_template_returns_not_found() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render("no-such-template", &sample::status_report());

        match result.unwrap_err() {
            TemplateError::NotFound { name } => assert_eq!(name, "no-such-template"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
