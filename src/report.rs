//! Report data model: the two inbound report kinds and their child records.
//!
//! All types are plain immutable value objects deserialized from camelCase
//! JSON payloads. List fields default to empty vectors, never null. The only
//! derived field (`pass_percentage` on completion reports) is computed by a
//! pure transform in [`crate::assembly`], not by mutating a stored record.
//!
//! `Option` fields are skipped during serialization so that absent values
//! show up as undefined in templates (rendered as empty strings) instead of
//! a literal "none".

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Periodic status report for an in-flight E2E testing effort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestStatusReport {
    // Envelope overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_email: Option<String>,
    pub recipients: Vec<String>,
    pub cc_recipients: Vec<String>,
    pub bcc_recipients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    // Project identity
    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opif_id: Option<String>,

    // Routing metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_manager_name: Option<String>,

    // Report content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_rate_percentage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempt_rate_percentage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical_p1_count: Option<i64>,
    pub tagged_stakeholders: Vec<String>,
    pub key_callouts: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub e2e_jira_filter_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a11y_jira_filter_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e2e_confluence_link: Option<String>,

    pub defects: Vec<Defect>,
    pub test_cases: Vec<TestCase>,
    pub accessibility_results: Vec<AccessibilityResult>,
    pub a11y_metrics: Vec<A11yMetric>,
    pub thank_you_names: Vec<String>,
}

impl TestStatusReport {
    /// Precondition check executed once at the request boundary,
    /// before any render or send.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_name.trim().is_empty() {
            return Err(ValidationError::new("projectName", "must not be blank"));
        }
        Ok(())
    }
}

/// Final completion report for a finished E2E testing effort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestCompletionReport {
    // Envelope overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_email: Option<String>,
    pub recipients: Vec<String>,
    pub cc_recipients: Vec<String>,
    pub bcc_recipients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,

    // Report content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_test_cases: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passed_test_cases: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_test_cases: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_test_cases: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl TestCompletionReport {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_name.trim().is_empty() {
            return Err(ValidationError::new("projectName", "must not be blank"));
        }
        match self.total_test_cases {
            None => Err(ValidationError::new("totalTestCases", "is required")),
            Some(n) if n < 0 => Err(ValidationError::new(
                "totalTestCases",
                "must not be negative",
            )),
            Some(_) => Ok(()),
        }
    }
}

/// A critical defect row in the status report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Defect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bug_id: Option<String>,
    /// Free-form priority label, e.g. "P1" or "P2".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sd_gd: Option<String>,
    /// May be empty when no date has been committed yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_done_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A golden-flow test case row with per-platform results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestCase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d_web: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m_web: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Accessibility test outcome per platform.
///
/// Percentages arrive pre-formatted ("100%", "92%") and are passed through
/// to the template unmodified, never parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempted_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Accessibility metric per platform, with integer percentages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct A11yMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempted_percentage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_percentage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}
