//! Email assembly: turns one report into a ready-to-send envelope.
//!
//! Everything here is pure and deterministic with no I/O. Missing optional
//! fields never fail assembly; they fall back to the defaults described on
//! each function. Delivering an envelope with no recipients is the mail
//! transport's error to raise, not ours.

use crate::report::{TestCompletionReport, TestStatusReport};

/// The from/to/cc/bcc/subject/body bundle handed to the mail transport
/// for a single send. The body is always HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub from_address: String,
    pub from_name: String,
    pub to: Vec<String>,
    /// Present only when the source list is non-empty.
    pub cc: Option<Vec<String>>,
    /// Present only when the source list is non-empty.
    pub bcc: Option<Vec<String>>,
    pub subject: String,
    pub html_body: String,
}

/// Fill in `pass_percentage` when the caller left it out.
///
/// When `pass_percentage` is `None` and `total_test_cases` is present and
/// positive, the percentage is `passed * 100.0 / total` (a missing passed
/// count counts as zero). In every other case the report comes back
/// unchanged, including a `None` that stays `None` when the guard fails.
pub fn derive_pass_percentage(mut report: TestCompletionReport) -> TestCompletionReport {
    if report.pass_percentage.is_none()
        && let Some(total) = report.total_test_cases
        && total > 0
    {
        let passed = report.passed_test_cases.unwrap_or(0);
        report.pass_percentage = Some(passed as f64 * 100.0 / total as f64);
    }
    report
}

/// Subject for a status report: the explicit subject verbatim when set,
/// otherwise `[E2E Test Status] {project} - {riskStatus}`.
pub fn status_subject(report: &TestStatusReport) -> String {
    if let Some(subject) = explicit_subject(report.subject.as_deref()) {
        return subject;
    }
    format!(
        "[E2E Test Status] {} - {}",
        report.project_name,
        report.risk_status.as_deref().unwrap_or("")
    )
}

/// Subject for a completion report: the explicit subject verbatim when set,
/// otherwise `[E2E Test Completed] {project} - {riskStatus} - {overallStatus}
/// ({pass:.1}% Passed)` with `0.0` when the percentage is absent.
pub fn completion_subject(report: &TestCompletionReport) -> String {
    if let Some(subject) = explicit_subject(report.subject.as_deref()) {
        return subject;
    }
    format!(
        "[E2E Test Completed] {} - {} - {} ({:.1}% Passed)",
        report.project_name,
        report.risk_status.as_deref().unwrap_or(""),
        report.overall_status.as_deref().unwrap_or(""),
        report.pass_percentage.unwrap_or(0.0)
    )
}

fn explicit_subject(subject: Option<&str>) -> Option<String> {
    match subject {
        Some(s) if !s.is_empty() => Some(s.to_string()),
        _ => None,
    }
}

/// Resolve the effective sender address and display name.
///
/// The address is the report's `sender_email` when non-empty, else the
/// configured default. The display name is derived from the local part of
/// `sender_email` when it contains an `@` ("john.doe" becomes "John Doe",
/// "JANE_SMITH" becomes "Jane Smith"); an empty local part yields an empty
/// name. A sender without an `@`, or no sender at all, keeps the configured
/// default name.
pub fn resolve_sender(
    sender_email: Option<&str>,
    default_address: &str,
    default_name: &str,
) -> (String, String) {
    match sender_email {
        Some(address) if !address.is_empty() => {
            let name = match address.find('@') {
                Some(at) => display_name_from_local_part(&address[..at]),
                None => default_name.to_string(),
            };
            (address.to_string(), name)
        }
        _ => (default_address.to_string(), default_name.to_string()),
    }
}

/// Title-case the segments of an address local part: split on `.` and `_`,
/// uppercase the first character of each non-empty segment, lowercase the
/// rest, join with single spaces.
fn display_name_from_local_part(local: &str) -> String {
    local
        .split(['.', '_'])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Assemble the final envelope. Recipient emptiness is not validated here;
/// the cc/bcc lists are included verbatim (same order) only when non-empty.
pub fn build_envelope(
    to: &[String],
    cc: &[String],
    bcc: &[String],
    subject: String,
    from_address: String,
    from_name: String,
    html_body: String,
) -> Envelope {
    Envelope {
        from_address,
        from_name,
        to: to.to_vec(),
        cc: non_empty(cc),
        bcc: non_empty(bcc),
        subject,
        html_body,
    }
}

fn non_empty(list: &[String]) -> Option<Vec<String>> {
    if list.is_empty() {
        None
    } else {
        Some(list.to_vec())
    }
}
