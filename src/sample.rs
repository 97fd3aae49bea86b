//! Fixed sample reports backing the preview endpoints.
//!
//! These are rendered against the real templates so template changes can be
//! inspected in a browser without sending mail.

use crate::report::{
    A11yMetric, AccessibilityResult, Defect, TestCase, TestCompletionReport, TestStatusReport,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Sample status report for `GET /api/email/preview/status`.
pub fn status_report() -> TestStatusReport {
    TestStatusReport {
        project_name: "E2E Testing - Mobile App".to_string(),
        vertical: Some("Fulfillment".to_string()),
        opif_id: Some("OPIF-234567".to_string()),
        risk_status: Some("At High Risk".to_string()),
        test_environment: Some("QA Environment".to_string()),
        report_date: Some("February 16, 2026".to_string()),
        program_manager_name: Some("Sarah Johnson".to_string()),
        summary_message: Some("E2E Testing is On Track".to_string()),
        pass_rate_percentage: Some(84),
        attempt_rate_percentage: Some(96),
        critical_p1_count: Some(2),
        tagged_stakeholders: strings(&["@John Doe", "@Jane Smith", "@Bob Johnson"]),
        key_callouts: strings(&[
            "2 critical P1 defects need immediate attention",
            "Payment gateway integration delayed by 2 days",
            "A11Y compliance at 90% across all platforms",
        ]),
        defects: vec![
            Defect {
                bug_id: Some("CEPG-360265".to_string()),
                priority: Some("P1".to_string()),
                current_owner: Some("John Smith".to_string()),
                manager: Some("Sarah Wilson".to_string()),
                director: Some("Mike Johnson".to_string()),
                sd_gd: Some("Q4 2026".to_string()),
                planned_done_date: Some("02/18".to_string()),
                status: Some("In Progress".to_string()),
            },
            Defect {
                bug_id: Some("CEPG-360289".to_string()),
                priority: Some("P1".to_string()),
                current_owner: Some("Alice Brown".to_string()),
                manager: Some("Tom Davis".to_string()),
                director: Some("Emily White".to_string()),
                sd_gd: Some("Q4 2026".to_string()),
                planned_done_date: Some("02/20".to_string()),
                status: Some("Backlog".to_string()),
            },
            Defect {
                bug_id: Some("CEPG-360290".to_string()),
                priority: Some("P2".to_string()),
                current_owner: Some("Bob Martinez".to_string()),
                manager: Some("Lisa Green".to_string()),
                director: Some("David Clark".to_string()),
                sd_gd: Some("Q1 2027".to_string()),
                planned_done_date: Some(String::new()),
                status: Some("Backlog".to_string()),
            },
        ],
        test_cases: vec![
            TestCase {
                tc_id: Some("TC 1".to_string()),
                overall_status: Some("Passed".to_string()),
                android: Some("Passed".to_string()),
                ios: Some("Passed".to_string()),
                d_web: Some("Passed".to_string()),
                m_web: Some("Passed".to_string()),
                comments: Some(String::new()),
            },
            TestCase {
                tc_id: Some("TC 2".to_string()),
                overall_status: Some("Failed".to_string()),
                android: Some("Passed".to_string()),
                ios: Some("Failed".to_string()),
                d_web: Some("Passed".to_string()),
                m_web: Some("Passed".to_string()),
                comments: Some("CEPG-360265".to_string()),
            },
            TestCase {
                tc_id: Some("TC 3".to_string()),
                overall_status: Some("In Progress".to_string()),
                android: Some("Passed".to_string()),
                ios: Some("In Progress".to_string()),
                d_web: Some("Passed".to_string()),
                m_web: Some("Not Attempted".to_string()),
                comments: Some("Testing in progress".to_string()),
            },
            TestCase {
                tc_id: Some("TC 4".to_string()),
                overall_status: Some("Passed".to_string()),
                android: Some("Passed".to_string()),
                ios: Some("Passed".to_string()),
                d_web: Some("Passed".to_string()),
                m_web: Some("Not Attempted".to_string()),
                comments: Some(String::new()),
            },
        ],
        accessibility_results: vec![
            AccessibilityResult {
                platform: Some("Web".to_string()),
                attempted_percentage: Some("100%".to_string()),
                pass_percentage: Some("92%".to_string()),
                comments: Some("Minor color contrast issues".to_string()),
            },
            AccessibilityResult {
                platform: Some("iOS".to_string()),
                attempted_percentage: Some("100%".to_string()),
                pass_percentage: Some("88%".to_string()),
                comments: Some("VoiceOver issues in checkout".to_string()),
            },
            AccessibilityResult {
                platform: Some("Android".to_string()),
                attempted_percentage: Some("95%".to_string()),
                pass_percentage: Some("90%".to_string()),
                comments: Some("TalkBack improvements needed".to_string()),
            },
        ],
        a11y_metrics: vec![
            A11yMetric {
                platform: Some("Android".to_string()),
                attempted_percentage: Some(95),
                pass_percentage: Some(90),
                comments: Some("TalkBack improvements needed".to_string()),
            },
            A11yMetric {
                platform: Some("iOS".to_string()),
                attempted_percentage: Some(100),
                pass_percentage: Some(88),
                comments: Some("VoiceOver issues in checkout".to_string()),
            },
            A11yMetric {
                platform: Some("dWeb".to_string()),
                attempted_percentage: Some(100),
                pass_percentage: Some(92),
                comments: Some("Minor color contrast issues".to_string()),
            },
            A11yMetric {
                platform: Some("mWeb".to_string()),
                attempted_percentage: Some(98),
                pass_percentage: Some(94),
                comments: Some("All tests passed".to_string()),
            },
        ],
        thank_you_names: strings(&["Rajesh Ojha", "John Doe", "Jane Smith"]),
        e2e_jira_filter_link: Some("https://jira.walmart.com/issues/?filter=12345".to_string()),
        a11y_jira_filter_link: Some("https://jira.walmart.com/issues/?filter=67890".to_string()),
        e2e_confluence_link: Some(
            "https://confluence.walmart.com/display/QA/E2E+Golden+Flows".to_string(),
        ),
        ..Default::default()
    }
}

/// Sample completion report for `GET /api/email/preview/completion`.
pub fn completion_report() -> TestCompletionReport {
    TestCompletionReport {
        project_name: "E2E Testing - Mobile App".to_string(),
        risk_status: Some("Sprint 24.2".to_string()),
        test_environment: Some("Production".to_string()),
        completion_date: Some("February 16, 2026".to_string()),
        overall_status: Some("Signed Off with Conditions".to_string()),
        total_test_cases: Some(150),
        passed_test_cases: Some(142),
        failed_test_cases: Some(5),
        blocked_test_cases: Some(3),
        pass_percentage: Some(94.67),
        remarks: Some(
            "E2E testing completed successfully with 94.67% pass rate. 5 minor defects \
             identified and logged for future sprints. 3 test cases blocked due to \
             environment limitations. Overall quality is acceptable for production release."
                .to_string(),
        ),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_status_report_is_valid() {
        let report = status_report();
        assert!(report.validate().is_ok());
        assert_eq!(report.defects.len(), 3);
        assert_eq!(report.test_cases.len(), 4);
        assert_eq!(report.accessibility_results.len(), 3);
        assert_eq!(report.a11y_metrics.len(), 4);
    }

    #[test]
    fn sample_completion_report_is_valid() {
        let report = completion_report();
        assert!(report.validate().is_ok());
        assert_eq!(report.total_test_cases, Some(150));
        assert_eq!(report.pass_percentage, Some(94.67));
    }
}
