//! Report-to-email orchestration.
//!
//! [`ReportMailer`] drives the full pipeline for one inbound report:
//! validate, derive, render, assemble, send. Validation runs first so a bad
//! report never reaches the template engine or the transport.

use metrics::counter;

use crate::assembly::{
    build_envelope, completion_subject, derive_pass_percentage, resolve_sender, status_subject,
};
use crate::error::{SendError, TemplateError};
use crate::mailer::Mailer;
use crate::report::{TestCompletionReport, TestStatusReport};
use crate::sample;
use crate::template::{COMPLETION_TEMPLATE, STATUS_TEMPLATE, TemplateEngine};

/// Turns validated reports into rendered, addressed, delivered emails.
pub struct ReportMailer {
    engine: TemplateEngine,
    mailer: Mailer,
    default_from: String,
    default_from_name: String,
}

impl ReportMailer {
    pub fn new(
        engine: TemplateEngine,
        mailer: Mailer,
        default_from: String,
        default_from_name: String,
    ) -> Self {
        Self {
            engine,
            mailer,
            default_from,
            default_from_name,
        }
    }

    /// Send a status summary email for the given report.
    ///
    /// Validation failures and render failures abort before the transport is
    /// touched; delivery failures are returned after the single attempt.
    pub async fn send_status_email(&self, report: &TestStatusReport) -> Result<(), SendError> {
        if let Err(e) = report.validate() {
            counter!("qemailer_validation_errors_total", "kind" => "status").increment(1);
            return Err(e.into());
        }

        tracing::info!(
            project = %report.project_name,
            recipients = report.recipients.len(),
            "preparing status email"
        );

        let html = self.engine.render(STATUS_TEMPLATE, report)?;
        let subject = status_subject(report);
        let (from_address, from_name) = resolve_sender(
            report.sender_email.as_deref(),
            &self.default_from,
            &self.default_from_name,
        );
        let envelope = build_envelope(
            &report.recipients,
            &report.cc_recipients,
            &report.bcc_recipients,
            subject,
            from_address,
            from_name,
            html,
        );

        match self.mailer.send(&envelope).await {
            Ok(()) => {
                counter!("qemailer_emails_sent_total", "kind" => "status").increment(1);
                tracing::info!(
                    project = %report.project_name,
                    subject = %envelope.subject,
                    "status email sent"
                );
                Ok(())
            }
            Err(e) => {
                counter!("qemailer_emails_failed_total", "kind" => "status").increment(1);
                tracing::error!(project = %report.project_name, error = %e, "status email failed");
                Err(e.into())
            }
        }
    }

    /// Send a completion summary email for the given report.
    ///
    /// Takes the report by value because the pass percentage may be derived
    /// from the execution counts before rendering.
    pub async fn send_completion_email(
        &self,
        report: TestCompletionReport,
    ) -> Result<(), SendError> {
        if let Err(e) = report.validate() {
            counter!("qemailer_validation_errors_total", "kind" => "completion").increment(1);
            return Err(e.into());
        }

        let report = derive_pass_percentage(report);

        tracing::info!(
            project = %report.project_name,
            recipients = report.recipients.len(),
            "preparing completion email"
        );

        let html = self.engine.render(COMPLETION_TEMPLATE, &report)?;
        let subject = completion_subject(&report);
        let (from_address, from_name) = resolve_sender(
            report.sender_email.as_deref(),
            &self.default_from,
            &self.default_from_name,
        );
        let envelope = build_envelope(
            &report.recipients,
            &report.cc_recipients,
            &report.bcc_recipients,
            subject,
            from_address,
            from_name,
            html,
        );

        match self.mailer.send(&envelope).await {
            Ok(()) => {
                counter!("qemailer_emails_sent_total", "kind" => "completion").increment(1);
                tracing::info!(
                    project = %report.project_name,
                    subject = %envelope.subject,
                    "completion email sent"
                );
                Ok(())
            }
            Err(e) => {
                counter!("qemailer_emails_failed_total", "kind" => "completion").increment(1);
                tracing::error!(project = %report.project_name, error = %e, "completion email failed");
                Err(e.into())
            }
        }
    }

    /// Render the status template against fixed sample data. No email is
    /// sent.
    pub fn preview_status_email(&self) -> Result<String, TemplateError> {
        self.engine.render(STATUS_TEMPLATE, &sample::status_report())
    }

    /// Render the completion template against fixed sample data. No email is
    /// sent.
    pub fn preview_completion_email(&self) -> Result<String, TemplateError> {
        self.engine
            .render(COMPLETION_TEMPLATE, &sample::completion_report())
    }
}
