//! Outbound mail delivery over SMTP.
//!
//! The transport is abstracted behind the [`EmailTransport`] trait so tests
//! can inject a mock and capture outgoing messages; production wires in
//! `AsyncSmtpTransport<Tokio1Executor>` built from [`SmtpConfig`].
//!
//! Each envelope is a single send attempt. Failures are surfaced to the
//! caller as [`MailError`] with the transport's message; there is no retry,
//! queueing, or partial delivery.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;

use crate::assembly::Envelope;
use crate::config::{SmtpConfig, TlsMode, resolve_env_vars};
use crate::error::{ConfigError, MailError};

/// Async email transport abstraction.
#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Deliver one message. The error string is the transport's own
    /// human-readable cause.
    async fn send_email(&self, message: Message) -> Result<(), String>;
}

/// Production SMTP transport wrapping lettre's async transport.
pub struct SmtpTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpTransport {
    pub fn new(transport: AsyncSmtpTransport<Tokio1Executor>) -> Self {
        Self { inner: transport }
    }
}

#[async_trait]
impl EmailTransport for SmtpTransport {
    async fn send_email(&self, message: Message) -> Result<(), String> {
        self.inner
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

/// Sends assembled envelopes through an [`EmailTransport`].
pub struct Mailer {
    transport: Arc<dyn EmailTransport>,
}

impl Mailer {
    /// Build a mailer with a production SMTP transport from configuration.
    ///
    /// Resolves `${VAR}` placeholders in the credentials and wires TLS the
    /// way the config asks (none / starttls / tls, optional certificate
    /// verification).
    pub fn from_config(config: &SmtpConfig) -> Result<Self, ConfigError> {
        let username = config
            .username
            .as_deref()
            .map(resolve_env_vars)
            .transpose()
            .map_err(|e| ConfigError::InvalidSmtp(format!("smtp.username: {}", e)))?;

        let password = config
            .password
            .as_ref()
            .map(|p| resolve_env_vars(p.expose()))
            .transpose()
            .map_err(|e| ConfigError::InvalidSmtp(format!("smtp.password: {}", e)))?;

        let transport = build_transport(config, username, password)?;

        Ok(Self {
            transport: Arc::new(SmtpTransport::new(transport)),
        })
    }

    /// Build a mailer with an injected transport (tests, previews of the
    /// send path).
    pub fn with_transport(transport: Arc<dyn EmailTransport>) -> Self {
        Self { transport }
    }

    /// Send one envelope. Exactly one delivery attempt.
    ///
    /// # Errors
    /// * [`MailError::NoRecipients`] - the envelope's `to` list is empty;
    ///   nothing is handed to the transport.
    /// * [`MailError::BuildFailed`] - an address did not parse or the
    ///   message could not be composed.
    /// * [`MailError::SendFailed`] - the transport reported a delivery
    ///   failure.
    pub async fn send(&self, envelope: &Envelope) -> Result<(), MailError> {
        if envelope.to.is_empty() {
            return Err(MailError::NoRecipients);
        }

        let message = build_message(envelope)?;

        self.transport
            .send_email(message)
            .await
            .map_err(MailError::SendFailed)?;

        tracing::debug!(
            to = envelope.to.len(),
            subject = %envelope.subject,
            "email handed to transport"
        );
        Ok(())
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer").finish_non_exhaustive()
    }
}

/// Compose the lettre message for an envelope. The body is always HTML.
fn build_message(envelope: &Envelope) -> Result<Message, MailError> {
    let from_address: Address = envelope.from_address.parse().map_err(|e| {
        MailError::BuildFailed(format!(
            "invalid 'from' address '{}': {}",
            envelope.from_address, e
        ))
    })?;
    // An empty derived display name falls back to the bare address.
    let from_name = if envelope.from_name.is_empty() {
        None
    } else {
        Some(envelope.from_name.clone())
    };

    let mut builder = Message::builder()
        .from(Mailbox::new(from_name, from_address))
        .subject(envelope.subject.clone());

    for to in &envelope.to {
        builder = builder.to(parse_mailbox(to)?);
    }
    if let Some(cc) = &envelope.cc {
        for address in cc {
            builder = builder.cc(parse_mailbox(address)?);
        }
    }
    if let Some(bcc) = &envelope.bcc {
        for address in bcc {
            builder = builder.bcc(parse_mailbox(address)?);
        }
    }

    builder
        .header(ContentType::TEXT_HTML)
        .body(envelope.html_body.clone())
        .map_err(|e| MailError::BuildFailed(e.to_string()))
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse()
        .map_err(|e| MailError::BuildFailed(format!("invalid recipient '{}': {}", address, e)))
}

/// Build the SMTP transport based on TLS mode, credentials, and tls_verify.
fn build_transport(
    config: &SmtpConfig,
    username: Option<String>,
    password: Option<String>,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, ConfigError> {
    let host = &config.host;

    let tls_parameters = |verify: bool| -> Result<TlsParameters, ConfigError> {
        let mut builder = TlsParameters::builder(host.clone());
        if !verify {
            builder = builder.dangerous_accept_invalid_certs(true);
        }
        builder
            .build()
            .map_err(|e| ConfigError::InvalidSmtp(format!("TLS configuration error: {}", e)))
    };

    let builder = match config.tls {
        TlsMode::None => {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).port(config.port)
        }
        TlsMode::Starttls => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(config.port)
            .tls(Tls::Required(tls_parameters(config.tls_verify)?)),
        TlsMode::Tls => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(config.port)
            .tls(Tls::Wrapper(tls_parameters(config.tls_verify)?)),
    };

    let builder = match (username, password) {
        (Some(u), Some(p)) => builder.credentials(Credentials::new(u, p)),
        (Some(_), None) => {
            return Err(ConfigError::InvalidSmtp(
                "smtp.password required when smtp.username is set".to_string(),
            ));
        }
        (None, Some(_)) => {
            return Err(ConfigError::InvalidSmtp(
                "smtp.username required when smtp.password is set".to_string(),
            ));
        }
        (None, None) => builder,
    };

    Ok(builder.build())
}

/// Mock transport shared by unit tests across modules.
#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Captured email for verification.
    #[derive(Debug, Clone)]
    pub struct SentEmail {
        pub from: String,
        pub to: String,
        pub cc: Option<String>,
        pub bcc: Option<String>,
        pub subject: String,
        pub body: String,
    }

    /// Records outgoing messages; can be told to fail the next n sends.
    pub struct MockEmailTransport {
        sent_messages: Mutex<Vec<SentEmail>>,
        send_count: AtomicU32,
        fail_next_n: AtomicU32,
        error_message: Mutex<String>,
    }

    impl MockEmailTransport {
        pub fn new() -> Self {
            Self {
                sent_messages: Mutex::new(Vec::new()),
                send_count: AtomicU32::new(0),
                fail_next_n: AtomicU32::new(0),
                error_message: Mutex::new("mock failure".to_string()),
            }
        }

        pub fn fail_next(&self, count: u32, error: &str) {
            self.fail_next_n.store(count, Ordering::SeqCst);
            *self.error_message.lock().unwrap() = error.to_string();
        }

        pub fn send_count(&self) -> u32 {
            self.send_count.load(Ordering::SeqCst)
        }

        pub fn sent_emails(&self) -> Vec<SentEmail> {
            self.sent_messages.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EmailTransport for MockEmailTransport {
        async fn send_email(&self, message: Message) -> Result<(), String> {
            self.send_count.fetch_add(1, Ordering::SeqCst);

            if self.fail_next_n.load(Ordering::SeqCst) > 0 {
                self.fail_next_n.fetch_sub(1, Ordering::SeqCst);
                return Err(self.error_message.lock().unwrap().clone());
            }

            let header = |name: &str| message.headers().get_raw(name).map(|v| v.to_string());

            self.sent_messages.lock().unwrap().push(SentEmail {
                from: header("From").unwrap_or_default(),
                to: header("To").unwrap_or_default(),
                cc: header("Cc"),
                bcc: header("Bcc"),
                subject: header("Subject").unwrap_or_default(),
                body: String::from_utf8_lossy(&message.formatted()).to_string(),
            });

            Ok(())
        }
    }
}
