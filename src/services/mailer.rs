//! Contact message delivery backends.
//!
//! `ResendMailer` sends through the Resend API when mail is configured;
//! `LogMailer` accepts every message and writes it to the trace log so the
//! site works end to end in development without credentials.

#[cfg(test)]
#[path = "mailer_test.rs"]
mod tests;

use std::sync::Arc;

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::ResendConfig;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// A rendered message ready for delivery to the site owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub subject: String,
    pub html: String,
    /// Visitor address, so the owner can answer directly.
    pub reply_to: Option<String>,
}

/// Provider-neutral async trait for delivery. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ContactMailer: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Deliver one message.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Delivery`] if the provider rejects or cannot be reached.
    async fn deliver(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Pick the backend for the current configuration.
#[must_use]
pub fn from_config(mail: Option<&ResendConfig>) -> Arc<dyn ContactMailer> {
    match mail {
        Some(cfg) => Arc::new(ResendMailer::new(cfg)),
        None => Arc::new(LogMailer),
    }
}

// =============================================================================
// RESEND
// =============================================================================

pub struct ResendMailer {
    client: Resend,
    from: String,
    to: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(cfg: &ResendConfig) -> Self {
        Self { client: Resend::new(&cfg.api_key), from: cfg.from.clone(), to: cfg.to.clone() }
    }
}

#[async_trait::async_trait]
impl ContactMailer for ResendMailer {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn deliver(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let to = [self.to.as_str()];
        let mut message = CreateEmailBaseOptions::new(&self.from, to, &email.subject).with_html(&email.html);
        if let Some(reply_to) = &email.reply_to {
            message = message.with_reply(reply_to);
        }
        self.client
            .emails
            .send(message)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        Ok(())
    }
}

// =============================================================================
// LOG
// =============================================================================

pub struct LogMailer;

#[async_trait::async_trait]
impl ContactMailer for LogMailer {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn deliver(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        tracing::info!(
            subject = %email.subject,
            reply_to = ?email.reply_to,
            html_bytes = email.html.len(),
            "contact message (log mailer, not delivered)"
        );
        tracing::debug!(html = %email.html, "contact message body");
        Ok(())
    }
}
