//! Contact submission service.
//!
//! Renders a visitor's message into the notification email and hands it to
//! the configured mailer. Submissions are forwarded as given: every field
//! may be empty or arbitrarily long, and the only failure is delivery.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a [`ContactError`]; the route layer maps it to a status
//! code and never exposes provider details to the visitor.

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

pub use folio_client::net::types::ContactPayload;
use uuid::Uuid;

use super::mailer::{MailError, OutgoingEmail};
use crate::state::AppState;

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_message.html");

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Delivery(#[from] MailError),
}

/// A submission with surrounding whitespace trimmed from each field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn from_payload(payload: &ContactPayload) -> Self {
        Self {
            name: payload.name.trim().to_owned(),
            email: payload.email.trim().to_owned(),
            message: payload.message.trim().to_owned(),
        }
    }
}

/// `Reply-To` address for the notification, when the visitor's email is
/// usable as one. A value that is not is still shown in the body.
#[must_use]
pub fn reply_address(email: &str) -> Option<String> {
    let candidate = email.trim();
    let (local, domain) = candidate.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    if candidate.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return None;
    }
    Some(candidate.to_owned())
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Subject line for the owner's inbox. Whitespace runs (including newlines)
/// collapse to single spaces.
#[must_use]
pub fn contact_subject(message: &ContactMessage) -> String {
    let name = message.name.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return "Portfolio contact".to_owned();
    }
    format!("Portfolio contact from {name}")
}

#[must_use]
pub fn render_contact_email(message: &ContactMessage, submission_id: Uuid) -> String {
    let name = escape_html(&message.name);
    let email = escape_html(&message.email);
    let body = escape_html(&message.message)
        .replace("\r\n", "\n")
        .replace('\n', "<br>");
    let id = submission_id.to_string();
    fill_template(
        CONTACT_TEMPLATE,
        &[
            ("NAME", name.as_str()),
            ("EMAIL", email.as_str()),
            ("MESSAGE", body.as_str()),
            ("SUBMISSION_ID", id.as_str()),
        ],
    )
}

/// Single-pass `{{KEY}}` substitution. Inserted values are never rescanned,
/// so visitor text containing placeholder syntax stays literal.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let replacement = after.find("}}").and_then(|end| {
            values
                .iter()
                .find(|(key, _)| *key == &after[..end])
                .map(|(_, value)| (end, *value))
        });
        match replacement {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Deliver one submission to the site owner.
///
/// Returns the id assigned to the submission for log correlation.
///
/// # Errors
///
/// Returns [`ContactError::Delivery`] when the mailer fails.
pub async fn submit(state: &AppState, request: &ContactPayload) -> Result<Uuid, ContactError> {
    let message = ContactMessage::from_payload(request);

    let submission_id = Uuid::new_v4();
    let email = OutgoingEmail {
        subject: contact_subject(&message),
        html: render_contact_email(&message, submission_id),
        reply_to: reply_address(&message.email),
    };
    state.mailer.deliver(&email).await?;

    tracing::info!(
        %submission_id,
        mailer = state.mailer.name(),
        message_chars = message.message.chars().count(),
        "contact message delivered"
    );
    Ok(submission_id)
}
