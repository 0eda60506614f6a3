//! Contact form fields and submission lifecycle.
//!
//! DESIGN
//! ======
//! `SubmitStatus` folds the in-flight flag into the status enum, so the form
//! is always in exactly one of idle, submitting, success, or error.
//! `MountGuard` ties an in-flight request to the lifetime of the component
//! that started it; results arriving after unmount are dropped.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::types::ContactPayload;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const ERROR_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// DOM id and form field name.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactForm {
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Enter the submitting state and return the trimmed payload to send.
    ///
    /// Returns `None` while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(ContactPayload {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        })
    }

    /// Apply the outcome of the in-flight submission.
    ///
    /// Success clears every field; failure keeps them so the visitor can retry.
    /// Outcomes arriving when nothing is in flight are ignored.
    pub fn finish<T, E>(&mut self, outcome: Result<T, E>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(_) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmitStatus::Success;
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() { "Sending..." } else { "Send Message" }
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&'static str> {
        match self.status {
            SubmitStatus::Success => Some(SUCCESS_MESSAGE),
            SubmitStatus::Error => Some(ERROR_MESSAGE),
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
        }
    }
}

/// Cancellation token released when the owning component is disposed.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
