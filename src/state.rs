//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the contact mailer; the site itself is stateless.

use std::sync::Arc;

use crate::services::mailer::ContactMailer;

/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn ContactMailer>,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: Arc<dyn ContactMailer>) -> Self {
        Self { mailer }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::services::mailer::{MailError, OutgoingEmail};

    /// Mailer that records every message, or fails every delivery.
    #[derive(Default)]
    pub struct MockMailer {
        pub sent: Mutex<Vec<OutgoingEmail>>,
        pub fail: bool,
    }

    impl MockMailer {
        #[must_use]
        pub fn failing() -> Self {
            Self { sent: Mutex::new(Vec::new()), fail: true }
        }

        pub fn sent(&self) -> Vec<OutgoingEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ContactMailer for MockMailer {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn deliver(&self, email: &OutgoingEmail) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::Delivery("mock provider unavailable".into()));
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    /// Test state delivering through the given mailer.
    #[must_use]
    pub fn test_app_state(mailer: Arc<MockMailer>) -> AppState {
        AppState::new(mailer)
    }
}
