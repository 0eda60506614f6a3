use std::sync::Arc;

use super::*;
use crate::services::mailer::MailError;
use crate::state::test_helpers::{MockMailer, test_app_state};

fn body(name: &str, email: &str, message: &str) -> Json<ContactPayload> {
    Json(ContactPayload { name: name.into(), email: email.into(), message: message.into() })
}

// =============================================================================
// contact_error_to_status
// =============================================================================

#[test]
fn delivery_failure_maps_to_bad_gateway() {
    let err = ContactError::Delivery(MailError::Delivery("down".into()));
    assert_eq!(contact_error_to_status(err), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// handler
// =============================================================================

#[tokio::test]
async fn handler_returns_ok_with_submission_id() {
    let mailer = Arc::new(MockMailer::default());
    let state = test_app_state(mailer.clone());

    let Json(resp) = submit_contact(State(state), body("Ada", "ada@example.com", "Hello"))
        .await
        .unwrap();

    assert!(resp.ok);
    let id = resp.id.expect("id present");
    assert!(uuid::Uuid::parse_str(&id).is_ok());
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn handler_accepts_any_filled_form() {
    let mailer = Arc::new(MockMailer::default());
    let state = test_app_state(mailer.clone());
    let long_message = "x".repeat(20_000);

    let resp = submit_contact(State(state), body("Dylan", "not an address", &long_message)).await;

    assert!(resp.is_ok());
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn handler_never_throttles_repeat_submissions() {
    let mailer = Arc::new(MockMailer::default());
    let state = test_app_state(mailer.clone());

    for n in 0..10 {
        let resp = submit_contact(State(state.clone()), body("Dylan", "dylan@example.com", "Same again")).await;
        assert!(resp.is_ok(), "submission {n} should be delivered");
    }
    assert_eq!(mailer.sent().len(), 10);
}

#[tokio::test]
async fn handler_maps_mailer_failure_to_bad_gateway() {
    let state = test_app_state(Arc::new(MockMailer::failing()));
    let status = submit_contact(State(state), body("Ada", "a@b.c", "Hello"))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
