//! REST helpers for the contact endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since submission only
//! happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` for logging; the form only
//! distinguishes success from failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::ContactResponse;
use super::types::ContactPayload;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16) -> String {
    format!("contact request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn contact_rejected_message() -> String {
    "contact request rejected by server".to_owned()
}

/// Send a contact message via `POST /api/contact`.
///
/// Returns the server-assigned submission id when one is provided.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent, the server responds
/// with a non-OK status, or the body does not confirm acceptance.
pub async fn submit_contact(payload: &ContactPayload) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(contact_failed_message(resp.status()));
        }
        let body: ContactResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err(contact_rejected_message());
        }
        Ok(body.id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}
