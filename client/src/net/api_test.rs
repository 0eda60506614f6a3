use super::*;

#[test]
fn contact_endpoint_path_is_stable() {
    assert_eq!(CONTACT_ENDPOINT, "/api/contact");
}

#[test]
fn contact_failed_message_formats_status() {
    assert_eq!(contact_failed_message(500), "contact request failed: 500");
    assert_eq!(contact_failed_message(502), "contact request failed: 502");
}

#[test]
fn contact_rejected_message_is_non_empty() {
    assert!(!contact_rejected_message().is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn submit_contact_is_unavailable_outside_the_browser() {
    let payload = ContactPayload::default();
    let result = submit_contact(&payload).await;
    assert_eq!(result, Err("not available on server".to_owned()));
}
