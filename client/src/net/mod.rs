//! Networking for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema accepted by `POST /api/contact`; `api`
//! performs the request from the browser.

pub mod api;
pub mod types;
