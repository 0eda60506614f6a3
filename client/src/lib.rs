//! # folio-client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! Pages and section components live alongside the interaction math they
//! drive: pointer tilt for cards (`util::tilt`), scroll-linked parallax for
//! the hero (`util::parallax`), and the contact form lifecycle
//! (`state::contact`). The same crate is compiled with `ssr` into the server
//! and with `hydrate` into the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
