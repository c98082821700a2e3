//! Browser session layer for the reservation portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages for hotels, transports, payments and reservations live elsewhere and
//! talk to this crate through three seams: [`session::SessionManager`] for
//! "who is signed in", [`net::ApiClient`] for bearer-authenticated REST calls,
//! and [`state::auth::AuthState`] for reactive rendering and route guards.
//!
//! Browser-only behavior is gated behind the `hydrate` feature; without it the
//! session reads as signed out and network calls report
//! [`net::ApiError::Unavailable`].

pub mod config;
pub mod net;
pub mod session;
pub mod state;
pub mod util;

/// Install panic and `log` forwarding to the browser console.
///
/// Call once from the page bootstrap before mounting the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
}
