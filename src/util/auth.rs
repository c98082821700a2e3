//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages (dashboard, reservations, payments) call
//! [`install_unauth_redirect`] with the app's [`AuthState`] signal so every
//! route applies identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// Whether a route guard should send the visitor to the login page.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Where a guarded route should send the visitor, if anywhere.
pub fn unauth_redirect_target(state: &AuthState) -> Option<&'static str> {
    should_redirect_unauth(state).then_some(LOGIN_PATH)
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = unauth_redirect_target(&auth.get()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
