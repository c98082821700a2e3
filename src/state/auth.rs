//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The value is always derived from the
//! [`SessionManager`](crate::session::SessionManager); it is never written to
//! storage itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::session::{AuthenticatedUser, KeyValueStore, SessionManager};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthenticatedUser>,
    pub loading: bool,
}

impl AuthState {
    /// State before the session has been inspected.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Snapshot the session. Stale tokens are purged as a side effect.
    pub fn from_session<S: KeyValueStore>(session: &SessionManager<S>) -> Self {
        Self { user: session.current_user(), loading: false }
    }

    /// Display name for headers: full name when known, else the email.
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        let full = format!("{} {}", user.first_name, user.last_name);
        let full = full.trim();
        Some(if full.is_empty() { user.email.clone() } else { full.to_owned() })
    }
}

/// Re-read the session into `auth`, e.g. after login or a 401.
pub fn refresh_auth<S: KeyValueStore>(auth: RwSignal<AuthState>, session: &SessionManager<S>) {
    auth.set(AuthState::from_session(session));
}
