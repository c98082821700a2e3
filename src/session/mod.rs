//! Browser session: the single owner of the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every feature service (hotels, transports, payments, reservations) builds
//! its `Authorization` header and reacts to access-denied responses through
//! [`SessionManager`]. Nothing else reads or writes the stored token.
//!
//! DESIGN
//! ======
//! Only the raw token is persisted. Claims are decoded again on each check, so
//! they can never drift from the token. An expired or undecodable token is
//! purged the first time it is looked at instead of waiting for the backend to
//! reject it.
//!
//! TRADE-OFFS
//! ==========
//! There is no refresh flow: an expired token means a full sign-in. Requests
//! already in flight at logout are not aborted; [`SessionManager::generation`]
//! lets the REST layer recognise their responses and discard them.

mod redirect;
mod store;

use std::cell::Cell;
use std::collections::BTreeMap;

pub use bearer::AuthenticatedUser;
pub use redirect::OAuthRedirect;
pub use store::{KeyValueStore, LocalStorage, MemoryStore, StorageError, TokenStore};

use crate::config::PortalConfig;
use crate::util::clock::now_secs;

pub const AUTHORIZATION: &str = "Authorization";

/// Observable session state. There is no intermediate refreshing state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

/// Owns the token lifecycle for one browser tab.
#[derive(Debug)]
pub struct SessionManager<S> {
    tokens: TokenStore<S>,
    generation: Cell<u64>,
}

impl SessionManager<LocalStorage> {
    /// Session backed by `window.localStorage` under the configured key.
    pub fn browser(config: &PortalConfig) -> Self {
        Self::new(LocalStorage, config.token_storage_key.clone())
    }
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { tokens: TokenStore::new(store, key), generation: Cell::new(0) }
    }

    pub fn token_store(&self) -> &TokenStore<S> {
        &self.tokens
    }

    /// Counter bumped whenever the stored token changes hands (login,
    /// logout, purge). Responses dispatched under an older value are stale.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Store a new token as given. No validation happens until the next check.
    pub fn login(&self, token: &str) {
        self.tokens.save(token);
        self.bump();
    }

    /// Drop the session. Calling it without a session is a no-op and leaves
    /// the store untouched.
    pub fn logout(&self) {
        let Some(stored) = self.tokens.raw() else {
            return;
        };
        if !stored.trim().is_empty() {
            self.bump();
        }
        self.tokens.clear();
    }

    /// Sign out after the backend rejected the credential.
    pub fn handle_access_denied(&self) {
        if self.tokens.load().is_some() {
            leptos::logging::log!("backend denied access; signing out");
        }
        self.logout();
    }

    /// Log in from an OAuth2 redirect query. Leaves the session untouched and
    /// returns `None` when the query carries no token.
    pub fn login_from_redirect(&self, query: &str) -> Option<OAuthRedirect> {
        let redirect = OAuthRedirect::from_query(query)?;
        self.login(&redirect.token);
        Some(redirect)
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(now_secs())
    }

    /// Token present and unexpired at `now`. A stale token is purged.
    pub fn is_authenticated_at(&self, now: i64) -> bool {
        self.valid_token_at(now).is_some()
    }

    pub fn state(&self) -> SessionState {
        self.state_at(now_secs())
    }

    pub fn state_at(&self, now: i64) -> SessionState {
        if self.is_authenticated_at(now) {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    pub fn current_user(&self) -> Option<AuthenticatedUser> {
        self.current_user_at(now_secs())
    }

    /// Resolve the signed-in user, or `None` when unauthenticated or when the
    /// token carries no usable id.
    pub fn current_user_at(&self, now: i64) -> Option<AuthenticatedUser> {
        let token = self.valid_token_at(now)?;
        let claims = match bearer::decode_claims(&token) {
            Ok(claims) => claims,
            Err(e) => {
                leptos::logging::warn!("session token became undecodable: {e}");
                return None;
            }
        };
        let user = bearer::resolve_user(&claims);
        if user.is_none() {
            leptos::logging::warn!("session token carries no usable user id");
        }
        user
    }

    pub fn auth_header(&self) -> BTreeMap<&'static str, String> {
        self.auth_header_at(now_secs())
    }

    /// `Authorization: Bearer <token>` when authenticated, otherwise empty.
    pub fn auth_header_at(&self, now: i64) -> BTreeMap<&'static str, String> {
        self.valid_token_at(now)
            .map(|token| (AUTHORIZATION, format!("Bearer {token}")))
            .into_iter()
            .collect()
    }

    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in_at(now_secs())
    }

    /// Seconds of validity left, `None` when unauthenticated.
    pub fn expires_in_at(&self, now: i64) -> Option<u64> {
        self.valid_token_at(now).map(|token| bearer::remaining_at(&token, now))
    }

    fn valid_token_at(&self, now: i64) -> Option<String> {
        let token = self.tokens.raw()?;
        if token.trim().is_empty() {
            leptos::logging::warn!("discarding blank session token");
            self.logout();
            return None;
        }
        if !bearer::is_expired_at(&token, now) {
            return Some(token);
        }
        match bearer::decode_claims(&token) {
            Ok(_) => leptos::logging::log!("session token expired; signing out"),
            Err(e) => leptos::logging::warn!("discarding malformed session token: {e}"),
        }
        self.logout();
        None
    }

    fn bump(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
