//! OAuth2 redirect handoff.
//!
//! After a provider login the backend sends the browser back to the portal
//! with `?token=...&firstName=...&lastName=...`. Only `token` matters for the
//! session; the names are shown on the "signed in" screen before navigating on.

use std::borrow::Cow;

/// Parameters carried by the OAuth2 redirect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OAuthRedirect {
    pub token: String,
    pub first_name: String,
    pub last_name: String,
}

impl OAuthRedirect {
    /// Parse a query string (leading `?` optional).
    ///
    /// Returns `None` when no non-empty `token` is present. The first
    /// occurrence of a repeated parameter wins.
    pub fn from_query(query: &str) -> Option<Self> {
        let mut redirect = Self::default();
        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let (Some(key), Some(value)) = (decode_component(raw_key), decode_component(raw_value)) else {
                continue;
            };
            let slot = match key.as_str() {
                "token" => &mut redirect.token,
                "firstName" => &mut redirect.first_name,
                "lastName" => &mut redirect.last_name,
                _ => continue,
            };
            if slot.is_empty() {
                *slot = value.trim().to_owned();
            }
        }
        (!redirect.token.is_empty()).then_some(redirect)
    }
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map(Cow::into_owned).ok()
}

#[cfg(test)]
#[path = "redirect_test.rs"]
mod tests;
