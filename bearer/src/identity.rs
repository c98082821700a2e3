//! Identity resolution from loosely-shaped claims.
//!
//! DESIGN
//! ======
//! Tokens reaching the portal come from more than one issuer: the password
//! login puts the email in `sub` and the numeric id in `userId`, while older
//! paths put the id in `sub` or `id`. There is no schema version, so the user
//! is resolved through a fixed priority list:
//!
//! 1. id: `sub`, then `userId`, then `id` (number or numeric string, > 0,
//!    integral), then the first numeric claim in `(0, 10000)`.
//! 2. email: `email` containing `@`, then `sub` containing `@`, then
//!    [`PLACEHOLDER_EMAIL`].
//! 3. names: first string among the usual spellings, else empty.
//!
//! Only a missing id is fatal. Email and names are cosmetic.

use serde::Serialize;
use serde_json::Value;

use crate::codec::Claims;

/// Email reported when no claim carries a usable address.
pub const PLACEHOLDER_EMAIL: &str = "unknown@email.com";

/// Exclusive upper bound of the last-resort id scan.
const SCAN_ID_LIMIT: f64 = 10_000.0;

const FIRST_NAME_CLAIMS: &[&str] = &["firstName", "first_name", "given_name"];
const LAST_NAME_CLAIMS: &[&str] = &["lastName", "last_name", "family_name"];

/// The signed-in user as derived from the current token.
///
/// Built fresh on every lookup and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Resolve a full user from `claims`, or `None` when no id can be found.
#[must_use]
pub fn resolve_user(claims: &Claims) -> Option<AuthenticatedUser> {
    let id = resolve_user_id(claims)?;
    Some(AuthenticatedUser {
        id,
        email: resolve_email(claims),
        first_name: claims.first_string(FIRST_NAME_CLAIMS).unwrap_or_default().to_owned(),
        last_name: claims.first_string(LAST_NAME_CLAIMS).unwrap_or_default().to_owned(),
    })
}

/// Resolve the numeric user id.
///
/// The final fallback accepts any small positive number in the payload, which
/// can pick up unrelated claims such as a numeric role. Tokens from the
/// current backend always carry `userId`, so the scan only matters for legacy
/// tokens.
#[must_use]
pub fn resolve_user_id(claims: &Claims) -> Option<u64> {
    ["sub", "userId", "id"]
        .iter()
        .find_map(|name| claims.get(name).and_then(coerce_id))
        .or_else(|| scan_for_id(claims))
}

/// Resolve the email, falling back to [`PLACEHOLDER_EMAIL`].
#[must_use]
pub fn resolve_email(claims: &Claims) -> String {
    ["email", "sub"]
        .iter()
        .filter_map(|name| claims.get(name).and_then(Value::as_str))
        .find(|value| value.contains('@'))
        .unwrap_or(PLACEHOLDER_EMAIL)
        .to_owned()
}

fn coerce_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(id) => (id > 0).then_some(id),
            None => n.as_f64().and_then(positive_integral),
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) => positive_integral(v),
            Err(_) => None,
        },
        _ => None,
    }
}

fn scan_for_id(claims: &Claims) -> Option<u64> {
    claims.iter().find_map(|(_, value)| match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|v| *v < SCAN_ID_LIMIT)
            .and_then(positive_integral),
        _ => None,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn positive_integral(value: f64) -> Option<u64> {
    if value.is_finite() && value > 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
