//! Expiry evaluation against an explicit clock.
//!
//! Anything that cannot prove it is still valid is treated as expired.

use crate::codec::decode_claims;

/// Whether `token` is expired at `now` (seconds since the Unix epoch).
///
/// A token is expired from its `exp` second onward. Undecodable tokens and
/// tokens without a numeric `exp` are expired.
#[must_use]
pub fn is_expired_at(token: &str, now: i64) -> bool {
    match decode_claims(token).map(|claims| claims.expiry()) {
        Ok(Some(exp)) => now >= exp,
        Ok(None) | Err(_) => true,
    }
}

/// Seconds left before `token` expires, `0` when expired or malformed.
#[must_use]
pub fn remaining_at(token: &str, now: i64) -> u64 {
    let Ok(Some(exp)) = decode_claims(token).map(|claims| claims.expiry()) else {
        return 0;
    };
    u64::try_from(exp.saturating_sub(now)).unwrap_or(0)
}

#[cfg(test)]
#[path = "expiry_test.rs"]
mod tests;
