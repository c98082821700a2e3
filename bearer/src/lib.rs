//! Bearer token model shared by the portal client.
//!
//! This crate owns everything that can be said about a token without a browser:
//! payload decoding, claim access, identity resolution and expiry evaluation.
//! Time-dependent functions take `now` explicitly so callers choose the clock.
//!
//! TRADE-OFFS
//! ==========
//! Signatures are never verified here. The backend is the only verifier; the
//! client only reads claims to drive UI state and to purge stale tokens early.

mod codec;
mod expiry;
mod identity;

pub use codec::{Claims, CodecError, decode_claims, encode_unsigned, extract_bearer};
pub use expiry::{is_expired_at, remaining_at};
pub use identity::{AuthenticatedUser, PLACEHOLDER_EMAIL, resolve_email, resolve_user, resolve_user_id};
