//! JWT payload decoding and claim access.
//!
//! A token is `header.payload.signature`, each segment base64url without
//! padding. Only the payload is read. Some issuers pad their segments, so
//! trailing `=` is tolerated.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

/// Error returned by [`decode_claims`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The token does not have exactly three dot-separated segments.
    #[error("expected 3 token segments, found {0}")]
    Segments(usize),
    /// The payload segment is not valid base64url.
    #[error("failed to decode token payload: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The payload bytes are not valid JSON.
    #[error("failed to parse token payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload is valid JSON but not an object.
    #[error("token payload is not a JSON object")]
    NotAnObject,
}

/// Decoded token payload.
///
/// Keys keep the order they had in the payload; the last-resort id scan in
/// [`crate::resolve_user_id`] depends on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Wrap an already-decoded claim map.
    #[must_use]
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Look up a claim by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Registered subject claim (`sub`).
    #[must_use]
    pub fn subject(&self) -> Option<&Value> {
        self.get("sub")
    }

    /// Registered expiry claim (`exp`) in seconds since the Unix epoch.
    ///
    /// Fractional values are truncated toward negative infinity.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn expiry(&self) -> Option<i64> {
        let exp = self.get("exp")?;
        if let Some(secs) = exp.as_i64() {
            return Some(secs);
        }
        exp.as_f64().filter(|v| v.is_finite()).map(|v| v.floor() as i64)
    }

    /// First claim among `names` holding a string value.
    #[must_use]
    pub fn first_string(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.get(name).and_then(Value::as_str))
    }

    /// Iterate claims in payload order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Decode the payload segment of `token` into [`Claims`].
///
/// # Errors
///
/// Returns [`CodecError::Segments`] when the token is not three segments,
/// [`CodecError::Base64`] / [`CodecError::Json`] for undecodable payloads and
/// [`CodecError::NotAnObject`] when the payload is not a JSON object.
pub fn decode_claims(token: &str) -> Result<Claims, CodecError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(CodecError::Segments(segments.len()));
    }
    let bytes = URL_SAFE_NO_PAD.decode(segments[1].trim_end_matches('='))?;
    match serde_json::from_slice::<Value>(&bytes)? {
        Value::Object(map) => Ok(Claims(map)),
        _ => Err(CodecError::NotAnObject),
    }
}

/// Encode `payload` as an unsigned (`alg: none`) token.
///
/// The backend rejects these; they exist for fixtures and local tooling that
/// need a token the client can decode.
#[must_use]
pub fn encode_unsigned(payload: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.")
}

/// Extract the credential from an `Authorization: Bearer <token>` value.
#[must_use]
pub fn extract_bearer(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
#[path = "codec_test.rs"]
mod tests;
