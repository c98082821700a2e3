//! Request and reply bodies of the `/auth` endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.trim().to_owned(), password: password.to_owned() }
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// ISO country code, e.g. `MA`.
    pub country: String,
    pub password: String,
}

/// Reply of both `/auth` endpoints. Login fills `token`, register fills
/// `message`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthReply {
    /// The issued token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when the reply carries no non-blank
    /// token.
    pub fn into_token(self) -> Result<String, ApiError> {
        self.token.filter(|t| !t.trim().is_empty()).ok_or(ApiError::MissingToken)
    }
}
