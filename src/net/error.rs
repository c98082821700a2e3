//! REST error taxonomy.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Outcome of a failed backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// 401: the bearer credential was rejected. The session is already gone.
    #[error("access denied")]
    AccessDenied,
    /// 402
    #[error("payment declined")]
    PaymentDeclined,
    /// 403
    #[error("forbidden")]
    Forbidden,
    /// 404
    #[error("not found")]
    NotFound,
    /// 400, with the backend's `message` when it sent one.
    #[error("bad request: {}", .message.as_deref().unwrap_or("no details"))]
    BadRequest { message: Option<String> },
    /// 5xx
    #[error("server error: {status}")]
    Server { status: u16 },
    #[error("unexpected status: {status}")]
    Status { status: u16 },
    /// The response arrived after the session it was sent under ended.
    #[error("response belongs to a previous session")]
    SessionChanged,
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// Sign-in was refused with 401.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// A sign-in reply succeeded but carried no token.
    #[error("sign-in reply carried no token")]
    MissingToken,
    /// Called outside the browser (SSR, tests).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify an HTTP status. `None` for 2xx.
    pub fn from_status(status: u16, message: Option<String>) -> Option<Self> {
        let err = match status {
            200..=299 => return None,
            0 => Self::Network("no response".to_owned()),
            400 => Self::BadRequest { message },
            401 => Self::AccessDenied,
            402 => Self::PaymentDeclined,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500..=599 => Self::Server { status },
            _ => Self::Status { status },
        };
        Some(err)
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied)
    }

    /// Message suitable for showing to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Unable to reach the server".to_owned(),
            Self::AccessDenied => "Session expired, please sign in again".to_owned(),
            Self::PaymentDeclined => "Payment declined, check your card details".to_owned(),
            Self::Forbidden => "Access denied".to_owned(),
            Self::NotFound => "Resource not found".to_owned(),
            Self::BadRequest { message } => message.clone().unwrap_or_else(|| "Invalid request".to_owned()),
            Self::Server { .. } => "Server error, please try again".to_owned(),
            Self::Status { status } => format!("Request failed ({status})"),
            Self::SessionChanged => "Session changed, please retry".to_owned(),
            Self::Decode(_) => "Unexpected response from server".to_owned(),
            Self::InvalidCredentials => "Incorrect email or password".to_owned(),
            Self::MissingToken => "Sign-in failed, please try again".to_owned(),
            Self::Unavailable => "Not available outside the browser".to_owned(),
        }
    }
}
