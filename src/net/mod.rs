//! Networking for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the one place requests pick up the session's bearer header and
//! report access-denied responses back to it, and where credential sign-in
//! hands its token to the session. `error` maps HTTP outcomes to the messages
//! pages show.

pub mod api;
pub mod error;
pub mod types;

pub use api::ApiClient;
pub use error::ApiError;
pub use types::{AuthReply, Credentials, Registration};
