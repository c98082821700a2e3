//! REST helper for the reservation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 signs the session out before the error reaches the caller, so pages
//! only have to show the message. Nothing is retried. Responses that arrive
//! after the session changed are rejected with [`ApiError::SessionChanged`]
//! and never sign out the newer session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{AuthReply, Credentials, Registration};
use crate::config::PortalConfig;
use crate::session::{KeyValueStore, SessionManager};

#[cfg(feature = "hydrate")]
use gloo_net::http::{Method, RequestBuilder, Response};

/// Bearer-authenticated JSON client rooted at the backend base URL.
pub struct ApiClient<S> {
    base_url: String,
    session: Rc<SessionManager<S>>,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(base_url: &str, session: Rc<SessionManager<S>>) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), session }
    }

    pub fn from_config(config: &PortalConfig, session: Rc<SessionManager<S>>) -> Self {
        Self::new(&config.api_base_url, session)
    }

    pub fn session(&self) -> &SessionManager<S> {
        &self.session
    }

    /// Absolute URL for `path` under the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET <path>` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, non-2xx statuses, stale
    /// responses and undecodable bodies.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.send(Method::GET, path, None::<&()>).await?;
            decode_json(&response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST <path>` with a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let response = self.send(Method::POST, path, Some(body)).await?;
            decode_json(&response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `PUT <path>` with a JSON body and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let response = self.send(Method::PUT, path, Some(body)).await?;
            decode_json(&response).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE <path>`, ignoring any reply body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send(Method::DELETE, path, None::<&()>).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// Exchange email and password for a token and sign in with it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] when the backend refuses the
    /// credentials, [`ApiError::MissingToken`] when the reply has no token,
    /// and otherwise as [`ApiClient::get_json`].
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let credentials = Credentials::new(email, password);
        let reply = self.post_json::<_, AuthReply>("auth/login", &credentials).await;
        self.accept_sign_in(reply)
    }

    /// Create an account. Returns the backend's confirmation message. The
    /// visitor still has to sign in afterwards.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`]. A rejected registration is
    /// [`ApiError::BadRequest`] carrying the backend's reason.
    pub async fn register(&self, registration: &Registration) -> Result<Option<String>, ApiError> {
        let reply: AuthReply = self.post_json("auth/register", registration).await?;
        Ok(reply.message)
    }

    /// Sign in with the token of a login reply.
    fn accept_sign_in(&self, reply: Result<AuthReply, ApiError>) -> Result<(), ApiError> {
        let reply = reply.map_err(|e| if e.is_access_denied() { ApiError::InvalidCredentials } else { e })?;
        let token = reply.into_token()?;
        self.session.login(&token);
        Ok(())
    }

    /// Apply the session contract to a response received for a request
    /// dispatched at session generation `dispatched`.
    #[cfg(any(test, feature = "hydrate"))]
    fn settle(&self, dispatched: u64, status: u16, message: Option<String>) -> Result<(), ApiError> {
        if self.session.generation() != dispatched {
            leptos::logging::log!("ignoring response from a previous session (status {status})");
            return Err(ApiError::SessionChanged);
        }
        match ApiError::from_status(status, message) {
            None => Ok(()),
            Some(err) => {
                if err.is_access_denied() {
                    self.session.handle_access_denied();
                }
                Err(err)
            }
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let mut builder = RequestBuilder::new(&self.endpoint(path)).method(method);
        for (name, value) in self.session.auth_header() {
            builder = builder.header(name, &value);
        }
        // Read after the header: building it may purge an expired token.
        let dispatched = self.session.generation();
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let message = if response.ok() { None } else { error_message(&response).await };
        self.settle(dispatched, response.status(), message)?;
        Ok(response)
    }
}

#[cfg(feature = "hydrate")]
async fn decode_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn error_message(response: &Response) -> Option<String> {
    let body = response.text().await.ok()?;
    parse_error_message(&body)
}

/// The backend reports failures as `{"message": "..."}`.
#[cfg(any(test, feature = "hydrate"))]
fn parse_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}
