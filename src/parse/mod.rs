//! # Parse Integration Module
//!
//! This module is the client for the Parse REST API that stores spots and
//! user accounts. It handles request authentication, dispatch over HTTP and
//! decoding of the JSON responses into domain types.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! SpotClient
//!     ├── Authentication (login, signup, session state)
//!     └── Spots (collection and single-object fetch)
//!     ↓
//! HTTP Layer (reqwest, JSON)
//!     ↓
//! Parse REST API
//! ```
//!
//! ## Authentication
//!
//! Every request carries HTTP Basic credentials made from the application
//! id and the JavaScript key (`<appID>:javascript-key=<jsKey>`). When either
//! key is empty the call fails with [`ApiError::AuthMissing`] before a
//! request is built. A session token returned by login or signup is kept in
//! memory and sent as `X-Parse-Session-Token` on later spot requests.
//!
//! ## Response Handling
//!
//! All endpoints share one decoding path:
//! 1. A body that is not JSON is [`ApiError::MalformedResponse`]
//! 2. A top-level `error` string is [`ApiError::ServerError`], whatever the status code
//! 3. Any other non-2xx response is [`ApiError::Transport`]
//! 4. Otherwise the endpoint-specific payload is extracted
//!
//! Nothing is retried. Each call resolves exactly once.
//!
//! ## Usage
//!
//! ```rust
//! let client = SpotClient::new(credentials);
//! client.login("alice", "secret").await?;
//! let spots = client.fetch_spots().await?;
//! ```

pub mod auth;
pub mod spots;

use reqwest::{Client, RequestBuilder, header::AUTHORIZATION};
use serde_json::Value;

use crate::{
    config,
    error::ApiError,
    management::SessionManager,
    types::Credentials,
    utils,
};

pub use spots::{decode_spot, decode_spots};

pub const SESSION_TOKEN_HEADER: &str = "X-Parse-Session-Token";

/// Client for the spot and user endpoints of a Parse server.
///
/// Cheap to clone; clones share the HTTP connection pool and the session.
#[derive(Debug, Clone)]
pub struct SpotClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) session: SessionManager,
}

impl SpotClient {
    /// Creates a client against the configured API base URL.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(&config::api_url(), credentials)
    }

    pub fn with_base_url(base_url: &str, credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.to_string(),
            credentials,
            session: SessionManager::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        utils::endpoint_url(&self.base_url, path)
    }

    /// Returns the `Authorization` header value, or `AuthMissing` when the
    /// application id or JavaScript key is not configured.
    pub(crate) fn authorization(&self) -> Result<String, ApiError> {
        let Credentials {
            application_id,
            javascript_key,
            ..
        } = &self.credentials;

        if application_id.is_empty() || javascript_key.is_empty() {
            return Err(ApiError::AuthMissing);
        }

        Ok(utils::basic_auth_header(application_id, javascript_key))
    }

    /// Sends an authenticated request and returns the decoded JSON body.
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        authorization: String,
    ) -> Result<Value, ApiError> {
        let response = request.header(AUTHORIZATION, authorization).send().await?;

        let status_error = response.error_for_status_ref().err();
        let body = response.text().await?;

        if let Some(err) = status_error {
            return match decode_body(&body) {
                Err(server @ ApiError::ServerError(_)) => Err(server),
                _ => Err(ApiError::Transport(err)),
            };
        }

        decode_body(&body)
    }
}

/// Parses a response body and turns a top-level `error` string into
/// [`ApiError::ServerError`].
pub fn decode_body(body: &str) -> Result<Value, ApiError> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

    if let Some(message) = json.get("error").and_then(Value::as_str) {
        return Err(ApiError::ServerError(message.to_string()));
    }

    Ok(json)
}
