//! HTTP transport shared by every resource client.
//!
//! DESIGN
//! ======
//! One `Api` value owns the base URL, the `reqwest` client with its fixed
//! overall timeout, and the storage handle used to attach the bearer token.
//! Successful responses are unwrapped to their JSON payload; non-success
//! statuses map to [`ApiError::Status`], with 401 split out as
//! [`ApiError::Unauthorized`] so the application shell can force a logout.
//! The transport never writes session storage — the session store is the
//! only writer of those keys.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::{SessionStorage, TOKEN_KEY};

/// Fixed overall request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Error surfaced by the transport and passed through by resource clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, timeout, or body decode failure from the HTTP client.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend rejected the session (HTTP 401).
    #[error("unauthorized; the session is no longer valid")]
    Unauthorized,
    /// Any other non-success response.
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The stored token could not be encoded as a header value.
    #[error("invalid session token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),
}

/// Render the authorization header value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Shared request-issuing collaborator for the resource clients.
#[derive(Clone)]
pub struct Api {
    base_url: String,
    http: reqwest::Client,
    storage: Arc<dyn SessionStorage>,
}

impl Api {
    /// Build a transport for `base_url`, reading the bearer token from
    /// `storage` on every request.
    ///
    /// # Errors
    ///
    /// Fails only when the underlying HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        storage: Arc<dyn SessionStorage>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
            storage,
        })
    }

    /// Join `path` onto the base URL, tolerating a trailing slash.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.storage.get(TOKEN_KEY) {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer(&token))?);
        }
        Ok(headers)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let request = self
            .http
            .get(self.endpoint(path))
            .headers(self.auth_headers()?)
            .query(query);
        Self::execute(request).await
    }

    /// POST with query parameters and an empty body.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "POST");
        let request = self
            .http
            .post(self.endpoint(path))
            .headers(self.auth_headers()?)
            .query(query);
        Self::execute(request).await
    }

    /// POST with a JSON body.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "POST");
        let request = self
            .http
            .post(self.endpoint(path))
            .headers(self.auth_headers()?)
            .json(body);
        Self::execute(request).await
    }

    /// PUT with a JSON body.
    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "PUT");
        let request = self
            .http
            .put(self.endpoint(path))
            .headers(self.auth_headers()?)
            .json(body);
        Self::execute(request).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "DELETE");
        let request = self
            .http
            .delete(self.endpoint(path))
            .headers(self.auth_headers()?);
        Self::execute(request).await
    }

    async fn execute<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}
