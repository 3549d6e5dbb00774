//! Thin JSON-over-HTTP client for the session-cookie API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, cookies included.
//! Elsewhere: every call fails with [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failed call is logged here once with method and path, so callers can
//! collapse errors into user-facing messages without logging again. There is no
//! retry and no timeout; a hung request stays pending until the browser gives up.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;

/// Headers attached to every request.
pub const DEFAULT_HEADERS: &[(&str, &str)] =
    &[("Content-Type", "application/json"), ("ngrok-skip-browser-warning", "true")];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// HTTP client bound to an API base URL. Cheap to clone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into().trim_end_matches('/').to_owned() }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    /// Absolute or same-origin URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// `POST` a JSON body and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let result = self.send_post(path, body).await;
        log_failure("POST", path, &result);
        result
    }

    /// `GET` and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn get_json<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let result = self.send_get(path).await;
        log_failure("GET", path, &result);
        result
    }

    #[cfg(feature = "csr")]
    fn request(&self, method: gloo_net::http::Method, path: &str) -> gloo_net::http::RequestBuilder {
        let mut builder = gloo_net::http::RequestBuilder::new(&self.url(path))
            .method(method)
            .credentials(web_sys::RequestCredentials::Include);
        for (name, value) in DEFAULT_HEADERS {
            builder = builder.header(name, value);
        }
        builder
    }

    async fn send_post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let request = self
                .request(gloo_net::http::Method::POST, path)
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?;
            dispatch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn send_get<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let request = self
                .request(gloo_net::http::Method::GET, path)
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            dispatch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn dispatch<R: DeserializeOwned>(request: gloo_net::http::Request) -> Result<R, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

fn log_failure<R>(method: &str, path: &str, result: &Result<R, ApiError>) {
    if let Err(e) = result {
        log::error!("API error: {method} {path}: {e}");
    }
}
