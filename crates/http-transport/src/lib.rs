//! HTTP transport for the Hasura admin API.
//!
//! Implements [`admin_api::AdminTransport`] over [`reqwest`]. Each call is a
//! single JSON `POST`; there is no retry and no back-off. Following the
//! convention of common JavaScript HTTP clients, a non-2xx status is an error
//! carrying the decoded reply body, so callers can inspect the remote
//! service's error payload.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Connection pooling, TLS, and timeouts are configured on
//! the wrapped [`reqwest::Client`]. The `admin-api` crate sees only
//! [`admin_api::AdminTransport`].

use admin_api::{AdminHeaders, AdminTransport, TransportResponse};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Failure of a single POST.
#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// The request could not be built or sent (DNS, connect, TLS, invalid header value, timeout).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote service answered with a non-success status.
    ///
    /// `body` is the decoded JSON reply, or a JSON string holding the raw text
    /// when the reply was not JSON.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: serde_json::Value },

    /// A non-success status arrived but its body could not be read.
    #[error("HTTP {status}: failed to read error body: {source}")]
    ErrorBody {
        status: u16,
        #[source]
        source: reqwest::Error,
    },

    /// A success status arrived but its body could not be read as JSON.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl HttpTransportError {
    /// Returns the HTTP status of a non-success reply.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::ErrorBody { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// [`AdminTransport`] backed by a shared [`reqwest::Client`].
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default [`reqwest::Client`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing client, e.g. one configured with a timeout.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AdminTransport for ReqwestTransport {
    type Error = HttpTransportError;

    async fn post(
        &self,
        url: &str,
        body: serde_json::Value,
        headers: &AdminHeaders,
    ) -> Result<TransportResponse, Self::Error> {
        let mut request = self.http.post(url).json(&body);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|source| HttpTransportError::Request {
            url: url.to_owned(),
            source,
        })?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "admin query answered");

        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|source| HttpTransportError::ErrorBody {
                    status: status.as_u16(),
                    source,
                })?;
            let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
            return Err(HttpTransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data = response
            .json::<serde_json::Value>()
            .await
            .map_err(HttpTransportError::Body)?;

        Ok(TransportResponse {
            status: status.as_u16(),
            data,
        })
    }
}
