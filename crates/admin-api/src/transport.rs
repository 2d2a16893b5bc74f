//! The transport port.
//!
//! The client builds envelopes; an [`AdminTransport`] carries them. The
//! production implementation is `http_transport::ReqwestTransport`; tests
//! substitute an in-memory fake.

use async_trait::async_trait;

use crate::config::AdminHeaders;

/// Status and JSON body of a completed exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub data: serde_json::Value,
}

/// Issues one JSON POST and returns the decoded reply.
///
/// Implementations decide what counts as failure (for HTTP: network errors and
/// non-2xx statuses) and must not retry. Cancellation and timeouts are also the
/// implementation's concern.
#[async_trait]
pub trait AdminTransport: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn post(
        &self,
        url: &str,
        body: serde_json::Value,
        headers: &AdminHeaders,
    ) -> Result<TransportResponse, Self::Error>;
}
