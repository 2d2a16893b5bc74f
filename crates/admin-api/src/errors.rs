//! Error types for administrative calls.
//!
//! There are two failure categories. A [`ValidationError`] is raised locally,
//! before any request is sent, and is fixed by correcting the input. Anything
//! else comes from the transport or the remote service and is handed back
//! unchanged inside [`ClientError::Transport`]; interpreting remote error
//! payloads is the caller's job.

use thiserror::Error;

/// A local precondition failed; no request was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `create_event_trigger` was called with neither a webhook URL nor an
    /// environment-variable reference to one.
    #[error("either webhook or webhook_from_env is required")]
    MissingWebhook,
}

/// Failure of a client call, generic over the transport's own error type.
#[derive(Debug, Error)]
pub enum ClientError<E>
where
    E: std::error::Error + 'static,
{
    /// Rejected locally before any I/O.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport failed (network error or non-success status).
    ///
    /// The transport's error is carried unchanged.
    #[error(transparent)]
    Transport(E),

    /// The request envelope could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The remote service answered, but the body did not have the expected shape.
    #[error("unexpected response body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl<E> ClientError<E>
where
    E: std::error::Error + 'static,
{
    /// Returns `true` if the call was rejected by a local precondition.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the transport error, if that is what failed.
    pub fn transport(&self) -> Option<&E> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}
