//! Error types for the task API client.
//!
//! # Design
//! Only hard failures live here. An application-level failure (a 2xx
//! response whose envelope status is not `"OK"`) is not an error — it is
//! delivered as a normal `CommonResponse` and the component decides what to
//! show. `Transport` gets a dedicated variant because the component renders
//! it the same way as any other hard failure but tests frequently assert on
//! the distinction.

use std::fmt;

use crate::http::TransportError;

/// Hard failures surfaced by `TaskService` and the transport seam.
#[derive(Debug)]
pub enum ApiError {
    /// The network round trip itself failed; no response exists.
    Transport(TransportError),

    /// The server answered with a non-2xx status.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the envelope.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "{err}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err)
    }
}
