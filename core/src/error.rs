//! Error types for the shopping list client.

use thiserror::Error;

/// Errors produced while building requests, executing them, or parsing
/// responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a status other than the one expected.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// No response was received.
    #[error("transport failed: {0}")]
    TransportError(String),
}
