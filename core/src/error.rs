//! Errors returned by `TodoClient` parse and build methods.
//!
//! 404 and 400 get dedicated variants because callers routinely branch on
//! them. Their `message` comes from the server's `{"error": ...}` body.

/// Errors returned by `TodoClient`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: the todo or route does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The server returned 400: the request body was rejected.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// The server returned some other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
