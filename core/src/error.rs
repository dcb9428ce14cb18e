//! Error types for the blog post API client.
//!
//! 404 and 400 get their own variants because callers usually need to tell
//! "no such post" and "the server rejected my input" apart from an unexpected
//! status. Everything else lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `BlogClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server returned 404; the requested blog post does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400; the request body failed validation.
    #[error("bad request: {body}")]
    BadRequest { body: String },

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
