//! Error types for the wire boundary.

use thiserror::Error;

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding solver documents.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The inbound text is not a well-formed solution document. Covers
    /// invalid JSON as well as structurally wrong payloads such as a
    /// missing `solution` array or an entry without an id.
    #[error("malformed solution document: {0}")]
    MalformedDocument(String),

    /// The queue snapshot could not be rendered as JSON.
    #[error("failed to encode queue document: {0}")]
    Encode(String),
}
