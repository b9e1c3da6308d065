//! Unified error types for versebench.
//!
//! Only a non-success HTTP status is absorbed locally (as an empty lyrics
//! string, see `versebench-client`); everything below propagates to the
//! caller.

/// Unified error types for the versebench workspace.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Lyrics page address could not be constructed or parsed.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// DNS, connection, timeout, or body-read failure in the HTTP transport.
    #[error("TRANSPORT_FAILED: {0}")]
    TransportFailed(String),

    /// Response body exceeds the configured size cap.
    #[error("FETCH_TOO_LARGE: {0}")]
    FetchTooLarge(String),

    /// HTML parsing or selector evaluation failed.
    #[error("EXTRACT_FAILED: {0}")]
    ExtractFailed(String),

    /// Parsed document contains no container elements to extract from.
    #[error("NO_CONTENT: {0}")]
    NoContent(String),
}
