//! Error types for the customer API client.
//!
//! # Design
//! Every failure that reaches a page is an `ErrorInfo`: a display message, the
//! HTTP status when one was received, and the kind of failure. Pages only ever
//! render the message, so `Display` prints nothing else. "Not found" is not an
//! error here; a successful fetch with no record is a view state.

use thiserror::Error;

/// Which layer produced an `ErrorInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition failed before any request was sent.
    Validation,
    /// The request never produced a usable response (network failure or an
    /// unreadable body).
    Transport,
    /// The server answered with a non-2xx status.
    Http,
}

/// Uniform error value surfaced to pages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ErrorInfo {
    pub message: String,
    pub status: Option<u16>,
    pub kind: ErrorKind,
}

impl ErrorInfo {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            kind: ErrorKind::Validation,
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            kind: ErrorKind::Transport,
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
            kind: ErrorKind::Http,
        }
    }
}

/// Failures raised by a `Transport` before a response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The request could not be constructed (bad URL, bad header).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<TransportError> for ErrorInfo {
    fn from(err: TransportError) -> Self {
        ErrorInfo::transport(err.to_string())
    }
}

impl From<serde_json::Error> for ErrorInfo {
    fn from(err: serde_json::Error) -> Self {
        ErrorInfo::transport(format!("malformed response: {err}"))
    }
}
