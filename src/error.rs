//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// 2xx transport, but the response envelope carried a non-200 `meta.code`.
    #[error("Envelope code {code}: {message:?}")]
    Envelope { code: u16, message: Option<String> },

    /// Non-2xx transport. `message` is the server's own envelope message
    /// when the error body parsed as one.
    #[error("Server error {status}: {message:?}")]
    Status { status: u16, message: Option<String> },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Broad category of a failed fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// 2xx transport, envelope `meta.code != 200`.
    Envelope,
    /// Non-2xx transport with a server response.
    Server,
    /// Transport failure with no server response.
    Connection,
    /// Client-side failure: malformed request, undecodable payload.
    Client,
}

/// The user-facing outcome of a failed fetch cycle.
///
/// Callers only ever see this structured pair via `ViewState::error`; raw
/// `HttpError`s never cross the watcher boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

/// Message shown when the server could not be reached at all.
pub const NO_RESPONSE_MESSAGE: &str = "No response from server. Please check your connection.";

/// Message shown for a non-2xx response without a usable envelope message.
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred";

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Classify an HTTP-layer failure into its user-facing message.
    ///
    /// `envelope_fallback` is used when the envelope carried no message
    /// (each endpoint has its own generic wording).
    pub fn classify(err: &HttpError, envelope_fallback: &str) -> Self {
        match err {
            HttpError::Envelope { message, .. } => Self::new(
                FetchErrorKind::Envelope,
                message
                    .clone()
                    .unwrap_or_else(|| envelope_fallback.to_string()),
            ),
            HttpError::Status { message, .. } => Self::new(
                FetchErrorKind::Server,
                message
                    .clone()
                    .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string()),
            ),
            HttpError::Reqwest(e) => {
                if e.is_decode() || e.is_builder() {
                    Self::new(FetchErrorKind::Client, e.to_string())
                } else {
                    // Connect refused, timeout, request aborted mid-flight:
                    // the server never answered.
                    Self::new(FetchErrorKind::Connection, NO_RESPONSE_MESSAGE)
                }
            }
            HttpError::Decode(e) => Self::new(FetchErrorKind::Client, e.to_string()),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}

impl std::error::Error for FetchError {}
