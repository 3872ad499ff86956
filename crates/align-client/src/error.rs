//! Client error types.

use thiserror::Error;

/// Errors returned by [`crate::ApiClient`] operations.
///
/// Transport and HTTP failures are passed through as-is; the client never
/// retries or reinterprets them.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected response from {url}: {message}")]
    Parse { url: String, message: String },

    /// An authenticated call was made with no token in the session.
    #[error("not authenticated: log in first")]
    NotAuthenticated,

    /// The session token cannot be used as an HTTP header value.
    #[error("invalid session token: {0}")]
    InvalidToken(String),

    /// Node selection had nothing to choose from.
    #[error("no candidate nodes: {context}")]
    NoCandidates { context: String },

    /// A lookup that expects at least one result came back empty.
    #[error("{resource} not found for {query}")]
    NotFound { resource: String, query: String },
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the call failed for lack of valid credentials: the server
    /// answered 401/403, or no token was in the session so nothing was sent.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403)) || matches!(self, Self::NotAuthenticated)
    }
}
