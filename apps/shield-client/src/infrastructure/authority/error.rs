//! Authority adapter errors.

use crate::application::ports::RemoteError;

/// Errors produced by the government server adapter.
#[derive(Debug, thiserror::Error)]
pub enum AuthorityError {
    /// The HTTP request could not be completed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be interpreted.
    #[error("unexpected response: {detail}")]
    UnexpectedResponse {
        /// What was wrong with the response.
        detail: String,
    },

    /// The server explicitly refused the request.
    #[error("request refused: {reason}")]
    Refused {
        /// The server's stated reason.
        reason: String,
    },
}

impl From<AuthorityError> for RemoteError {
    fn from(err: AuthorityError) -> Self {
        match err {
            AuthorityError::Http(inner) => Self::Transport {
                message: inner.to_string(),
            },
            AuthorityError::UnexpectedResponse { detail } => Self::Malformed { detail },
            AuthorityError::Refused { reason } => Self::Rejected { reason },
        }
    }
}
