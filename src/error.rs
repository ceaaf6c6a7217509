//! Error types for the DocuSign adapter.
//!
//! A single error enum covers the whole crate. The adapter itself raises
//! only [`DocusignError::AccountNotAccessible`]; everything else wraps a
//! failure from the transport or the JSON decoder.

use thiserror::Error;

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, DocusignError>;

/// Errors that can occur when using the DocuSign adapter.
#[derive(Error, Debug)]
pub enum DocusignError {
    /// The requested account id was absent from the login_information
    /// response. Fatal to `Client::login`, never retried.
    #[error("account {account_id} is not accessible with these credentials")]
    AccountNotAccessible {
        /// The account id that was requested.
        account_id: String,
    },

    /// HTTP transport error, propagated untouched.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote service answered with a non-success HTTP status.
    #[error("API error: HTTP status {status_code}")]
    Api {
        /// HTTP status code of the response.
        status_code: u16,
    },

    /// The response body did not decode into the expected shape.
    #[error("unexpected response shape: {0}")]
    Json(#[from] serde_json::Error),

    /// A request could not be constructed, e.g. credentials that cannot
    /// be encoded as a header value.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl DocusignError {
    /// Returns true if this is an authentication or authorization error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            DocusignError::AccountNotAccessible { .. }
                | DocusignError::Api { status_code: 401 }
                | DocusignError::Api { status_code: 403 }
        )
    }

    /// Returns the HTTP status code if available.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DocusignError::Api { status_code } => Some(*status_code),
            DocusignError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
