//! Fetch error types.
//!
//! [`RemoteError`] is what a remote call fails with before classification.
//! [`FetchError`] is what escapes the fetch boundary: everything the
//! classifier could not reduce to an [`ErrorKind`](encore_core::ErrorKind).

use encore_core::CredentialError;
use thiserror::Error;

// ============================================================================
// Remote Error
// ============================================================================

/// Failure of a single remote call.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be parsed.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Domain not allowed.
    #[error("Domain not allowed: {0}")]
    DomainNotAllowed(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Anything else.
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl RemoteError {
    /// Returns the HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Status {
                status: status.as_u16(),
                url: err.url().map(ToString::to_string).unwrap_or_default(),
            };
        }
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::InvalidUrl(err.to_string())
        } else if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() {
            Self::Network(err.to_string())
        } else {
            Self::Unexpected(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<url::ParseError> for RemoteError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

// ============================================================================
// Fetch Error
// ============================================================================

/// Error propagated out of the fetch boundary.
///
/// Classified failures never appear here; they are returned as data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No valid bearer token could be obtained.
    #[error("Could not obtain a bearer token: {0}")]
    Credential(#[from] CredentialError),

    /// The remote call failed in a way no error kind describes.
    #[error("Unclassified failure: {0}")]
    Unclassified(#[source] RemoteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = RemoteError::Status {
            status: 404,
            url: "https://api.example.com/v1/albums/x".into(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(RemoteError::Network("reset".into()).status(), None);
    }

    #[test]
    fn test_json_error_is_decode() {
        let err = serde_json::from_str::<u32>("{").unwrap_err();
        assert!(matches!(RemoteError::from(err), RemoteError::Decode(_)));
    }

    #[test]
    fn test_credential_error_converts() {
        let err: FetchError = CredentialError::MissingClientCredentials.into();
        assert!(err.to_string().contains("bearer token"));
    }
}
