//! Core error types for Encore.
//!
//! Two families live here:
//!
//! - [`ErrorKind`] is the closed taxonomy every classified catalog failure is
//!   reduced to. It is a value, not an error in the `std::error::Error` sense:
//!   it travels inside [`FetchedResource::Failure`](crate::FetchedResource) and
//!   [`LoadResult::Error`](crate::LoadResult).
//! - [`CredentialError`] is an ordinary error that propagates to the caller
//!   unclassified.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Error Kind
// ============================================================================

/// Classified failure of a catalog request.
///
/// Only the classifier in `encore-fetch` produces these; everything else
/// matches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// HTTP 401.
    BadOrExpiredToken,
    /// HTTP 403.
    BadOauthRequest,
    /// HTTP 400.
    InvalidRequest,
    /// HTTP 429.
    RateLimitExceeded,
    /// HTTP 404.
    ResourceNotFound,
    /// Any other HTTP status.
    UnknownError,
    /// The request never produced a response.
    NetworkConnectionFailure,
    /// The response body could not be parsed.
    DeserializationError,
}

impl ErrorKind {
    /// Maps an HTTP status code to its error kind.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 => Self::BadOrExpiredToken,
            403 => Self::BadOauthRequest,
            404 => Self::ResourceNotFound,
            429 => Self::RateLimitExceeded,
            _ => Self::UnknownError,
        }
    }

    /// Returns all error kinds.
    pub fn all() -> &'static [ErrorKind] {
        &[
            Self::BadOrExpiredToken,
            Self::BadOauthRequest,
            Self::InvalidRequest,
            Self::RateLimitExceeded,
            Self::ResourceNotFound,
            Self::UnknownError,
            Self::NetworkConnectionFailure,
            Self::DeserializationError,
        ]
    }

    /// Returns the stable identifier of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadOrExpiredToken => "BAD_OR_EXPIRED_TOKEN",
            Self::BadOauthRequest => "BAD_OAUTH_REQUEST",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::NetworkConnectionFailure => "NETWORK_CONNECTION_FAILURE",
            Self::DeserializationError => "DESERIALIZATION_ERROR",
        }
    }

    /// Returns a short, user-facing description.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NetworkConnectionFailure => "Check your internet connection and try again",
            Self::ResourceNotFound => "The requested item could not be found",
            Self::RateLimitExceeded => "Too many requests, try again in a moment",
            Self::BadOrExpiredToken | Self::BadOauthRequest => {
                "The catalog rejected our credentials"
            }
            Self::InvalidRequest | Self::UnknownError | Self::DeserializationError => {
                "Something went wrong, try again"
            }
        }
    }

    /// Returns true if repeating the same request could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::NetworkConnectionFailure | Self::RateLimitExceeded | Self::UnknownError
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Credential Error
// ============================================================================

/// Error obtaining a bearer credential.
///
/// `Clone` so a single refresh outcome can be handed to every waiting caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// No client id/secret configured.
    #[error("Client credentials not configured")]
    MissingClientCredentials,

    /// The token endpoint answered with an error status.
    #[error("Token endpoint rejected the request with status {status}")]
    Rejected {
        /// HTTP status returned by the token endpoint.
        status: u16,
    },

    /// The token endpoint could not be reached.
    #[error("Token endpoint unreachable: {0}")]
    Network(String),

    /// The token endpoint answered with something that is not a token.
    #[error("Invalid token response: {0}")]
    InvalidResponse(String),
}
