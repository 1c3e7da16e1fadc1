//! Outcome of a one-shot catalog fetch.

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// The result of a singleton fetch: either the data or a classified cause.
///
/// Unlike `Result`, a `Failure` here is an expected outcome the caller is
/// meant to render; failures that are not classifiable never end up in this
/// type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchedResource<T, E = ErrorKind> {
    /// The fetch succeeded.
    Success {
        /// The fetched data.
        data: T,
    },
    /// The fetch failed with a classified cause.
    Failure {
        /// Why the fetch failed.
        cause: E,
    },
}

impl<T, E> FetchedResource<T, E> {
    /// Wraps successful data.
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Wraps a failure cause.
    pub fn failure(cause: E) -> Self {
        Self::Failure { cause }
    }

    /// Returns true if this is a `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns true if this is a `Failure`.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the failure cause, if any.
    pub fn cause(&self) -> Option<&E> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { cause } => Some(cause),
        }
    }

    /// Maps the success data, leaving a failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchedResource<U, E> {
        match self {
            Self::Success { data } => FetchedResource::Success { data: f(data) },
            Self::Failure { cause } => FetchedResource::Failure { cause },
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { cause } => Err(cause),
        }
    }
}

impl<T, E> From<Result<T, E>> for FetchedResource<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success { data },
            Err(cause) => Self::Failure { cause },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_variant_populated() {
        let ok: FetchedResource<u32> = FetchedResource::success(7);
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&7));
        assert_eq!(ok.cause(), None);

        let err: FetchedResource<u32> = FetchedResource::failure(ErrorKind::ResourceNotFound);
        assert!(err.is_failure());
        assert_eq!(err.data(), None);
        assert_eq!(err.cause(), Some(&ErrorKind::ResourceNotFound));
    }

    #[test]
    fn test_map_preserves_failure() {
        let err: FetchedResource<u32> = FetchedResource::failure(ErrorKind::UnknownError);
        let mapped = err.map(|n| n * 2);
        assert_eq!(mapped.into_result(), Err(ErrorKind::UnknownError));

        let ok: FetchedResource<u32> = FetchedResource::success(21);
        assert_eq!(ok.map(|n| n * 2).into_result(), Ok(42));
    }

    #[test]
    fn test_json_shape() {
        let ok: FetchedResource<&str> = FetchedResource::success("x");
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"], "x");

        let err: FetchedResource<&str> =
            FetchedResource::failure(ErrorKind::NetworkConnectionFailure);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["cause"], "NETWORK_CONNECTION_FAILURE");
    }
}
