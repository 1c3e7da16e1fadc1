//! Reduction of remote failures to [`ErrorKind`].

use encore_core::ErrorKind;

use crate::error::RemoteError;

/// Classifies a remote failure.
///
/// HTTP statuses map through [`ErrorKind::from_http_status`], transport
/// failures become [`ErrorKind::NetworkConnectionFailure`] and unparseable
/// bodies become [`ErrorKind::DeserializationError`]. Anything else returns
/// `None` and must be propagated to the caller.
pub fn classify(error: &RemoteError) -> Option<ErrorKind> {
    match error {
        RemoteError::Status { status, .. } => Some(ErrorKind::from_http_status(*status)),
        RemoteError::Network(_) => Some(ErrorKind::NetworkConnectionFailure),
        RemoteError::Decode(_) => Some(ErrorKind::DeserializationError),
        RemoteError::DomainNotAllowed(_)
        | RemoteError::InvalidUrl(_)
        | RemoteError::Unexpected(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> RemoteError {
        RemoteError::Status {
            status: code,
            url: "https://api.example.com".into(),
        }
    }

    #[test]
    fn test_status_table() {
        let table = [
            (400, ErrorKind::InvalidRequest),
            (401, ErrorKind::BadOrExpiredToken),
            (403, ErrorKind::BadOauthRequest),
            (404, ErrorKind::ResourceNotFound),
            (429, ErrorKind::RateLimitExceeded),
            (500, ErrorKind::UnknownError),
            (502, ErrorKind::UnknownError),
            (418, ErrorKind::UnknownError),
        ];
        for (code, expected) in table {
            assert_eq!(classify(&status(code)), Some(expected), "status {code}");
        }
    }

    #[test]
    fn test_transport_and_decode() {
        assert_eq!(
            classify(&RemoteError::Network("connection refused".into())),
            Some(ErrorKind::NetworkConnectionFailure)
        );
        assert_eq!(
            classify(&RemoteError::Decode("expected value".into())),
            Some(ErrorKind::DeserializationError)
        );
    }

    #[test]
    fn test_unclassifiable() {
        assert_eq!(classify(&RemoteError::Unexpected("boom".into())), None);
        assert_eq!(classify(&RemoteError::InvalidUrl("::".into())), None);
        assert_eq!(
            classify(&RemoteError::DomainNotAllowed("evil.example".into())),
            None
        );
    }
}
