//! Bearer credential.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// A short-lived API credential.
///
/// Immutable once issued; a refresh produces a new token instead of updating
/// this one.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken {
    value: String,
    issued_at: DateTime<Utc>,
    time_to_live: Duration,
}

impl BearerToken {
    /// Creates a token issued at `issued_at` and valid for `time_to_live`.
    pub fn new(value: impl Into<String>, issued_at: DateTime<Utc>, time_to_live: Duration) -> Self {
        Self {
            value: value.into(),
            issued_at,
            time_to_live,
        }
    }

    /// Creates a token issued now.
    pub fn issued_now(value: impl Into<String>, time_to_live: Duration) -> Self {
        Self::new(value, Utc::now(), time_to_live)
    }

    /// The raw token string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// When the token was issued.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// How long the token is valid after issuance.
    pub fn time_to_live(&self) -> Duration {
        self.time_to_live
    }

    /// When the token stops being accepted.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.issued_at + self.time_to_live
    }

    /// Returns true if the token is still valid at `now` with at least
    /// `margin` to spare.
    pub fn is_valid_at(&self, now: DateTime<Utc>, margin: Duration) -> bool {
        now + margin < self.expires_at()
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("value", &"<redacted>")
            .field("issued_at", &self.issued_at)
            .field("time_to_live", &self.time_to_live)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_window() {
        let issued = Utc::now();
        let token = BearerToken::new("abc", issued, Duration::seconds(3600));

        assert!(token.is_valid_at(issued, Duration::seconds(60)));
        assert!(token.is_valid_at(issued + Duration::seconds(3539), Duration::seconds(60)));
        assert!(!token.is_valid_at(issued + Duration::seconds(3540), Duration::seconds(60)));
        assert!(!token.is_valid_at(issued + Duration::seconds(4000), Duration::zero()));
    }

    #[test]
    fn test_debug_redacts_value() {
        let token = BearerToken::issued_now("super-secret", Duration::seconds(10));
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(token.authorization_header(), "Bearer super-secret");
    }
}
