//! HTTP client with tracing and domain allowlist.
//!
//! Wraps `reqwest` with:
//! - Request/response tracing
//! - Domain allowlist
//! - Status checking and JSON decoding into [`RemoteError`]

use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::RemoteError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for Encore.
const USER_AGENT: &str = concat!("Encore/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper with tracing and domain allowlist.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    allowed_domains: Option<Vec<String>>,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, RemoteError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, RemoteError> {
        let inner = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RemoteError::Unexpected(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            inner,
            allowed_domains: None,
        })
    }

    /// Restricts requests to the given domains and their subdomains.
    #[must_use]
    pub fn allow_domains(mut self, domains: Vec<String>) -> Self {
        self.allowed_domains = Some(domains);
        self
    }

    /// Checks if a URL's domain is allowed.
    pub fn is_domain_allowed(&self, url: &str) -> Result<(), RemoteError> {
        let Some(ref allowed) = self.allowed_domains else {
            return Ok(());
        };

        let parsed = Url::parse(url)?;
        let host = parsed
            .host_str()
            .ok_or_else(|| RemoteError::InvalidUrl("No host in URL".to_string()))?;

        let allowed = allowed
            .iter()
            .any(|domain| host == domain || host.ends_with(&format!(".{domain}")));

        if allowed {
            Ok(())
        } else {
            Err(RemoteError::DomainNotAllowed(host.to_string()))
        }
    }

    /// Performs an authorized GET and decodes the JSON body.
    #[instrument(skip(self, query, auth_header), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        auth_header: &str,
    ) -> Result<T, RemoteError> {
        self.is_domain_allowed(url)?;
        debug!("GET request");

        let response = self
            .inner
            .get(url)
            .query(query)
            .header(header::AUTHORIZATION, auth_header)
            .send()
            .await?;

        decode_json(response).await
    }

    /// Performs a form POST with an authorization header and decodes the
    /// JSON body.
    #[instrument(skip(self, form, auth_header), fields(url = %url))]
    pub async fn post_form<F, T>(&self, url: &str, form: &F, auth_header: &str) -> Result<T, RemoteError>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.is_domain_allowed(url)?;
        debug!("POST request with form data");

        let response = self
            .inner
            .post(url)
            .header(header::AUTHORIZATION, auth_header)
            .form(form)
            .send()
            .await?;

        decode_json(response).await
    }
}

/// Checks the status and decodes a JSON body.
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let status = response.status();
    debug!(status = %status, "Response received");

    if !status.is_success() {
        if response.is_rate_limited() {
            warn!(retry_after = ?response.retry_after_secs(), "Rate limited");
        }
        return Err(RemoteError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

// ============================================================================
// Response Extensions
// ============================================================================

/// Extension trait for Response handling.
pub trait ResponseExt {
    /// Check if the response indicates rate limiting.
    fn is_rate_limited(&self) -> bool;

    /// Get the Retry-After header value in seconds.
    fn retry_after_secs(&self) -> Option<u64>;
}

impl ResponseExt for Response {
    fn is_rate_limited(&self) -> bool {
        self.status() == reqwest::StatusCode::TOO_MANY_REQUESTS
    }

    fn retry_after_secs(&self) -> Option<u64> {
        self.headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
    }
}

// ============================================================================
// Tests
// ============================================================================
