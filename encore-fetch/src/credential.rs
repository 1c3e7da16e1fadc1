//! Bearer credentials.
//!
//! A [`CredentialProvider`] hands out a valid [`BearerToken`]. The stock
//! implementation, [`CachedTokenProvider`], keeps the current token and asks
//! a [`TokenIssuer`] for a new one only when it is missing or about to
//! expire. Concurrent callers arriving during a refresh all wait on that one
//! refresh; the state lock is never held while the issuer runs.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{Duration, Utc};
use encore_core::{BearerToken, CredentialError};
use futures::future::{BoxFuture, FutureExt, Shared};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Default remaining lifetime below which a token is refreshed.
pub const DEFAULT_EXPIRY_MARGIN_SECS: i64 = 60;

// ============================================================================
// Traits
// ============================================================================

/// Supplies a bearer token valid for the next request.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Returns a token that is valid now.
    async fn valid_bearer_token(&self) -> Result<BearerToken, CredentialError>;

    /// Forgets any cached token after the server rejected it.
    async fn invalidate(&self) {}
}

/// Obtains a brand-new token from the authorization server.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Requests a new token.
    async fn issue_token(&self) -> Result<BearerToken, CredentialError>;
}

// ============================================================================
// Client Credentials
// ============================================================================

/// Application client id and secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: String,
    client_secret: String,
}

impl ClientCredentials {
    /// Creates credentials, rejecting empty values.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, CredentialError> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.trim().is_empty() || client_secret.trim().is_empty() {
            return Err(CredentialError::MissingClientCredentials);
        }
        Ok(Self {
            client_id,
            client_secret,
        })
    }

    /// The client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Value for a Basic `Authorization` header: `base64(id:secret)`.
    pub fn basic_authorization(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret));
        format!("Basic {encoded}")
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Cached Token Provider
// ============================================================================

type SharedRefresh = Shared<BoxFuture<'static, Result<BearerToken, CredentialError>>>;

#[derive(Default)]
struct TokenState {
    current: Option<BearerToken>,
    in_flight: Option<SharedRefresh>,
}

/// Caching, single-flight [`CredentialProvider`].
#[derive(Clone)]
pub struct CachedTokenProvider {
    issuer: Arc<dyn TokenIssuer>,
    state: Arc<Mutex<TokenState>>,
    expiry_margin: Duration,
}

impl CachedTokenProvider {
    /// Creates a provider with no cached token.
    pub fn new(issuer: Arc<dyn TokenIssuer>) -> Self {
        Self {
            issuer,
            state: Arc::new(Mutex::new(TokenState::default())),
            expiry_margin: Duration::seconds(DEFAULT_EXPIRY_MARGIN_SECS),
        }
    }

    /// Sets how much lifetime a cached token must have left to be reused.
    #[must_use]
    pub fn with_expiry_margin(mut self, margin: Duration) -> Self {
        self.expiry_margin = margin;
        self
    }

    fn start_refresh(&self) -> SharedRefresh {
        let issuer = Arc::clone(&self.issuer);
        let state = Arc::clone(&self.state);

        async move {
            info!("Refreshing bearer token");
            let result = issuer.issue_token().await;

            let mut guard = state.lock().await;
            guard.in_flight = None;
            match &result {
                Ok(token) => {
                    debug!(expires_at = %token.expires_at(), "Bearer token refreshed");
                    guard.current = Some(token.clone());
                }
                Err(e) => warn!(error = %e, "Bearer token refresh failed"),
            }
            result
        }
        .boxed()
        .shared()
    }
}

#[async_trait]
impl CredentialProvider for CachedTokenProvider {
    #[instrument(skip(self))]
    async fn valid_bearer_token(&self) -> Result<BearerToken, CredentialError> {
        let refresh = {
            let mut state = self.state.lock().await;

            if let Some(token) = state
                .current
                .as_ref()
                .filter(|token| token.is_valid_at(Utc::now(), self.expiry_margin))
            {
                return Ok(token.clone());
            }

            if let Some(in_flight) = &state.in_flight {
                debug!("Joining in-flight token refresh");
                in_flight.clone()
            } else {
                let refresh = self.start_refresh();
                state.in_flight = Some(refresh.clone());
                refresh
            }
        };

        refresh.await
    }

    async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        if state.current.take().is_some() {
            debug!("Cached token invalidated");
        }
    }
}

impl fmt::Debug for CachedTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedTokenProvider")
            .field("expiry_margin", &self.expiry_margin)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
