//! Shared handles for adapters and repositories.

use encore_core::PagingConfig;
use encore_fetch::{CachedTokenProvider, ClientCredentials, CredentialProvider, HttpClient, RemoteError};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::service::CatalogService;
use crate::spotify::{SpotifyClient, SpotifyTokenIssuer};

/// Everything a repository holds: the credential provider, the catalog
/// service and the paging policy.
#[derive(Clone)]
pub struct CatalogContext {
    /// Supplies bearer tokens.
    pub tokens: Arc<dyn CredentialProvider>,
    /// The remote catalog.
    pub service: Arc<dyn CatalogService>,
    /// Paging policy for every paging source.
    pub paging: PagingConfig,
}

impl CatalogContext {
    /// Creates a context from explicit parts.
    pub fn new(
        tokens: Arc<dyn CredentialProvider>,
        service: Arc<dyn CatalogService>,
        paging: PagingConfig,
    ) -> Self {
        Self {
            tokens,
            service,
            paging,
        }
    }

    /// Wires up the Spotify client, token issuer and token cache.
    pub fn connect_spotify(settings: SpotifySettings) -> Result<Self, RemoteError> {
        let http = HttpClient::with_timeout(settings.timeout)?
            .allow_domains(vec!["spotify.com".to_string()]);

        let issuer = SpotifyTokenIssuer::new(http.clone(), settings.token_url, settings.credentials);
        let tokens = CachedTokenProvider::new(Arc::new(issuer)).with_expiry_margin(settings.expiry_margin);
        let service = SpotifyClient::new(http, settings.api_base_url);

        info!(page_size = settings.paging.page_size, "Catalog connected");
        Ok(Self::new(Arc::new(tokens), Arc::new(service), settings.paging))
    }
}

impl fmt::Debug for CatalogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogContext")
            .field("paging", &self.paging)
            .finish_non_exhaustive()
    }
}

/// Settings for [`CatalogContext::connect_spotify`].
#[derive(Debug, Clone)]
pub struct SpotifySettings {
    /// Web API base URL.
    pub api_base_url: String,
    /// Accounts token URL.
    pub token_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Application credentials.
    pub credentials: ClientCredentials,
    /// Remaining lifetime below which a token is refreshed.
    pub expiry_margin: chrono::Duration,
    /// Paging policy.
    pub paging: PagingConfig,
}
