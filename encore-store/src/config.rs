//! Configuration management.

use encore_catalog::{CatalogContext, SpotifySettings};
use encore_catalog::spotify::{DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URL};
use encore_core::PagingConfig;
use encore_fetch::ClientCredentials;
use encore_fetch::credential::DEFAULT_EXPIRY_MARGIN_SECS;
use encore_fetch::host::http::DEFAULT_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::persistence::{default_config_path, load_json, save_json};

/// Environment variable overriding [`ApiConfig::client_id`].
pub const CLIENT_ID_ENV: &str = "ENCORE_CLIENT_ID";
/// Environment variable overriding [`ApiConfig::client_secret`].
pub const CLIENT_SECRET_ENV: &str = "ENCORE_CLIENT_SECRET";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Market the catalog is browsed in.
    #[serde(default)]
    pub market: MarketConfig,
    /// Paging policy for every paged list.
    #[serde(default)]
    pub paging: PagingConfig,
}

/// Remote API settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Web API base URL.
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Accounts token endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Application client id.
    #[serde(default)]
    pub client_id: String,
    /// Application client secret.
    #[serde(default)]
    pub client_secret: String,
    /// Seconds before expiry at which a token is refreshed.
    #[serde(default = "default_expiry_margin_secs")]
    pub expiry_margin_secs: i64,
}

/// Market settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// ISO 3166-1 alpha-2 country code.
    #[serde(default = "default_country_code")]
    pub country_code: String,
    /// ISO 639-1 language code.
    #[serde(default = "default_language_code")]
    pub language_code: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_expiry_margin_secs() -> i64 {
    DEFAULT_EXPIRY_MARGIN_SECS
}

fn default_country_code() -> String {
    "US".to_string()
}

fn default_language_code() -> String {
    "en".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            token_url: default_token_url(),
            timeout_secs: default_timeout_secs(),
            client_id: String::new(),
            client_secret: String::new(),
            expiry_margin_secs: default_expiry_margin_secs(),
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token_url", &self.token_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("expiry_margin_secs", &self.expiry_margin_secs)
            .finish()
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            country_code: default_country_code(),
            language_code: default_language_code(),
        }
    }
}

impl Config {
    /// Loads configuration from the default path, applying environment
    /// overrides.
    pub async fn load() -> Result<Self, StoreError> {
        let mut config = Self::load_from(&default_config_path()).await?;
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Loads configuration from a specific path. A missing file yields the
    /// defaults.
    pub async fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let config = load_json(path).await?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Saves configuration to the default path.
    pub async fn save(&self) -> Result<(), StoreError> {
        self.save_to(&default_config_path()).await
    }

    /// Saves configuration to a specific path.
    pub async fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        save_json(path, self).await?;
        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Replaces the client credentials with any non-empty values `lookup`
    /// returns for [`CLIENT_ID_ENV`] and [`CLIENT_SECRET_ENV`].
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(id) = value(CLIENT_ID_ENV) {
            debug!("Client id taken from environment");
            self.api.client_id = id;
        }
        if let Some(secret) = value(CLIENT_SECRET_ENV) {
            debug!("Client secret taken from environment");
            self.api.client_secret = secret;
        }
    }

    /// Checks that the configuration can drive a catalog client.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.api.client_id.trim().is_empty() || self.api.client_secret.trim().is_empty() {
            return Err(StoreError::Config(format!(
                "client credentials missing; set {CLIENT_ID_ENV} and {CLIENT_SECRET_ENV} or add them to the config file"
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(StoreError::Config("timeout_secs must be positive".into()));
        }
        if self.api.expiry_margin_secs < 0 {
            return Err(StoreError::Config("expiry_margin_secs must not be negative".into()));
        }
        if self.paging.page_size == 0 || self.paging.initial_load_size == 0 {
            return Err(StoreError::Config("page sizes must be positive".into()));
        }
        if self.market.country_code.len() != 2 {
            return Err(StoreError::Config(format!(
                "country code must have two letters, got {:?}",
                self.market.country_code
            )));
        }
        Ok(())
    }

    /// Settings for [`encore_catalog::CatalogContext::connect_spotify`].
    pub fn spotify_settings(&self) -> Result<SpotifySettings, StoreError> {
        self.validate()?;
        let credentials = ClientCredentials::new(&self.api.client_id, &self.api.client_secret)
            .map_err(|e| StoreError::Config(e.to_string()))?;

        Ok(SpotifySettings {
            api_base_url: self.api.base_url.clone(),
            token_url: self.api.token_url.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs),
            credentials,
            expiry_margin: chrono::Duration::seconds(self.api.expiry_margin_secs),
            paging: self.paging,
        })
    }

    /// Validates the configuration and builds a catalog context from it.
    pub fn connect(&self) -> Result<CatalogContext, StoreError> {
        let ctx = CatalogContext::connect_spotify(self.spotify_settings()?)?;
        Ok(ctx)
    }
}
