//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod genres;
pub mod home;
pub mod search;

use anyhow::Result;
use encore_catalog::{CatalogContext, FetchResult};
use encore_core::{ErrorKind, FetchedResource, LoadResult};
use encore_fetch::PagingSource;
use encore_store::Config;
use futures::StreamExt;
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

// ============================================================================
// Catalog Failure
// ============================================================================

/// A classified catalog failure surfaced as a command error.
#[derive(Debug, Clone, Copy)]
pub struct CatalogFailure(pub ErrorKind);

impl fmt::Display for CatalogFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0.user_message(), self.0)
    }
}

impl std::error::Error for CatalogFailure {}

/// Unwraps a fetch, turning a classified failure into [`CatalogFailure`].
pub fn resolve<T>(result: FetchResult<T>) -> Result<T> {
    match result? {
        FetchedResource::Success { data } => Ok(data),
        FetchedResource::Failure { cause } => Err(CatalogFailure(cause).into()),
    }
}

/// Loads up to `max_pages` pages from `source` and returns every item.
pub async fn collect_pages<T>(source: &PagingSource<T>, max_pages: usize) -> Result<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    let mut pages = source.pages().take(max_pages).boxed();
    while let Some(page) = pages.next().await {
        if let LoadResult::Error(cause) = page? {
            return Err(CatalogFailure(cause).into());
        }
    }
    debug!(items = source.len(), pages = source.pages_loaded(), "Pages collected");
    Ok(source.items())
}

/// Prints `data` as JSON, or as the text `render` produces.
pub fn emit<T: Serialize + ?Sized>(
    cli: &Cli,
    data: &T,
    render: impl FnOnce(&TextFormatter, &T) -> String,
) -> Result<()> {
    let output = match cli.format {
        OutputFormat::Text => render(&TextFormatter::new(!cli.no_color), data),
        OutputFormat::Json => JsonFormatter::new(cli.pretty).format(data)?,
    };
    println!("{output}");
    Ok(())
}

// ============================================================================
// Session
// ============================================================================

/// Loaded configuration and a connected catalog.
pub struct Session {
    /// Effective configuration.
    pub config: Config,
    /// Catalog context built from it.
    pub ctx: CatalogContext,
}

impl Session {
    /// Market country for requests.
    pub fn country(&self) -> &str {
        &self.config.market.country_code
    }
}

/// Loads the configuration, applies global flags and connects.
pub async fn connect(cli: &Cli) -> Result<Session> {
    let mut config = Config::load().await?;
    if let Some(country) = &cli.country {
        config.market.country_code = country.to_uppercase();
    }
    if let Some(language) = &cli.language {
        config.market.language_code = language.to_lowercase();
    }
    let ctx = config.connect()?;
    Ok(Session { config, ctx })
}
