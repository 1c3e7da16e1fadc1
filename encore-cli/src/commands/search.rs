//! Search command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use encore_catalog::{CatalogSearchRepository, SearchRepository, SearchSources};
use tracing::info;

use super::{collect_pages, connect, emit, resolve};
use crate::Cli;

/// What to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SearchTarget {
    /// First page of every kind.
    #[default]
    All,
    /// Tracks.
    Tracks,
    /// Albums.
    Albums,
    /// Artists.
    Artists,
    /// Playlists.
    Playlists,
    /// Podcast shows.
    Podcasts,
    /// Podcast episodes.
    Episodes,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search query.
    pub query: String,

    /// Result kind to page through.
    #[arg(long, short, default_value = "all")]
    pub kind: SearchTarget,

    /// Maximum pages to load for a single kind.
    #[arg(long, default_value = "1")]
    pub pages: usize,
}

/// Runs the search command.
pub async fn run(args: &SearchArgs, cli: &Cli) -> Result<()> {
    let session = connect(cli).await?;
    let repository = CatalogSearchRepository::new(session.ctx.clone());
    let pages = args.pages.max(1);
    info!(query = %args.query, kind = ?args.kind, "Searching");

    let sources = || SearchSources::create(&repository, &args.query, session.country());
    match args.kind {
        SearchTarget::All => {
            let results = resolve(repository.fetch_search_results(&args.query, session.country()).await)?;
            emit(cli, &results, |text, results| text.format_search_results(results))
        }
        SearchTarget::Tracks => {
            let items = collect_pages(&sources().tracks, pages).await?;
            emit(cli, items.as_slice(), |text, items| text.format_tracks(items))
        }
        SearchTarget::Albums => {
            let items = collect_pages(&sources().albums, pages).await?;
            emit(cli, items.as_slice(), |text, items| text.format_albums(items))
        }
        SearchTarget::Artists => {
            let items = collect_pages(&sources().artists, pages).await?;
            emit(cli, items.as_slice(), |text, items| text.format_artists(items))
        }
        SearchTarget::Playlists => {
            let items = collect_pages(&sources().playlists, pages).await?;
            emit(cli, items.as_slice(), |text, items| text.format_playlists(items))
        }
        SearchTarget::Podcasts => {
            let items = collect_pages(&sources().podcasts, pages).await?;
            emit(cli, items.as_slice(), |text, items| text.format_shows(items))
        }
        SearchTarget::Episodes => {
            let items = collect_pages(&sources().episodes, pages).await?;
            emit(cli, items.as_slice(), |text, items| text.format_episode_results(items))
        }
    }
}
