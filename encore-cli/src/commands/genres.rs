//! Genres command.

use anyhow::{Result, bail};
use clap::Args;
use encore_catalog::{CatalogGenresRepository, CatalogTracksRepository, GenresRepository, TracksRepository};
use encore_core::GenreType;
use tracing::info;

use super::{connect, emit, resolve};
use crate::Cli;

/// Arguments for the genres command.
#[derive(Args)]
pub struct GenresArgs {
    /// Show recommended tracks for this genre instead of listing genres.
    #[arg(long)]
    pub tracks: Option<String>,
}

/// Lists genres, or recommends tracks for one.
pub async fn run(args: &GenresArgs, cli: &Cli) -> Result<()> {
    let genres = CatalogGenresRepository.fetch_available_genres();

    let Some(name) = &args.tracks else {
        return emit(cli, genres.as_slice(), |text, genres| text.format_genres(genres));
    };

    let Some(genre_type) = GenreType::from_name(name) else {
        bail!(
            "Unknown genre: {name}. Known genres: {}",
            GenreType::all().iter().map(GenreType::label).collect::<Vec<_>>().join(", ")
        );
    };
    let Some(genre) = genres.into_iter().find(|g| g.genre_type == genre_type) else {
        bail!("Genre {} is not supported", genre_type.label());
    };

    let session = connect(cli).await?;
    let tracks = CatalogTracksRepository::new(session.ctx.clone());
    info!(genre = %genre.label, "Fetching tracks for genre");

    let items = resolve(tracks.fetch_tracks_for_genre(&genre, session.country()).await)?;
    emit(cli, items.as_slice(), |text, items| text.format_tracks(items))
}
