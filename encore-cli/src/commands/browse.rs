//! Detail commands: album, artist, playlist, show and episode.

use anyhow::Result;
use clap::Args;
use encore_catalog::{
    AlbumsRepository, CatalogAlbumsRepository, CatalogPodcastsRepository, CatalogTracksRepository,
    PodcastsRepository, TracksRepository,
};
use encore_core::{AlbumSearchResult, PodcastEpisode, PodcastShow, TrackSearchResult};
use serde::Serialize;
use tracing::info;

use super::{collect_pages, connect, emit, resolve};
use crate::Cli;

/// Arguments naming one catalog object.
#[derive(Args)]
pub struct IdArgs {
    /// Catalog id.
    pub id: String,
}

/// Arguments naming a paged catalog object.
#[derive(Args)]
pub struct PagedArgs {
    /// Catalog id.
    pub id: String,

    /// Maximum pages to load.
    #[arg(long, default_value = "1")]
    pub pages: usize,
}

#[derive(Serialize)]
struct AlbumOutput<'a> {
    album: &'a AlbumSearchResult,
    tracks: &'a [TrackSearchResult],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtistOutput<'a> {
    top_tracks: &'a [TrackSearchResult],
    albums: &'a [AlbumSearchResult],
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    show: &'a PodcastShow,
    episodes: &'a [PodcastEpisode],
}

/// Shows an album with its tracks.
pub async fn album(args: &IdArgs, cli: &Cli) -> Result<()> {
    let session = connect(cli).await?;
    let albums = CatalogAlbumsRepository::new(session.ctx.clone());
    let tracks = CatalogTracksRepository::new(session.ctx.clone());
    info!(album = %args.id, "Fetching album");

    let album = resolve(albums.fetch_album(&args.id, session.country()).await)?;
    let tracks = resolve(tracks.fetch_tracks_for_album(&album, session.country()).await)?;

    let output = AlbumOutput {
        album: &album,
        tracks: &tracks,
    };
    emit(cli, &output, |text, o| text.format_album(o.album, o.tracks))
}

/// Shows an artist's top tracks and albums.
pub async fn artist(args: &PagedArgs, cli: &Cli) -> Result<()> {
    let session = connect(cli).await?;
    let albums = CatalogAlbumsRepository::new(session.ctx.clone());
    let tracks = CatalogTracksRepository::new(session.ctx.clone());
    info!(artist = %args.id, "Fetching artist");

    let source = albums.albums_of_artist_source(&args.id, session.country());
    let (top_tracks, album_list) = tokio::join!(
        tracks.fetch_top_tracks_for_artist(&args.id, session.country()),
        collect_pages(&source, args.pages.max(1)),
    );
    let top_tracks = resolve(top_tracks)?;
    let album_list = album_list?;

    let output = ArtistOutput {
        top_tracks: &top_tracks,
        albums: &album_list,
    };
    emit(cli, &output, |text, o| {
        format!(
            "Top tracks\n{}\n\nAlbums\n{}",
            text.format_tracks(o.top_tracks),
            text.format_albums(o.albums)
        )
    })
}

/// Lists the tracks of a playlist.
pub async fn playlist(args: &PagedArgs, cli: &Cli) -> Result<()> {
    let session = connect(cli).await?;
    let tracks = CatalogTracksRepository::new(session.ctx.clone());
    info!(playlist = %args.id, "Fetching playlist");

    let source = tracks.playlist_tracks_source(&args.id, session.country());
    let items = collect_pages(&source, args.pages.max(1)).await?;
    emit(cli, items.as_slice(), |text, items| text.format_tracks(items))
}

/// Shows a podcast with its episodes.
pub async fn show(args: &PagedArgs, cli: &Cli) -> Result<()> {
    let session = connect(cli).await?;
    let podcasts = CatalogPodcastsRepository::new(session.ctx.clone());
    info!(show = %args.id, "Fetching show");

    let show = resolve(podcasts.fetch_show(&args.id, session.country()).await)?;
    let source = podcasts.episodes_for_show_source(&args.id, session.country());
    let episodes = collect_pages(&source, args.pages.max(1)).await?;

    let output = ShowOutput {
        show: &show,
        episodes: &episodes,
    };
    emit(cli, &output, |text, o| text.format_show(o.show, o.episodes))
}

/// Shows one episode.
pub async fn episode(args: &IdArgs, cli: &Cli) -> Result<()> {
    let session = connect(cli).await?;
    let podcasts = CatalogPodcastsRepository::new(session.ctx.clone());
    info!(episode = %args.id, "Fetching episode");

    let episode = resolve(podcasts.fetch_episode(&args.id, session.country()).await)?;
    emit(cli, &episode, |text, e| text.format_episode(e))
}
