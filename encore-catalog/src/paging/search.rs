//! One paging adapter per searchable kind.

use encore_core::{
    AlbumSearchResult, ArtistSearchResult, EpisodeSearchResult, PlaylistSearchResult,
    PodcastSearchResult, TrackSearchResult,
};
use encore_fetch::PagingSource;

use super::paged;
use crate::context::CatalogContext;
use crate::service::{SearchKind, Window};
use crate::spotify::dto::{PagingObject, SearchResponse};
use crate::spotify::mapper;

fn search<D, T>(
    ctx: &CatalogContext,
    query: &str,
    market: &str,
    kind: SearchKind,
    select: fn(SearchResponse) -> Option<PagingObject<D>>,
    map: fn(D) -> T,
) -> PagingSource<T>
where
    D: Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    let query = query.to_string();
    let market = market.to_string();
    paged(ctx, move |service, token, key| {
        let query = query.clone();
        let market = market.clone();
        async move {
            let response = service
                .search(&token, &query, &[kind], &market, Window::from(key))
                .await?;
            // A kind missing from the response means no matches.
            Ok(select(response).unwrap_or_default().into_page(key, map))
        }
    })
}

/// Paged track search.
pub fn search_tracks(ctx: &CatalogContext, query: &str, market: &str) -> PagingSource<TrackSearchResult> {
    search(ctx, query, market, SearchKind::Track, |r| r.tracks, |t| mapper::track(t, None))
}

/// Paged album search.
pub fn search_albums(ctx: &CatalogContext, query: &str, market: &str) -> PagingSource<AlbumSearchResult> {
    search(ctx, query, market, SearchKind::Album, |r| r.albums, mapper::album)
}

/// Paged artist search.
pub fn search_artists(ctx: &CatalogContext, query: &str, market: &str) -> PagingSource<ArtistSearchResult> {
    search(ctx, query, market, SearchKind::Artist, |r| r.artists, mapper::artist)
}

/// Paged playlist search.
pub fn search_playlists(
    ctx: &CatalogContext,
    query: &str,
    market: &str,
) -> PagingSource<PlaylistSearchResult> {
    search(ctx, query, market, SearchKind::Playlist, |r| r.playlists, mapper::playlist)
}

/// Paged podcast show search.
pub fn search_podcasts(
    ctx: &CatalogContext,
    query: &str,
    market: &str,
) -> PagingSource<PodcastSearchResult> {
    search(ctx, query, market, SearchKind::Show, |r| r.shows, mapper::show_listing)
}

/// Paged episode search.
pub fn search_episodes(
    ctx: &CatalogContext,
    query: &str,
    market: &str,
) -> PagingSource<EpisodeSearchResult> {
    search(ctx, query, market, SearchKind::Episode, |r| r.episodes, mapper::episode_listing)
}
