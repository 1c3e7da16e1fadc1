//! Resource-specific paging adapters.
//!
//! Each adapter builds a [`PagingSource`] whose fetch function obtains a
//! token, calls one [`CatalogService`] endpoint for the requested window and
//! maps the response. Classified failures become page errors.

mod search;

use encore_core::{BearerToken, Page, PageKey};
use encore_fetch::{PagingSource, RemoteError, load_page_with_token};
use std::future::Future;
use std::sync::Arc;

use crate::context::CatalogContext;
use crate::service::{CatalogService, Window};
use crate::spotify::mapper;

pub use search::{
    search_albums, search_artists, search_episodes, search_playlists, search_podcasts,
    search_tracks,
};

/// Builds a paging source from a per-page remote call.
pub(crate) fn paged<T, F, Fut>(ctx: &CatalogContext, load: F) -> PagingSource<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(Arc<dyn CatalogService>, BearerToken, PageKey) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Page<T>, RemoteError>> + Send + 'static,
{
    let tokens = Arc::clone(&ctx.tokens);
    let service = Arc::clone(&ctx.service);
    let load = Arc::new(load);

    PagingSource::new(ctx.paging, move |key| {
        let tokens = Arc::clone(&tokens);
        let service = Arc::clone(&service);
        let load = Arc::clone(&load);
        async move { load_page_with_token(tokens.as_ref(), |token| load(service, token, key)).await }
    })
}

/// Tracks of a playlist.
pub fn playlist_tracks(
    ctx: &CatalogContext,
    playlist_id: &str,
    market: &str,
) -> PagingSource<encore_core::TrackSearchResult> {
    let playlist_id = playlist_id.to_string();
    let market = market.to_string();
    paged(ctx, move |service, token, key| {
        let playlist_id = playlist_id.clone();
        let market = market.clone();
        async move {
            let response = service
                .playlist_tracks(&token, &playlist_id, &market, Window::from(key))
                .await?;
            Ok(response.into_page_with(key, mapper::playlist_item))
        }
    })
}

/// Albums of an artist.
pub fn artist_albums(
    ctx: &CatalogContext,
    artist_id: &str,
    market: &str,
) -> PagingSource<encore_core::AlbumSearchResult> {
    let artist_id = artist_id.to_string();
    let market = market.to_string();
    paged(ctx, move |service, token, key| {
        let artist_id = artist_id.clone();
        let market = market.clone();
        async move {
            let response = service
                .albums_of_artist(&token, &artist_id, &market, Window::from(key))
                .await?;
            Ok(response.into_page(key, mapper::album))
        }
    })
}

/// Episodes of a show, each carrying the show's metadata.
///
/// Every page first fetches the show, then the episodes. If the show fetch
/// fails the page fails and the episodes are never requested.
pub fn show_episodes(
    ctx: &CatalogContext,
    show_id: &str,
    market: &str,
) -> PagingSource<encore_core::PodcastEpisode> {
    let show_id = show_id.to_string();
    let market = market.to_string();
    paged(ctx, move |service, token, key| {
        let show_id = show_id.clone();
        let market = market.clone();
        async move {
            let show = mapper::show(service.show(&token, &show_id, &market).await?);
            let info = show.info();
            let response = service
                .episodes_of_show(&token, &show_id, &market, Window::from(key))
                .await?;
            Ok(response.into_page(key, |episode| mapper::episode(episode, info.clone())))
        }
    })
}
