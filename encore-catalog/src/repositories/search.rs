//! Search.

use async_trait::async_trait;
use encore_core::{
    AlbumSearchResult, ArtistSearchResult, EpisodeSearchResult, PlaylistSearchResult,
    PodcastSearchResult, SearchResults, TrackSearchResult,
};
use encore_fetch::{PagingSource, run_with_token};
use tracing::instrument;

use super::FetchResult;
use crate::context::CatalogContext;
use crate::paging;
use crate::service::{SearchKind, Window};
use crate::spotify::mapper;

/// Catalog search.
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// One page of results of every kind.
    async fn fetch_search_results(&self, query: &str, country_code: &str) -> FetchResult<SearchResults>;

    /// Paged track results.
    fn track_results(&self, query: &str, country_code: &str) -> PagingSource<TrackSearchResult>;

    /// Paged album results.
    fn album_results(&self, query: &str, country_code: &str) -> PagingSource<AlbumSearchResult>;

    /// Paged artist results.
    fn artist_results(&self, query: &str, country_code: &str) -> PagingSource<ArtistSearchResult>;

    /// Paged playlist results.
    fn playlist_results(&self, query: &str, country_code: &str) -> PagingSource<PlaylistSearchResult>;

    /// Paged podcast show results.
    fn podcast_results(&self, query: &str, country_code: &str) -> PagingSource<PodcastSearchResult>;

    /// Paged episode results.
    fn episode_results(&self, query: &str, country_code: &str) -> PagingSource<EpisodeSearchResult>;
}

/// Fresh paging sources for one query, one per kind.
#[derive(Debug, Clone)]
pub struct SearchSources {
    /// Tracks.
    pub tracks: PagingSource<TrackSearchResult>,
    /// Albums.
    pub albums: PagingSource<AlbumSearchResult>,
    /// Artists.
    pub artists: PagingSource<ArtistSearchResult>,
    /// Playlists.
    pub playlists: PagingSource<PlaylistSearchResult>,
    /// Podcast shows.
    pub podcasts: PagingSource<PodcastSearchResult>,
    /// Episodes.
    pub episodes: PagingSource<EpisodeSearchResult>,
}

impl SearchSources {
    /// Creates all six sources for `query`.
    pub fn create<R: SearchRepository + ?Sized>(repository: &R, query: &str, country_code: &str) -> Self {
        Self {
            tracks: repository.track_results(query, country_code),
            albums: repository.album_results(query, country_code),
            artists: repository.artist_results(query, country_code),
            playlists: repository.playlist_results(query, country_code),
            podcasts: repository.podcast_results(query, country_code),
            episodes: repository.episode_results(query, country_code),
        }
    }
}

/// [`SearchRepository`] over the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogSearchRepository {
    ctx: CatalogContext,
}

impl CatalogSearchRepository {
    /// Creates the repository.
    pub fn new(ctx: CatalogContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl SearchRepository for CatalogSearchRepository {
    #[instrument(skip(self))]
    async fn fetch_search_results(&self, query: &str, country_code: &str) -> FetchResult<SearchResults> {
        let service = &self.ctx.service;
        let window = Window::first(self.ctx.paging.page_size);
        run_with_token(self.ctx.tokens.as_ref(), |token| async move {
            let response = service
                .search(&token, query, SearchKind::all(), country_code, window)
                .await?;
            Ok(mapper::search_results(response))
        })
        .await
    }

    fn track_results(&self, query: &str, country_code: &str) -> PagingSource<TrackSearchResult> {
        paging::search_tracks(&self.ctx, query, country_code)
    }

    fn album_results(&self, query: &str, country_code: &str) -> PagingSource<AlbumSearchResult> {
        paging::search_albums(&self.ctx, query, country_code)
    }

    fn artist_results(&self, query: &str, country_code: &str) -> PagingSource<ArtistSearchResult> {
        paging::search_artists(&self.ctx, query, country_code)
    }

    fn playlist_results(&self, query: &str, country_code: &str) -> PagingSource<PlaylistSearchResult> {
        paging::search_playlists(&self.ctx, query, country_code)
    }

    fn podcast_results(&self, query: &str, country_code: &str) -> PagingSource<PodcastSearchResult> {
        paging::search_podcasts(&self.ctx, query, country_code)
    }

    fn episode_results(&self, query: &str, country_code: &str) -> PagingSource<EpisodeSearchResult> {
        paging::search_episodes(&self.ctx, query, country_code)
    }
}
