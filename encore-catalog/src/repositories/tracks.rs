//! Tracks.

use async_trait::async_trait;
use encore_core::{AlbumSearchResult, Genre, TrackSearchResult};
use encore_fetch::{PagingSource, run_with_token};
use tracing::instrument;

use super::FetchResult;
use crate::context::CatalogContext;
use crate::paging;
use crate::spotify::genres::seed_name;
use crate::spotify::mapper;

/// Track lookups.
#[async_trait]
pub trait TracksRepository: Send + Sync {
    /// An artist's most popular tracks.
    async fn fetch_top_tracks_for_artist(
        &self,
        artist_id: &str,
        country_code: &str,
    ) -> FetchResult<Vec<TrackSearchResult>>;

    /// Tracks recommended for a genre.
    async fn fetch_tracks_for_genre(
        &self,
        genre: &Genre,
        country_code: &str,
    ) -> FetchResult<Vec<TrackSearchResult>>;

    /// Tracks of an album. Tracks carry the album's art.
    async fn fetch_tracks_for_album(
        &self,
        album: &AlbumSearchResult,
        country_code: &str,
    ) -> FetchResult<Vec<TrackSearchResult>>;

    /// Tracks of a playlist, paged.
    fn playlist_tracks_source(
        &self,
        playlist_id: &str,
        country_code: &str,
    ) -> PagingSource<TrackSearchResult>;
}

/// [`TracksRepository`] over the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogTracksRepository {
    ctx: CatalogContext,
}

impl CatalogTracksRepository {
    /// Creates the repository.
    pub fn new(ctx: CatalogContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl TracksRepository for CatalogTracksRepository {
    #[instrument(skip(self))]
    async fn fetch_top_tracks_for_artist(
        &self,
        artist_id: &str,
        country_code: &str,
    ) -> FetchResult<Vec<TrackSearchResult>> {
        let service = &self.ctx.service;
        run_with_token(self.ctx.tokens.as_ref(), |token| async move {
            let response = service
                .top_tracks_of_artist(&token, artist_id, country_code)
                .await?;
            Ok(response
                .tracks
                .into_iter()
                .map(|track| mapper::track(track, None))
                .collect())
        })
        .await
    }

    #[instrument(skip(self), fields(genre = %genre.label))]
    async fn fetch_tracks_for_genre(
        &self,
        genre: &Genre,
        country_code: &str,
    ) -> FetchResult<Vec<TrackSearchResult>> {
        let service = &self.ctx.service;
        let limit = self.ctx.paging.page_size;
        let seed = seed_name(genre.genre_type);
        run_with_token(self.ctx.tokens.as_ref(), |token| async move {
            let response = service
                .recommendations(&token, &[seed], country_code, limit)
                .await?;
            Ok(response
                .tracks
                .into_iter()
                .map(|track| mapper::track(track, None))
                .collect())
        })
        .await
    }

    #[instrument(skip(self, album), fields(album_id = %album.id))]
    async fn fetch_tracks_for_album(
        &self,
        album: &AlbumSearchResult,
        country_code: &str,
    ) -> FetchResult<Vec<TrackSearchResult>> {
        let service = &self.ctx.service;
        run_with_token(self.ctx.tokens.as_ref(), |token| async move {
            let response = service.album(&token, &album.id, country_code).await?;
            let art = album.album_art_url.as_deref();
            Ok(response
                .tracks
                .items
                .into_iter()
                .map(|track| mapper::track(track, art))
                .collect())
        })
        .await
    }

    fn playlist_tracks_source(
        &self,
        playlist_id: &str,
        country_code: &str,
    ) -> PagingSource<TrackSearchResult> {
        paging::playlist_tracks(&self.ctx, playlist_id, country_code)
    }
}
