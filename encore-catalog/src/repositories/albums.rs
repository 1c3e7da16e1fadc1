//! Albums.

use async_trait::async_trait;
use encore_core::AlbumSearchResult;
use encore_fetch::{PagingSource, run_with_token};
use tracing::instrument;

use super::FetchResult;
use crate::context::CatalogContext;
use crate::paging;
use crate::service::Window;
use crate::spotify::mapper;

/// Album lookups.
#[async_trait]
pub trait AlbumsRepository: Send + Sync {
    /// The first page of an artist's albums.
    async fn fetch_albums_of_artist(
        &self,
        artist_id: &str,
        country_code: &str,
    ) -> FetchResult<Vec<AlbumSearchResult>>;

    /// One album.
    async fn fetch_album(&self, album_id: &str, country_code: &str) -> FetchResult<AlbumSearchResult>;

    /// All of an artist's albums, paged.
    fn albums_of_artist_source(
        &self,
        artist_id: &str,
        country_code: &str,
    ) -> PagingSource<AlbumSearchResult>;
}

/// [`AlbumsRepository`] over the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogAlbumsRepository {
    ctx: CatalogContext,
}

impl CatalogAlbumsRepository {
    /// Creates the repository.
    pub fn new(ctx: CatalogContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl AlbumsRepository for CatalogAlbumsRepository {
    #[instrument(skip(self))]
    async fn fetch_albums_of_artist(
        &self,
        artist_id: &str,
        country_code: &str,
    ) -> FetchResult<Vec<AlbumSearchResult>> {
        let service = &self.ctx.service;
        let window = Window::first(self.ctx.paging.page_size);
        run_with_token(self.ctx.tokens.as_ref(), |token| async move {
            let page = service
                .albums_of_artist(&token, artist_id, country_code, window)
                .await?;
            Ok(page.items.into_iter().map(mapper::album).collect())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn fetch_album(&self, album_id: &str, country_code: &str) -> FetchResult<AlbumSearchResult> {
        let service = &self.ctx.service;
        run_with_token(self.ctx.tokens.as_ref(), |token| async move {
            let album = service.album(&token, album_id, country_code).await?;
            Ok(mapper::album_detail(&album))
        })
        .await
    }

    fn albums_of_artist_source(
        &self,
        artist_id: &str,
        country_code: &str,
    ) -> PagingSource<AlbumSearchResult> {
        paging::artist_albums(&self.ctx, artist_id, country_code)
    }
}
