//! Home feed sections.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use encore_core::{AlbumSearchResult, FeaturedPlaylists, PlaylistsForCategory};
use encore_fetch::run_with_token;
use futures::future::try_join_all;
use tracing::{debug, instrument};

use super::FetchResult;
use crate::context::CatalogContext;
use crate::service::Window;
use crate::spotify::mapper;

/// `{language}_{country}`, e.g. `en_US`.
pub fn locale(language_code: &str, country_code: &str) -> String {
    format!("{language_code}_{country_code}")
}

/// The timestamp format of the featured playlists endpoint.
pub fn featured_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// The three sections of the home feed.
#[async_trait]
pub trait HomeFeedRepository: Send + Sync {
    /// Newly released albums.
    async fn fetch_newly_released_albums(&self, country_code: &str)
    -> FetchResult<Vec<AlbumSearchResult>>;

    /// Featured playlists for a point in time.
    async fn fetch_featured_playlists(
        &self,
        at: DateTime<Utc>,
        country_code: &str,
        language_code: &str,
    ) -> FetchResult<FeaturedPlaylists>;

    /// Every browse category with its playlists, in category order.
    async fn fetch_playlists_for_categories(
        &self,
        country_code: &str,
        language_code: &str,
    ) -> FetchResult<Vec<PlaylistsForCategory>>;
}

/// [`HomeFeedRepository`] over the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogHomeFeedRepository {
    ctx: CatalogContext,
}

impl CatalogHomeFeedRepository {
    /// Creates the repository.
    pub fn new(ctx: CatalogContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl HomeFeedRepository for CatalogHomeFeedRepository {
    #[instrument(skip(self))]
    async fn fetch_newly_released_albums(
        &self,
        country_code: &str,
    ) -> FetchResult<Vec<AlbumSearchResult>> {
        let service = &self.ctx.service;
        let window = Window::first(self.ctx.paging.page_size);
        run_with_token(self.ctx.tokens.as_ref(), |token| async move {
            let response = service.new_releases(&token, country_code, window).await?;
            Ok(response.albums.items.into_iter().map(mapper::album).collect())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn fetch_featured_playlists(
        &self,
        at: DateTime<Utc>,
        country_code: &str,
        language_code: &str,
    ) -> FetchResult<FeaturedPlaylists> {
        let service = &self.ctx.service;
        let locale = locale(language_code, country_code);
        let timestamp = featured_timestamp(at);
        run_with_token(self.ctx.tokens.as_ref(), |token| async move {
            let response = service
                .featured_playlists(&token, country_code, &locale, &timestamp)
                .await?;
            Ok(mapper::featured_playlists(response))
        })
        .await
    }

    #[instrument(skip(self))]
    async fn fetch_playlists_for_categories(
        &self,
        country_code: &str,
        language_code: &str,
    ) -> FetchResult<Vec<PlaylistsForCategory>> {
        let service = &self.ctx.service;
        let locale = locale(language_code, country_code);
        run_with_token(self.ctx.tokens.as_ref(), |token| async move {
            let categories = service
                .browse_categories(&token, country_code, &locale)
                .await?
                .categories
                .items;
            debug!(count = categories.len(), "Fetching category playlists");

            let requests = categories
                .iter()
                .map(|category| service.category_playlists(&token, &category.id, country_code));
            let playlists = try_join_all(requests).await?;

            Ok(categories
                .into_iter()
                .zip(playlists)
                .map(|(category, response)| mapper::category(category, response.playlists.items))
                .collect())
        })
        .await
    }
}
