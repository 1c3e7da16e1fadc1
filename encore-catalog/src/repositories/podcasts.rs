//! Podcasts.

use async_trait::async_trait;
use encore_core::{PodcastEpisode, PodcastShow};
use encore_fetch::{PagingSource, run_with_token};
use tracing::instrument;

use super::FetchResult;
use crate::context::CatalogContext;
use crate::paging;
use crate::spotify::mapper;

/// Podcast lookups.
#[async_trait]
pub trait PodcastsRepository: Send + Sync {
    /// One episode with its show.
    async fn fetch_episode(&self, episode_id: &str, country_code: &str) -> FetchResult<PodcastEpisode>;

    /// One show.
    async fn fetch_show(&self, show_id: &str, country_code: &str) -> FetchResult<PodcastShow>;

    /// Episodes of a show, paged.
    fn episodes_for_show_source(
        &self,
        show_id: &str,
        country_code: &str,
    ) -> PagingSource<PodcastEpisode>;
}

/// [`PodcastsRepository`] over the catalog service.
#[derive(Debug, Clone)]
pub struct CatalogPodcastsRepository {
    ctx: CatalogContext,
}

impl CatalogPodcastsRepository {
    /// Creates the repository.
    pub fn new(ctx: CatalogContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl PodcastsRepository for CatalogPodcastsRepository {
    #[instrument(skip(self))]
    async fn fetch_episode(&self, episode_id: &str, country_code: &str) -> FetchResult<PodcastEpisode> {
        let service = &self.ctx.service;
        run_with_token(self.ctx.tokens.as_ref(), |token| async move {
            let episode = service.episode(&token, episode_id, country_code).await?;
            Ok(mapper::episode_with_embedded_show(episode))
        })
        .await
    }

    #[instrument(skip(self))]
    async fn fetch_show(&self, show_id: &str, country_code: &str) -> FetchResult<PodcastShow> {
        let service = &self.ctx.service;
        run_with_token(self.ctx.tokens.as_ref(), |token| async move {
            let show = service.show(&token, show_id, country_code).await?;
            Ok(mapper::show(show))
        })
        .await
    }

    fn episodes_for_show_source(
        &self,
        show_id: &str,
        country_code: &str,
    ) -> PagingSource<PodcastEpisode> {
        paging::show_episodes(&self.ctx, show_id, country_code)
    }
}
