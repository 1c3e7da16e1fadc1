//! Home feed view state.
//!
//! Fetches the three home feed sections concurrently and keeps whatever
//! arrived, so one failing section never hides the others.

use chrono::{DateTime, Timelike, Utc};
use encore_catalog::HomeFeedRepository;
use encore_core::{
    ErrorKind, FetchedResource, HomeFeedCarousel, HomeFeedCarouselCardInfo, PlaylistsForCategory,
};
use encore_fetch::FetchError;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, instrument, warn};

use crate::config::MarketConfig;

/// Title of the featured playlists carousel.
pub const FEATURED_PLAYLISTS_TITLE: &str = "Featured Playlists";
/// Title of the new releases carousel.
pub const NEW_RELEASES_TITLE: &str = "Newly Released Albums";

/// Greeting shown above the feed for the given hour of day (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        4..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Greeting for the current local hour.
pub fn current_greeting() -> &'static str {
    greeting_for_hour(chrono::Local::now().hour())
}

// ============================================================================
// State
// ============================================================================

/// Loading state of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeFeedState {
    /// Nothing in flight; the last refresh, if any, fully succeeded.
    #[default]
    Idle,
    /// A refresh is running.
    Loading,
    /// At least one section failed during the last refresh.
    Error,
}

/// Everything a view needs to render the feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HomeFeedSnapshot {
    /// Loading state.
    pub state: HomeFeedState,
    /// Carousels in display order.
    pub carousels: Vec<HomeFeedCarousel>,
    /// Sections that failed during the last refresh.
    pub errors: Vec<SectionFailure>,
    /// When the last refresh finished.
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// One home feed section that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionFailure {
    /// Section name.
    pub section: &'static str,
    /// Classified cause, if the failure was classifiable.
    pub cause: Option<ErrorKind>,
    /// Message to show the user.
    pub message: String,
}

// ============================================================================
// Home Feed Store
// ============================================================================

/// Observable home feed state.
pub struct HomeFeedStore {
    repository: Arc<dyn HomeFeedRepository>,
    market: MarketConfig,
    inner: Arc<RwLock<HomeFeedSnapshot>>,
    loading: AtomicBool,
    notify: watch::Sender<u64>,
}

/// Marks a refresh as running until dropped, including when the refresh
/// future is dropped before it completes.
struct LoadingGuard<'a> {
    store: &'a HomeFeedStore,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.loading.store(false, Ordering::SeqCst);
        self.store.notify_change();
    }
}

impl HomeFeedStore {
    /// Creates an idle, empty store.
    pub fn new(repository: Arc<dyn HomeFeedRepository>, market: MarketConfig) -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            repository,
            market,
            inner: Arc::new(RwLock::new(HomeFeedSnapshot::default())),
            loading: AtomicBool::new(false),
            notify,
        }
    }

    /// Current state.
    pub async fn state(&self) -> HomeFeedState {
        if self.is_loading() {
            return HomeFeedState::Loading;
        }
        self.inner.read().await.state
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Current carousels.
    pub async fn carousels(&self) -> Vec<HomeFeedCarousel> {
        self.inner.read().await.carousels.clone()
    }

    /// Copy of the whole view state.
    pub async fn snapshot(&self) -> HomeFeedSnapshot {
        let mut snapshot = self.inner.read().await.clone();
        if self.is_loading() {
            snapshot.state = HomeFeedState::Loading;
        }
        snapshot
    }

    /// Subscribes to changes. The value is a version counter.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }

    fn notify_change(&self) {
        self.notify.send_modify(|version| *version += 1);
    }

    /// Refreshes the feed now. See [`HomeFeedStore::refresh_at`].
    pub async fn refresh(&self) -> bool {
        self.refresh_at(Utc::now()).await
    }

    /// Fetches all sections, using `at` for the featured playlists.
    ///
    /// Returns false without fetching if a refresh is already running. If the
    /// returned future is dropped early, the previous state is kept.
    #[instrument(skip(self))]
    pub async fn refresh_at(&self, at: DateTime<Utc>) -> bool {
        if self
            .loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Refresh already running");
            return false;
        }
        self.notify_change();
        let guard = LoadingGuard { store: self };

        let country = self.market.country_code.as_str();
        let language = self.market.language_code.as_str();
        let (featured, new_releases, categories) = tokio::join!(
            self.repository.fetch_featured_playlists(at, country, language),
            self.repository.fetch_newly_released_albums(country),
            self.repository.fetch_playlists_for_categories(country, language),
        );

        let mut carousels = Vec::new();
        let mut errors = Vec::new();

        if let Some(featured) = section("featured playlists", featured, &mut errors) {
            carousels.push(HomeFeedCarousel {
                id: FEATURED_PLAYLISTS_TITLE.to_string(),
                title: FEATURED_PLAYLISTS_TITLE.to_string(),
                associated_cards: featured
                    .playlists
                    .into_iter()
                    .map(HomeFeedCarouselCardInfo::from_playlist)
                    .collect(),
            });
        }
        if let Some(albums) = section("new releases", new_releases, &mut errors) {
            carousels.push(HomeFeedCarousel {
                id: NEW_RELEASES_TITLE.to_string(),
                title: NEW_RELEASES_TITLE.to_string(),
                associated_cards: albums
                    .into_iter()
                    .map(HomeFeedCarouselCardInfo::from_album)
                    .collect(),
            });
        }
        if let Some(categories) = section("categories", categories, &mut errors) {
            carousels.extend(categories.iter().map(PlaylistsForCategory::to_carousel));
        }

        let state = if errors.is_empty() {
            HomeFeedState::Idle
        } else {
            HomeFeedState::Error
        };
        info!(carousels = carousels.len(), failed = errors.len(), "Home feed refreshed");

        *self.inner.write().await = HomeFeedSnapshot {
            state,
            carousels,
            errors,
            refreshed_at: Some(Utc::now()),
        };
        drop(guard);
        true
    }
}

fn section<T>(
    name: &'static str,
    result: Result<FetchedResource<T>, FetchError>,
    errors: &mut Vec<SectionFailure>,
) -> Option<T> {
    let failure = match result {
        Ok(FetchedResource::Success { data }) => return Some(data),
        Ok(FetchedResource::Failure { cause }) => {
            warn!(section = name, cause = %cause, "Home feed section failed");
            SectionFailure {
                section: name,
                cause: Some(cause),
                message: cause.user_message().to_string(),
            }
        }
        Err(e) => {
            warn!(section = name, error = %e, "Home feed section failed");
            SectionFailure {
                section: name,
                cause: None,
                message: e.to_string(),
            }
        }
    };
    errors.push(failure);
    None
}
