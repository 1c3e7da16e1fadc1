//! Forward-only keyed paging engine.
//!
//! A [`PagingSource`] walks a remote collection page by page. It starts at
//! [`PagingConfig::first_key`] and derives each following key from the page
//! just loaded, so offsets only ever grow. A failed page leaves the source in
//! [`LoadState::Error`] until [`PagingSource::retry`] reloads the same key.
//!
//! The source is agnostic of what it pages: resource adapters supply a fetch
//! function returning a [`LoadResult`] for a [`PageKey`].

use encore_core::{ErrorKind, LoadResult, Page, PageKey, PagingConfig};
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{self, Stream};
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument, warn};

use crate::error::FetchError;

/// Boxed future produced by a page fetch function.
pub type PageFuture<T> = BoxFuture<'static, Result<LoadResult<T>, FetchError>>;

type PageFetch<T> = Arc<dyn Fn(PageKey) -> PageFuture<T> + Send + Sync>;

// ============================================================================
// States
// ============================================================================

/// Where a paging source is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet, or the last request was abandoned.
    Idle,
    /// A page is being fetched.
    Loading(PageKey),
    /// The last request succeeded.
    Loaded {
        /// True once the remote side has no more items.
        end_reached: bool,
    },
    /// The last request failed; only a retry of `key` can follow.
    Error {
        /// The key that failed.
        key: PageKey,
        /// Why it failed.
        cause: ErrorKind,
    },
}

/// Outcome of asking a source to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStep<T> {
    /// A page was fetched and appended.
    Loaded(Page<T>),
    /// The fetch failed with a classified cause.
    Failed {
        /// The key that failed.
        key: PageKey,
        /// Why it failed.
        cause: ErrorKind,
    },
    /// Another load is already running for this key.
    AlreadyLoading(PageKey),
    /// The previous load failed; call [`PagingSource::retry`].
    AwaitingRetry(PageKey),
    /// There is nothing left to load.
    EndReached,
    /// The access was not close enough to the end to prefetch, or there is
    /// no failed page to retry.
    NotNeeded,
}

struct SourceState<T> {
    items: Vec<T>,
    next_key: Option<PageKey>,
    load_state: LoadState,
    pages_loaded: u32,
}

fn lock<T>(state: &Mutex<SourceState<T>>) -> MutexGuard<'_, SourceState<T>> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Restores the pre-load state if a load future is dropped mid-flight.
struct InFlight<'a, T> {
    state: &'a Mutex<SourceState<T>>,
    key: PageKey,
    previous: LoadState,
    armed: bool,
}

impl<T> InFlight<'_, T> {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = lock(self.state);
        if state.load_state == LoadState::Loading(self.key) {
            debug!(key = %self.key, "Page load abandoned");
            state.load_state = self.previous;
        }
    }
}

// ============================================================================
// Paging Source
// ============================================================================

/// A forward-only paged view of a remote collection.
///
/// Cloning yields another handle to the same source.
pub struct PagingSource<T> {
    config: PagingConfig,
    fetch: PageFetch<T>,
    state: Arc<Mutex<SourceState<T>>>,
}

impl<T> Clone for PagingSource<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            fetch: Arc::clone(&self.fetch),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for PagingSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("PagingSource")
            .field("config", &self.config)
            .field("load_state", &state.load_state)
            .field("items", &state.items.len())
            .finish_non_exhaustive()
    }
}

impl<T> PagingSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a source that loads pages with `fetch`.
    pub fn new<F, Fut>(config: PagingConfig, fetch: F) -> Self
    where
        F: Fn(PageKey) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<LoadResult<T>, FetchError>> + Send + 'static,
    {
        let fetch: PageFetch<T> = Arc::new(move |key| fetch(key).boxed());
        Self {
            config,
            fetch,
            state: Arc::new(Mutex::new(SourceState {
                items: Vec::new(),
                next_key: Some(config.first_key()),
                load_state: LoadState::Idle,
                pages_loaded: 0,
            })),
        }
    }

    /// The paging policy.
    pub fn config(&self) -> PagingConfig {
        self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoadState {
        lock(&self.state).load_state
    }

    /// Snapshot of every item loaded so far, in remote order.
    pub fn items(&self) -> Vec<T> {
        lock(&self.state).items.clone()
    }

    /// Number of items loaded so far.
    pub fn len(&self) -> usize {
        lock(&self.state).items.len()
    }

    /// Returns true if no items are loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of pages loaded successfully.
    pub fn pages_loaded(&self) -> u32 {
        lock(&self.state).pages_loaded
    }

    /// Returns true once the remote side reported no more data.
    pub fn end_reached(&self) -> bool {
        lock(&self.state).next_key.is_none()
    }

    /// Loads the page after the last one loaded.
    ///
    /// Does nothing while a load is running, after a failure, or at the end
    /// of data; the returned [`LoadStep`] says which.
    ///
    /// # Errors
    ///
    /// Propagates [`FetchError`] from the fetch function. The source returns
    /// to its previous state so the same key can be requested again.
    #[instrument(skip(self))]
    pub async fn load_next(&self) -> Result<LoadStep<T>, FetchError> {
        let (key, previous) = {
            let mut state = lock(&self.state);
            match state.load_state {
                LoadState::Loading(key) => return Ok(LoadStep::AlreadyLoading(key)),
                LoadState::Error { key, .. } => return Ok(LoadStep::AwaitingRetry(key)),
                LoadState::Idle | LoadState::Loaded { .. } => {}
            }
            let Some(key) = state.next_key else {
                return Ok(LoadStep::EndReached);
            };
            let previous = state.load_state;
            state.load_state = LoadState::Loading(key);
            (key, previous)
        };

        self.fetch_key(key, previous).await
    }

    /// Reloads the page that failed last, with the same key.
    ///
    /// # Errors
    ///
    /// Same as [`load_next`](Self::load_next).
    #[instrument(skip(self))]
    pub async fn retry(&self) -> Result<LoadStep<T>, FetchError> {
        let (key, previous) = {
            let mut state = lock(&self.state);
            match state.load_state {
                LoadState::Error { key, .. } => {
                    let previous = state.load_state;
                    state.load_state = LoadState::Loading(key);
                    (key, previous)
                }
                LoadState::Loading(key) => return Ok(LoadStep::AlreadyLoading(key)),
                LoadState::Idle | LoadState::Loaded { .. } => return Ok(LoadStep::NotNeeded),
            }
        };

        debug!(key = %key, "Retrying page");
        self.fetch_key(key, previous).await
    }

    /// Reports that the item at `index` is being looked at, loading the next
    /// page when fewer than the prefetch distance of items remain after it.
    ///
    /// # Errors
    ///
    /// Same as [`load_next`](Self::load_next).
    pub async fn access(&self, index: usize) -> Result<LoadStep<T>, FetchError> {
        let len = self.len();
        let distance = self.config.prefetch_distance as usize;
        if index.saturating_add(distance) >= len {
            self.load_next().await
        } else {
            Ok(LoadStep::NotNeeded)
        }
    }

    /// Drives the source to the end as a stream of pages.
    ///
    /// The stream ends at end of data, after the first classified failure
    /// (yielded as [`LoadResult::Error`]) or after the first propagated
    /// error. It assumes it is the only driver of the source.
    pub fn pages(&self) -> impl Stream<Item = Result<LoadResult<T>, FetchError>> + Send + 'static {
        stream::unfold(Some(self.clone()), |source| async move {
            let source = source?;
            match source.load_next().await {
                Ok(LoadStep::Loaded(page)) => Some((Ok(LoadResult::Page(page)), Some(source))),
                Ok(LoadStep::Failed { cause, .. }) => Some((Ok(LoadResult::Error(cause)), None)),
                Ok(_) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
    }

    async fn fetch_key(&self, key: PageKey, previous: LoadState) -> Result<LoadStep<T>, FetchError> {
        let mut in_flight = InFlight {
            state: &self.state,
            key,
            previous,
            armed: true,
        };
        debug!(key = %key, "Loading page");
        let result = (self.fetch)(key).await;
        in_flight.disarm();

        let mut state = lock(&self.state);
        match result {
            Ok(LoadResult::Page(page)) => {
                state.items.extend(page.items.iter().cloned());
                state.next_key = page.next_offset.map(|offset| self.config.key_at(offset));
                state.pages_loaded += 1;
                let end_reached = state.next_key.is_none();
                state.load_state = LoadState::Loaded { end_reached };
                debug!(key = %key, count = page.len(), end = page.is_end(), "Page loaded");
                Ok(LoadStep::Loaded(page))
            }
            Ok(LoadResult::Error(cause)) => {
                warn!(key = %key, cause = %cause, "Page load failed");
                state.load_state = LoadState::Error { key, cause };
                Ok(LoadStep::Failed { key, cause })
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Page load aborted");
                state.load_state = previous;
                Err(e)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::collections::HashSet;
    use std::time::Duration;

    /// A remote list of `total` numbers that records every key requested.
    #[derive(Clone)]
    struct Remote {
        total: u32,
        requests: Arc<Mutex<Vec<PageKey>>>,
        failing_once: Arc<Mutex<HashSet<u32>>>,
    }

    impl Remote {
        fn new(total: u32) -> Self {
            Self {
                total,
                requests: Arc::default(),
                failing_once: Arc::default(),
            }
        }

        fn fail_once_at(self, offset: u32) -> Self {
            self.failing_once.lock().unwrap().insert(offset);
            self
        }

        fn offsets(&self) -> Vec<u32> {
            self.requests.lock().unwrap().iter().map(|k| k.offset).collect()
        }

        fn load(&self, key: PageKey) -> LoadResult<u32> {
            self.requests.lock().unwrap().push(key);
            if self.failing_once.lock().unwrap().remove(&key.offset) {
                return LoadResult::Error(ErrorKind::NetworkConnectionFailure);
            }
            let end = key.end_offset().min(self.total);
            let items = (key.offset.min(end)..end).collect();
            LoadResult::Page(Page::new(key, items, None))
        }

        fn source(&self, config: PagingConfig) -> PagingSource<u32> {
            let remote = self.clone();
            PagingSource::new(config, move |key| {
                let result = remote.load(key);
                async move { Ok(result) }
            })
        }
    }

    #[tokio::test]
    async fn test_short_last_page_ends() {
        let remote = Remote::new(25);
        let source = remote.source(PagingConfig::default());

        assert!(matches!(source.load_next().await.unwrap(), LoadStep::Loaded(p) if p.len() == 20));
        assert_eq!(source.state(), LoadState::Loaded { end_reached: false });

        assert!(matches!(source.load_next().await.unwrap(), LoadStep::Loaded(p) if p.len() == 5));
        assert_eq!(source.state(), LoadState::Loaded { end_reached: true });

        assert_eq!(source.load_next().await.unwrap(), LoadStep::EndReached);
        assert_eq!(remote.offsets(), vec![0, 20]);
        assert_eq!(source.items(), (0..25).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_exact_multiple_costs_one_empty_fetch() {
        let remote = Remote::new(40);
        let source = remote.source(PagingConfig::default());

        let pages: Vec<_> = source.pages().collect().await;
        assert_eq!(pages.len(), 3);
        assert_eq!(remote.offsets(), vec![0, 20, 40]);
        assert_eq!(source.len(), 40);
        assert!(source.end_reached());
    }

    #[tokio::test]
    async fn test_failed_page_retries_same_key() {
        let remote = Remote::new(60).fail_once_at(20);
        let source = remote.source(PagingConfig::default());

        source.load_next().await.unwrap();
        let failed = source.load_next().await.unwrap();
        assert_eq!(
            failed,
            LoadStep::Failed {
                key: PageKey::new(20, 20),
                cause: ErrorKind::NetworkConnectionFailure,
            }
        );

        // Forward progress is blocked until a retry.
        assert_eq!(
            source.load_next().await.unwrap(),
            LoadStep::AwaitingRetry(PageKey::new(20, 20))
        );

        assert!(matches!(source.retry().await.unwrap(), LoadStep::Loaded(p) if p.key.offset == 20));
        source.load_next().await.unwrap();

        assert_eq!(remote.offsets(), vec![0, 20, 20, 40]);
        assert_eq!(source.items(), (0..60).collect::<Vec<_>>());
        assert_eq!(source.pages_loaded(), 3);
    }

    #[tokio::test]
    async fn test_offsets_are_multiples_of_page_size() {
        let remote = Remote::new(95).fail_once_at(40).fail_once_at(80);
        let source = remote.source(PagingConfig::with_page_size(20));

        loop {
            match source.load_next().await.unwrap() {
                LoadStep::Loaded(_) => {}
                LoadStep::Failed { .. } => {
                    source.retry().await.unwrap();
                }
                LoadStep::EndReached => break,
                other => panic!("unexpected step {other:?}"),
            }
        }

        let offsets = remote.offsets();
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        let mut distinct = offsets.clone();
        distinct.dedup();
        for (k, offset) in distinct.iter().enumerate() {
            assert_eq!(*offset, 20 * u32::try_from(k).unwrap());
        }
        assert_eq!(source.len(), 95);
    }

    #[tokio::test]
    async fn test_retry_without_failure_is_noop() {
        let remote = Remote::new(10);
        let source = remote.source(PagingConfig::default());
        assert_eq!(source.retry().await.unwrap(), LoadStep::NotNeeded);
        assert!(remote.offsets().is_empty());
    }

    #[tokio::test]
    async fn test_access_prefetches_near_end() {
        let remote = Remote::new(100);
        let source = remote.source(PagingConfig::with_page_size(20).prefetch_distance(5));

        source.access(0).await.unwrap();
        assert_eq!(source.len(), 20);

        assert_eq!(source.access(10).await.unwrap(), LoadStep::NotNeeded);
        assert_eq!(source.len(), 20);

        assert!(matches!(source.access(15).await.unwrap(), LoadStep::Loaded(_)));
        assert_eq!(source.len(), 40);
        assert_eq!(remote.offsets(), vec![0, 20]);
    }

    #[tokio::test]
    async fn test_zero_page_size_stream_ends() {
        let remote = Remote::new(10);
        let source = remote.source(PagingConfig::with_page_size(0));

        let pages: Vec<_> = source.pages().collect().await;
        assert_eq!(pages.len(), 1);
        assert_eq!(remote.offsets(), vec![0]);
        assert!(source.is_empty());
        assert!(source.end_reached());
    }

    #[tokio::test]
    async fn test_stream_stops_after_failure() {
        let remote = Remote::new(100).fail_once_at(20);
        let source = remote.source(PagingConfig::default());

        let pages: Vec<_> = source.pages().collect().await;
        assert_eq!(pages.len(), 2);
        assert!(matches!(pages[1], Ok(LoadResult::Error(ErrorKind::NetworkConnectionFailure))));
    }

    #[tokio::test]
    async fn test_concurrent_load_is_refused() {
        let source = PagingSource::new(PagingConfig::default(), |key| async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(LoadResult::Page(Page::new(key, vec![1u8; 20], None)))
        });

        let (first, second) = tokio::join!(source.load_next(), source.load_next());
        assert!(matches!(first.unwrap(), LoadStep::Loaded(_)));
        assert_eq!(second.unwrap(), LoadStep::AlreadyLoading(PageKey::new(0, 20)));
    }

    #[tokio::test]
    async fn test_propagated_error_restores_state() {
        let source: PagingSource<u8> = PagingSource::new(PagingConfig::default(), |_| async {
            Err(FetchError::Unclassified(crate::RemoteError::Unexpected("boom".into())))
        });

        assert!(source.load_next().await.is_err());
        assert_eq!(source.state(), LoadState::Idle);
    }

    #[tokio::test]
    async fn test_abandoned_load_restores_state() {
        let source: PagingSource<u8> = PagingSource::new(PagingConfig::default(), |_| {
            futures::future::pending::<Result<LoadResult<u8>, FetchError>>()
        });

        let timed_out = tokio::time::timeout(Duration::from_millis(10), source.load_next()).await;
        assert!(timed_out.is_err());
        assert_eq!(source.state(), LoadState::Idle);
    }
}
