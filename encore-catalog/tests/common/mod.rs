//! Hand-written catalog and credential doubles shared by the integration
//! tests.

#![allow(dead_code)]

use async_trait::async_trait;
use encore_catalog::spotify::dto::{
    AlbumDto, AlbumSimplified, ArtistDto, CategoriesResponse, CategoryPlaylistsResponse,
    EpisodeDto, FeaturedPlaylistsResponse, NewReleasesResponse, PagingObject, PlaylistItemDto,
    SearchResponse, ShowDto, TracksResponse,
};
use encore_catalog::{CatalogContext, CatalogService, SearchKind, Window};
use encore_core::{BearerToken, CredentialError, PagingConfig};
use encore_fetch::{CredentialProvider, RemoteError};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Credentials
// ============================================================================

/// Hands out the same token and counts requests.
#[derive(Default)]
pub struct StaticTokens {
    pub calls: AtomicU32,
    pub fail: bool,
}

impl StaticTokens {
    pub fn failing() -> Self {
        Self {
            calls: AtomicU32::new(0),
            fail: true,
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticTokens {
    async fn valid_bearer_token(&self) -> Result<BearerToken, CredentialError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CredentialError::Rejected { status: 400 });
        }
        Ok(BearerToken::issued_now("test-token", chrono::Duration::hours(1)))
    }
}

// ============================================================================
// Catalog
// ============================================================================

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, RemoteError> {
    Ok(serde_json::from_value(value)?)
}

fn status(code: u16, url: &str) -> RemoteError {
    RemoteError::Status {
        status: code,
        url: url.to_string(),
    }
}

fn images(prefix: &str) -> Value {
    json!([
        { "url": format!("https://img/{prefix}/640"), "width": 640, "height": 640 },
        { "url": format!("https://img/{prefix}/300"), "width": 300, "height": 300 },
        { "url": format!("https://img/{prefix}/64"), "width": 64, "height": 64 }
    ])
}

fn paging(items: Vec<Value>, window: Window, total: u32) -> Value {
    let more = window.offset + window.limit < total;
    json!({
        "items": items,
        "total": total,
        "next": more.then(|| format!("https://api/next?offset={}", window.offset + window.limit)),
    })
}

fn range(window: Window, total: u32) -> std::ops::Range<u32> {
    let end = (window.offset + window.limit).min(total);
    window.offset.min(end)..end
}

pub fn track_json(id: &str, with_album: bool) -> Value {
    let mut track = json!({
        "id": id,
        "name": format!("Track {id}"),
        "artists": [{ "id": "ar1", "name": "Artist One" }, { "id": "ar2", "name": "Artist Two" }],
        "preview_url": format!("https://preview/{id}")
    });
    if with_album {
        track["album"] = json!({
            "id": "al1",
            "name": "Album",
            "images": images("al1"),
            "artists": [{ "id": "ar1", "name": "Artist One" }],
            "release_date": "1999-01-01"
        });
    }
    track
}

fn playlist_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Playlist {id}"),
        "owner": { "display_name": "Editor" },
        "tracks": { "total": 42 },
        "images": images(id)
    })
}

/// A scripted catalog that records every call.
#[derive(Default)]
pub struct MockCatalog {
    /// Calls in arrival order, e.g. `playlist:P1:0:20`.
    pub calls: Mutex<Vec<String>>,
    /// Playlist id to number of tracks.
    pub playlists: HashMap<String, u32>,
    /// Show id to number of episodes.
    pub shows: HashMap<String, u32>,
    /// Status returned by the show endpoint.
    pub show_status: Option<u16>,
    /// Status returned by the episodes endpoint.
    pub episodes_status: Option<u16>,
    /// Categories as (id, name, delay before answering its playlists).
    pub categories: Vec<(String, String, Duration)>,
    /// Category whose playlists fail.
    pub failing_category: Option<String>,
    /// Number of results per search kind.
    pub search_total: u32,
    /// Seeds passed to recommendations.
    pub seeds: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_playlist(mut self, id: &str, tracks: u32) -> Self {
        self.playlists.insert(id.to_string(), tracks);
        self
    }

    pub fn with_show(mut self, id: &str, episodes: u32) -> Self {
        self.shows.insert(id.to_string(), episodes);
        self
    }

    pub fn with_category(mut self, id: &str, name: &str, delay_ms: u64) -> Self {
        self.categories
            .push((id.to_string(), name.to_string(), Duration::from_millis(delay_ms)));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_starting_with(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn into_context(self) -> (Arc<MockCatalog>, Arc<StaticTokens>, CatalogContext) {
        let catalog = Arc::new(self);
        let tokens = Arc::new(StaticTokens::default());
        let ctx = CatalogContext::new(tokens.clone(), catalog.clone(), PagingConfig::default());
        (catalog, tokens, ctx)
    }
}

#[async_trait]
impl CatalogService for MockCatalog {
    async fn search(
        &self,
        _token: &BearerToken,
        query: &str,
        kinds: &[SearchKind],
        _market: &str,
        window: Window,
    ) -> Result<SearchResponse, RemoteError> {
        self.record(format!("search:{query}:{}:{}", SearchKind::join(kinds), window.offset));
        let ids: Vec<String> = range(window, self.search_total).map(|i| format!("{query}{i}")).collect();
        let mut response = serde_json::Map::new();
        for kind in kinds {
            let items: Vec<Value> = ids
                .iter()
                .map(|id| match kind {
                    SearchKind::Track => track_json(id, true),
                    SearchKind::Album => json!({ "id": id, "name": id, "release_date": "2020" }),
                    SearchKind::Artist => json!({ "id": id, "name": id }),
                    SearchKind::Playlist => playlist_json(id),
                    SearchKind::Show => json!({ "id": id, "name": id, "publisher": "Pub" }),
                    SearchKind::Episode => json!({ "id": id, "name": id, "duration_ms": 1000 }),
                })
                .collect();
            response.insert(
                format!("{}s", kind.as_str()),
                paging(items, window, self.search_total),
            );
        }
        decode(Value::Object(response))
    }

    async fn album(
        &self,
        _token: &BearerToken,
        album_id: &str,
        _market: &str,
    ) -> Result<AlbumDto, RemoteError> {
        self.record(format!("album:{album_id}"));
        if album_id == "missing" {
            return Err(status(404, "https://api/albums/missing"));
        }
        decode(json!({
            "id": album_id,
            "name": "Album",
            "images": images(album_id),
            "artists": [{ "id": "ar1", "name": "Artist One" }],
            "release_date": "2011-05-01",
            "tracks": paging(
                vec![track_json("t1", false), track_json("t2", false)],
                Window::first(50),
                2
            )
        }))
    }

    async fn artist(&self, _token: &BearerToken, artist_id: &str) -> Result<ArtistDto, RemoteError> {
        self.record(format!("artist:{artist_id}"));
        decode(json!({ "id": artist_id, "name": "Artist" }))
    }

    async fn albums_of_artist(
        &self,
        _token: &BearerToken,
        artist_id: &str,
        _market: &str,
        window: Window,
    ) -> Result<PagingObject<AlbumSimplified>, RemoteError> {
        self.record(format!("artist-albums:{artist_id}:{}:{}", window.offset, window.limit));
        let items = range(window, 3)
            .map(|i| json!({ "id": format!("al{i}"), "name": "A", "release_date": "2001" }))
            .collect();
        decode(paging(items, window, 3))
    }

    async fn top_tracks_of_artist(
        &self,
        _token: &BearerToken,
        artist_id: &str,
        _market: &str,
    ) -> Result<TracksResponse, RemoteError> {
        self.record(format!("top-tracks:{artist_id}"));
        decode(json!({ "tracks": [track_json("t1", true)] }))
    }

    async fn recommendations(
        &self,
        _token: &BearerToken,
        seed_genres: &[&str],
        _market: &str,
        limit: u32,
    ) -> Result<TracksResponse, RemoteError> {
        self.record(format!("recommendations:{limit}"));
        self.seeds
            .lock()
            .unwrap()
            .extend(seed_genres.iter().map(ToString::to_string));
        decode(json!({ "tracks": [track_json("t1", true), track_json("t2", true)] }))
    }

    async fn playlist_tracks(
        &self,
        _token: &BearerToken,
        playlist_id: &str,
        _market: &str,
        window: Window,
    ) -> Result<PagingObject<PlaylistItemDto>, RemoteError> {
        self.record(format!("playlist:{playlist_id}:{}:{}", window.offset, window.limit));
        let Some(&total) = self.playlists.get(playlist_id) else {
            return Err(status(404, "https://api/playlists"));
        };
        let items = range(window, total)
            .map(|i| json!({ "track": track_json(&format!("{playlist_id}-{i}"), true) }))
            .collect();
        decode(paging(items, window, total))
    }

    async fn show(&self, _token: &BearerToken, show_id: &str, _market: &str) -> Result<ShowDto, RemoteError> {
        self.record(format!("show:{show_id}"));
        if let Some(code) = self.show_status {
            return Err(status(code, "https://api/shows"));
        }
        decode(json!({
            "id": show_id,
            "name": format!("Show {show_id}"),
            "publisher": "Publisher",
            "html_description": "<p>About</p>",
            "images": images(show_id)
        }))
    }

    async fn episodes_of_show(
        &self,
        _token: &BearerToken,
        show_id: &str,
        _market: &str,
        window: Window,
    ) -> Result<PagingObject<EpisodeDto>, RemoteError> {
        self.record(format!("episodes:{show_id}:{}:{}", window.offset, window.limit));
        if let Some(code) = self.episodes_status {
            return Err(status(code, "https://api/episodes"));
        }
        let total = self.shows.get(show_id).copied().unwrap_or(0);
        let items = range(window, total)
            .map(|i| {
                json!({
                    "id": format!("{show_id}-e{i}"),
                    "name": format!("Episode {i}"),
                    "description": "desc",
                    "release_date": "2024-01-01",
                    "duration_ms": 3_600_000
                })
            })
            .collect();
        decode(paging(items, window, total))
    }

    async fn episode(
        &self,
        _token: &BearerToken,
        episode_id: &str,
        _market: &str,
    ) -> Result<EpisodeDto, RemoteError> {
        self.record(format!("episode:{episode_id}"));
        decode(json!({
            "id": episode_id,
            "name": "Episode",
            "duration_ms": 60_000,
            "show": { "id": "s1", "name": "Show s1", "publisher": "Publisher", "images": images("s1") }
        }))
    }

    async fn new_releases(
        &self,
        _token: &BearerToken,
        _market: &str,
        window: Window,
    ) -> Result<NewReleasesResponse, RemoteError> {
        self.record("new-releases".to_string());
        let items = vec![json!({ "id": "n1", "name": "New", "release_date": "2024-03-01" })];
        decode(json!({ "albums": paging(items, window, 1) }))
    }

    async fn featured_playlists(
        &self,
        _token: &BearerToken,
        _market: &str,
        locale: &str,
        timestamp: &str,
    ) -> Result<FeaturedPlaylistsResponse, RemoteError> {
        self.record(format!("featured:{locale}:{timestamp}"));
        decode(json!({
            "message": "Good morning",
            "playlists": paging(vec![playlist_json("f1"), Value::Null], Window::first(20), 1)
        }))
    }

    async fn browse_categories(
        &self,
        _token: &BearerToken,
        _market: &str,
        locale: &str,
    ) -> Result<CategoriesResponse, RemoteError> {
        self.record(format!("categories:{locale}"));
        let items = self
            .categories
            .iter()
            .map(|(id, name, _)| json!({ "id": id, "name": name }))
            .collect();
        decode(json!({ "categories": paging(items, Window::first(50), 0) }))
    }

    async fn category_playlists(
        &self,
        _token: &BearerToken,
        category_id: &str,
        _market: &str,
    ) -> Result<CategoryPlaylistsResponse, RemoteError> {
        let delay = self
            .categories
            .iter()
            .find(|(id, _, _)| id == category_id)
            .map(|(_, _, delay)| *delay)
            .unwrap_or_default();
        tokio::time::sleep(delay).await;
        self.record(format!("category:{category_id}"));
        if self.failing_category.as_deref() == Some(category_id) {
            return Err(status(429, "https://api/browse/categories"));
        }
        decode(json!({
            "playlists": paging(vec![playlist_json(&format!("{category_id}-p"))], Window::first(20), 1)
        }))
    }
}
