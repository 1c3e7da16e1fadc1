//! Spotify Web API client.

use async_trait::async_trait;
use encore_core::BearerToken;
use encore_fetch::{HttpClient, RemoteError};
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::dto::{
    AlbumDto, AlbumSimplified, ArtistDto, CategoriesResponse, CategoryPlaylistsResponse,
    EpisodeDto, FeaturedPlaylistsResponse, NewReleasesResponse, PagingObject, PlaylistItemDto,
    SearchResponse, ShowDto, TracksResponse,
};
use crate::service::{CatalogService, SearchKind, Window};

/// Spotify Web API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Fields requested for playlist entries.
const PLAYLIST_ITEM_FIELDS: &str =
    "items(track(id,name,preview_url,artists(id,name),album(id,name,images,artists(id,name),release_date))),total,next";

/// [`CatalogService`] backed by the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: HttpClient,
    base_url: String,
}

impl SpotifyClient {
    /// Creates a client for the API at `base_url`.
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        token: &BearerToken,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, RemoteError> {
        self.http
            .get_json(&self.url(path), query, &token.authorization_header())
            .await
    }
}

fn paged(market: &str, window: Window) -> [(&'static str, String); 3] {
    [
        ("market", market.to_string()),
        ("offset", window.offset.to_string()),
        ("limit", window.limit.to_string()),
    ]
}

#[async_trait]
impl CatalogService for SpotifyClient {
    #[instrument(skip(self, token))]
    async fn search(
        &self,
        token: &BearerToken,
        query: &str,
        kinds: &[SearchKind],
        market: &str,
        window: Window,
    ) -> Result<SearchResponse, RemoteError> {
        let mut params = vec![("q", query.to_string()), ("type", SearchKind::join(kinds))];
        params.extend(paged(market, window));
        self.get(token, "/search", &params).await
    }

    #[instrument(skip(self, token))]
    async fn album(&self, token: &BearerToken, album_id: &str, market: &str)
        -> Result<AlbumDto, RemoteError> {
        self.get(token, &format!("/albums/{album_id}"), &[("market", market.to_string())])
            .await
    }

    #[instrument(skip(self, token))]
    async fn artist(&self, token: &BearerToken, artist_id: &str) -> Result<ArtistDto, RemoteError> {
        self.get(token, &format!("/artists/{artist_id}"), &[]).await
    }

    #[instrument(skip(self, token))]
    async fn albums_of_artist(
        &self,
        token: &BearerToken,
        artist_id: &str,
        market: &str,
        window: Window,
    ) -> Result<PagingObject<AlbumSimplified>, RemoteError> {
        let mut params = vec![("include_groups", "album,single".to_string())];
        params.extend(paged(market, window));
        self.get(token, &format!("/artists/{artist_id}/albums"), &params)
            .await
    }

    #[instrument(skip(self, token))]
    async fn top_tracks_of_artist(
        &self,
        token: &BearerToken,
        artist_id: &str,
        market: &str,
    ) -> Result<TracksResponse, RemoteError> {
        self.get(
            token,
            &format!("/artists/{artist_id}/top-tracks"),
            &[("market", market.to_string())],
        )
        .await
    }

    #[instrument(skip(self, token))]
    async fn recommendations(
        &self,
        token: &BearerToken,
        seed_genres: &[&str],
        market: &str,
        limit: u32,
    ) -> Result<TracksResponse, RemoteError> {
        self.get(
            token,
            "/recommendations",
            &[
                ("seed_genres", seed_genres.join(",")),
                ("market", market.to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self, token))]
    async fn playlist_tracks(
        &self,
        token: &BearerToken,
        playlist_id: &str,
        market: &str,
        window: Window,
    ) -> Result<PagingObject<PlaylistItemDto>, RemoteError> {
        let mut params = vec![("fields", PLAYLIST_ITEM_FIELDS.to_string())];
        params.extend(paged(market, window));
        self.get(token, &format!("/playlists/{playlist_id}/tracks"), &params)
            .await
    }

    #[instrument(skip(self, token))]
    async fn show(&self, token: &BearerToken, show_id: &str, market: &str)
        -> Result<ShowDto, RemoteError> {
        self.get(token, &format!("/shows/{show_id}"), &[("market", market.to_string())])
            .await
    }

    #[instrument(skip(self, token))]
    async fn episodes_of_show(
        &self,
        token: &BearerToken,
        show_id: &str,
        market: &str,
        window: Window,
    ) -> Result<PagingObject<EpisodeDto>, RemoteError> {
        self.get(
            token,
            &format!("/shows/{show_id}/episodes"),
            &paged(market, window),
        )
        .await
    }

    #[instrument(skip(self, token))]
    async fn episode(
        &self,
        token: &BearerToken,
        episode_id: &str,
        market: &str,
    ) -> Result<EpisodeDto, RemoteError> {
        self.get(
            token,
            &format!("/episodes/{episode_id}"),
            &[("market", market.to_string())],
        )
        .await
    }

    #[instrument(skip(self, token))]
    async fn new_releases(
        &self,
        token: &BearerToken,
        market: &str,
        window: Window,
    ) -> Result<NewReleasesResponse, RemoteError> {
        // The endpoint takes `country`, not `market`.
        self.get(
            token,
            "/browse/new-releases",
            &[
                ("country", market.to_string()),
                ("offset", window.offset.to_string()),
                ("limit", window.limit.to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self, token))]
    async fn featured_playlists(
        &self,
        token: &BearerToken,
        market: &str,
        locale: &str,
        timestamp: &str,
    ) -> Result<FeaturedPlaylistsResponse, RemoteError> {
        self.get(
            token,
            "/browse/featured-playlists",
            &[
                ("country", market.to_string()),
                ("locale", locale.to_string()),
                ("timestamp", timestamp.to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self, token))]
    async fn browse_categories(
        &self,
        token: &BearerToken,
        market: &str,
        locale: &str,
    ) -> Result<CategoriesResponse, RemoteError> {
        self.get(
            token,
            "/browse/categories",
            &[("country", market.to_string()), ("locale", locale.to_string())],
        )
        .await
    }

    #[instrument(skip(self, token))]
    async fn category_playlists(
        &self,
        token: &BearerToken,
        category_id: &str,
        market: &str,
    ) -> Result<CategoryPlaylistsResponse, RemoteError> {
        self.get(
            token,
            &format!("/browse/categories/{category_id}/playlists"),
            &[("country", market.to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = SpotifyClient::new(HttpClient::new().unwrap(), "https://api.spotify.com/v1/");
        assert_eq!(client.url("/albums/x"), "https://api.spotify.com/v1/albums/x");
    }

    #[test]
    fn test_paged_parameters() {
        let params = paged("SE", Window { offset: 40, limit: 20 });
        assert_eq!(params[0], ("market", "SE".to_string()));
        assert_eq!(params[1], ("offset", "40".to_string()));
        assert_eq!(params[2], ("limit", "20".to_string()));
    }
}
