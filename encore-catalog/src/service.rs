//! The remote catalog seam.
//!
//! [`CatalogService`] is one method per remote endpoint, returning raw
//! response types. Paging adapters and repositories map the responses; tests
//! substitute their own implementation.

use async_trait::async_trait;
use encore_core::BearerToken;
use encore_fetch::RemoteError;
use std::fmt;

use crate::spotify::dto::{
    AlbumDto, AlbumSimplified, ArtistDto, CategoriesResponse, CategoryPlaylistsResponse, EpisodeDto,
    FeaturedPlaylistsResponse, NewReleasesResponse, PagingObject, PlaylistItemDto,
    SearchResponse, ShowDto, TracksResponse,
};

/// Kinds of object a search can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Tracks.
    Track,
    /// Albums.
    Album,
    /// Artists.
    Artist,
    /// Playlists.
    Playlist,
    /// Podcast shows.
    Show,
    /// Podcast episodes.
    Episode,
}

impl SearchKind {
    /// All kinds, in display order.
    pub fn all() -> &'static [SearchKind] {
        &[
            Self::Track,
            Self::Album,
            Self::Artist,
            Self::Playlist,
            Self::Show,
            Self::Episode,
        ]
    }

    /// The value used in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Album => "album",
            Self::Artist => "artist",
            Self::Playlist => "playlist",
            Self::Show => "show",
            Self::Episode => "episode",
        }
    }

    /// Comma-separated `type` parameter for several kinds.
    pub fn join(kinds: &[SearchKind]) -> String {
        kinds.iter().map(SearchKind::as_str).collect::<Vec<_>>().join(",")
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Offset and limit of a paged request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// First item.
    pub offset: u32,
    /// Maximum number of items.
    pub limit: u32,
}

impl Window {
    /// The first `limit` items.
    pub fn first(limit: u32) -> Self {
        Self { offset: 0, limit }
    }
}

impl From<encore_core::PageKey> for Window {
    fn from(key: encore_core::PageKey) -> Self {
        Self {
            offset: key.offset,
            limit: key.limit,
        }
    }
}

/// Remote music and podcast catalog.
///
/// `market` is an ISO 3166-1 alpha-2 country code; `locale` is
/// `{language}_{country}`.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Searches the catalog for `kinds`.
    async fn search(
        &self,
        token: &BearerToken,
        query: &str,
        kinds: &[SearchKind],
        market: &str,
        window: Window,
    ) -> Result<SearchResponse, RemoteError>;

    /// Fetches an album with its tracks.
    async fn album(&self, token: &BearerToken, album_id: &str, market: &str)
        -> Result<AlbumDto, RemoteError>;

    /// Fetches an artist.
    async fn artist(&self, token: &BearerToken, artist_id: &str) -> Result<ArtistDto, RemoteError>;

    /// Fetches a page of an artist's albums.
    async fn albums_of_artist(
        &self,
        token: &BearerToken,
        artist_id: &str,
        market: &str,
        window: Window,
    ) -> Result<PagingObject<AlbumSimplified>, RemoteError>;

    /// Fetches an artist's top tracks.
    async fn top_tracks_of_artist(
        &self,
        token: &BearerToken,
        artist_id: &str,
        market: &str,
    ) -> Result<TracksResponse, RemoteError>;

    /// Fetches tracks recommended for seed genres.
    async fn recommendations(
        &self,
        token: &BearerToken,
        seed_genres: &[&str],
        market: &str,
        limit: u32,
    ) -> Result<TracksResponse, RemoteError>;

    /// Fetches a page of a playlist's entries.
    async fn playlist_tracks(
        &self,
        token: &BearerToken,
        playlist_id: &str,
        market: &str,
        window: Window,
    ) -> Result<PagingObject<PlaylistItemDto>, RemoteError>;

    /// Fetches a show.
    async fn show(&self, token: &BearerToken, show_id: &str, market: &str)
        -> Result<ShowDto, RemoteError>;

    /// Fetches a page of a show's episodes.
    async fn episodes_of_show(
        &self,
        token: &BearerToken,
        show_id: &str,
        market: &str,
        window: Window,
    ) -> Result<PagingObject<EpisodeDto>, RemoteError>;

    /// Fetches an episode with its show.
    async fn episode(
        &self,
        token: &BearerToken,
        episode_id: &str,
        market: &str,
    ) -> Result<EpisodeDto, RemoteError>;

    /// Fetches newly released albums.
    async fn new_releases(
        &self,
        token: &BearerToken,
        market: &str,
        window: Window,
    ) -> Result<NewReleasesResponse, RemoteError>;

    /// Fetches editorially featured playlists for a point in time.
    ///
    /// `timestamp` is local time formatted `YYYY-MM-DDTHH:MM:SS`.
    async fn featured_playlists(
        &self,
        token: &BearerToken,
        market: &str,
        locale: &str,
        timestamp: &str,
    ) -> Result<FeaturedPlaylistsResponse, RemoteError>;

    /// Fetches browse categories.
    async fn browse_categories(
        &self,
        token: &BearerToken,
        market: &str,
        locale: &str,
    ) -> Result<CategoriesResponse, RemoteError>;

    /// Fetches the playlists of a browse category.
    async fn category_playlists(
        &self,
        token: &BearerToken,
        category_id: &str,
        market: &str,
    ) -> Result<CategoryPlaylistsResponse, RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_parameter() {
        assert_eq!(
            SearchKind::join(SearchKind::all()),
            "track,album,artist,playlist,show,episode"
        );
        assert_eq!(SearchKind::join(&[SearchKind::Show]), "show");
    }
}
