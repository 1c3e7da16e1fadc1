//! Spotify Web API response types.
//!
//! Only the fields Encore maps are declared; everything else in the payloads
//! is ignored. Optional collections default to empty so sparse objects
//! (simplified albums inside tracks, episodes without a show) still decode.

use encore_core::{ImageVariant, Page, PageKey};
use serde::{Deserialize, Deserializer};

// ============================================================================
// Paging Object
// ============================================================================

/// Spotify's envelope around a page of items.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PagingObject<T> {
    /// Items of this page. `null` entries are dropped.
    #[serde(default = "Vec::new", deserialize_with = "skip_nulls")]
    pub items: Vec<T>,
    /// Total number of items in the collection.
    #[serde(default)]
    pub total: u32,
    /// URL of the next page, absent on the last page.
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> PagingObject<T> {
    /// Returns true if the remote side reports another page.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    /// Converts into a [`Page`] loaded with `key`, mapping every item.
    pub fn into_page<U>(self, key: PageKey, mut map: impl FnMut(T) -> U) -> Page<U> {
        self.into_page_with(key, |item| Some(map(item)))
    }

    /// Like [`into_page`](Self::into_page), dropping items `map` rejects.
    ///
    /// The end of data is taken from `next`, so dropped items never cut
    /// pagination short.
    pub fn into_page_with<U>(self, key: PageKey, map: impl FnMut(T) -> Option<U>) -> Page<U> {
        let has_more = self.has_more();
        Page::new(key, self.items.into_iter().filter_map(map).collect(), Some(has_more))
    }
}

impl<T> Default for PagingObject<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            next: None,
        }
    }
}

fn skip_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items: Vec<Option<T>> = Vec::deserialize(deserializer)?;
    Ok(items.into_iter().flatten().collect())
}

// ============================================================================
// Artists & Albums
// ============================================================================

/// Artist as embedded in tracks and albums.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSimplified {
    /// Artist id.
    pub id: String,
    /// Artist name.
    pub name: String,
}

/// Full artist object.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistDto {
    /// Artist id.
    pub id: String,
    /// Artist name.
    pub name: String,
    /// Pictures, largest first.
    #[serde(default)]
    pub images: Vec<ImageVariant>,
}

/// Album as it appears in listings.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumSimplified {
    /// Album id.
    pub id: String,
    /// Album name.
    pub name: String,
    /// Cover art, largest first.
    #[serde(default)]
    pub images: Vec<ImageVariant>,
    /// Credited artists.
    #[serde(default)]
    pub artists: Vec<ArtistSimplified>,
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    #[serde(default)]
    pub release_date: String,
}

/// Full album object with its first page of tracks.
#[derive(Debug, Clone, Deserialize)]
pub struct AlbumDto {
    /// Album id.
    pub id: String,
    /// Album name.
    pub name: String,
    /// Cover art, largest first.
    #[serde(default)]
    pub images: Vec<ImageVariant>,
    /// Credited artists.
    #[serde(default)]
    pub artists: Vec<ArtistSimplified>,
    /// Release date.
    #[serde(default)]
    pub release_date: String,
    /// Tracks of the album. Album tracks carry no album object.
    #[serde(default)]
    pub tracks: PagingObject<TrackDto>,
}

// ============================================================================
// Tracks
// ============================================================================

/// Track object; `album` is absent when listed inside an album.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackDto {
    /// Track id.
    pub id: String,
    /// Track name.
    pub name: String,
    /// Credited artists.
    #[serde(default)]
    pub artists: Vec<ArtistSimplified>,
    /// The album the track appears on.
    #[serde(default)]
    pub album: Option<AlbumSimplified>,
    /// 30 second MP3 preview.
    #[serde(default)]
    pub preview_url: Option<String>,
}

/// Entry of a playlist; `track` is null for removed or local items.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItemDto {
    /// The track.
    #[serde(default)]
    pub track: Option<TrackDto>,
}

/// Response of `/artists/{id}/top-tracks` and `/recommendations`.
#[derive(Debug, Clone, Deserialize)]
pub struct TracksResponse {
    /// The tracks.
    #[serde(default)]
    pub tracks: Vec<TrackDto>,
}

// ============================================================================
// Playlists
// ============================================================================

/// Playlist owner.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnerDto {
    /// Owner display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Reference to the tracks of a playlist.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TracksRef {
    /// Number of tracks.
    #[serde(default)]
    pub total: u32,
}

/// Playlist as it appears in listings.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSimplified {
    /// Playlist id.
    pub id: String,
    /// Playlist name.
    pub name: String,
    /// Owner.
    #[serde(default)]
    pub owner: OwnerDto,
    /// Track count.
    #[serde(default)]
    pub tracks: TracksRef,
    /// Cover images.
    #[serde(default)]
    pub images: Vec<ImageVariant>,
}

// ============================================================================
// Shows & Episodes
// ============================================================================

/// Show as it appears in listings and inside episodes.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowSimplified {
    /// Show id.
    pub id: String,
    /// Show name.
    pub name: String,
    /// Publisher.
    #[serde(default)]
    pub publisher: String,
    /// Cover images.
    #[serde(default)]
    pub images: Vec<ImageVariant>,
}

/// Full show object.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowDto {
    /// Show id.
    pub id: String,
    /// Show name.
    pub name: String,
    /// Publisher.
    #[serde(default)]
    pub publisher: String,
    /// Description with HTML markup.
    #[serde(default)]
    pub html_description: String,
    /// Cover images.
    #[serde(default)]
    pub images: Vec<ImageVariant>,
}

/// Episode object; `show` is absent when listed inside a show.
#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeDto {
    /// Episode id.
    pub id: String,
    /// Episode name.
    pub name: String,
    /// Plain-text description.
    #[serde(default)]
    pub description: String,
    /// Release date.
    #[serde(default)]
    pub release_date: String,
    /// Length in milliseconds.
    #[serde(default)]
    pub duration_ms: u64,
    /// Episode images.
    #[serde(default)]
    pub images: Vec<ImageVariant>,
    /// Preview audio.
    #[serde(default)]
    pub audio_preview_url: Option<String>,
    /// The show.
    #[serde(default)]
    pub show: Option<ShowSimplified>,
}

// ============================================================================
// Search & Browse
// ============================================================================

/// Response of `/search`; only requested kinds are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Matching tracks.
    #[serde(default)]
    pub tracks: Option<PagingObject<TrackDto>>,
    /// Matching albums.
    #[serde(default)]
    pub albums: Option<PagingObject<AlbumSimplified>>,
    /// Matching artists.
    #[serde(default)]
    pub artists: Option<PagingObject<ArtistDto>>,
    /// Matching playlists.
    #[serde(default)]
    pub playlists: Option<PagingObject<PlaylistSimplified>>,
    /// Matching shows.
    #[serde(default)]
    pub shows: Option<PagingObject<ShowSimplified>>,
    /// Matching episodes.
    #[serde(default)]
    pub episodes: Option<PagingObject<EpisodeDto>>,
}

/// Response of `/browse/new-releases`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReleasesResponse {
    /// Newly released albums.
    pub albums: PagingObject<AlbumSimplified>,
}

/// Response of `/browse/featured-playlists`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeaturedPlaylistsResponse {
    /// Editorial message.
    #[serde(default)]
    pub message: Option<String>,
    /// Featured playlists.
    pub playlists: PagingObject<PlaylistSimplified>,
}

/// A browse category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    /// Category id.
    pub id: String,
    /// Category name.
    pub name: String,
}

/// Response of `/browse/categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    /// The categories.
    pub categories: PagingObject<CategoryDto>,
}

/// Response of `/browse/categories/{id}/playlists`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPlaylistsResponse {
    /// Playlists of the category.
    pub playlists: PagingObject<PlaylistSimplified>,
}

// ============================================================================
// Token
// ============================================================================

/// Response of the client-credentials token exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The bearer token.
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
}
