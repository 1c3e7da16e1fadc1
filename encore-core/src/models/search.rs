//! Search-result types.
//!
//! Every catalog object that can appear in a list is represented by one of
//! the six [`SearchResult`] variants, whether it came from a search, a detail
//! lookup or a paged collection.

use serde::{Deserialize, Serialize};

// ============================================================================
// Individual Results
// ============================================================================

/// A track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSearchResult {
    /// Catalog id.
    pub id: String,
    /// Track title.
    pub name: String,
    /// Album art of the track's album.
    pub image_url: Option<String>,
    /// Artist names joined with ", ".
    pub artists_string: String,
    /// 30 second preview, when the catalog offers one.
    pub preview_url: Option<String>,
}

/// An album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumSearchResult {
    /// Catalog id.
    pub id: String,
    /// Album title.
    pub name: String,
    /// Artist names joined with ", ".
    pub artists_string: String,
    /// Album art.
    pub album_art_url: Option<String>,
    /// Four-digit release year.
    pub year_of_release: String,
}

/// An artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSearchResult {
    /// Catalog id.
    pub id: String,
    /// Artist name.
    pub name: String,
    /// Artist picture.
    pub image_url: Option<String>,
}

/// A playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSearchResult {
    /// Catalog id.
    pub id: String,
    /// Playlist name.
    pub name: String,
    /// Display name of the owner.
    pub owners_name: String,
    /// Number of tracks in the playlist.
    pub total_number_of_tracks: u32,
    /// Cover image.
    pub image_url: Option<String>,
}

/// A podcast show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastSearchResult {
    /// Catalog id.
    pub id: String,
    /// Show name.
    pub name: String,
    /// Publisher name.
    pub name_of_publisher: String,
    /// Cover image.
    pub image_url: Option<String>,
}

/// A podcast episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeSearchResult {
    /// Catalog id.
    pub id: String,
    /// Episode title.
    pub name: String,
    /// Plain-text description.
    pub description: String,
    /// Release date as published (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
    pub release_date: String,
    /// Length in milliseconds.
    pub duration_ms: u64,
    /// Cover image.
    pub image_url: Option<String>,
}

// ============================================================================
// Search Result
// ============================================================================

/// Any listable catalog object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    /// A track.
    Track(TrackSearchResult),
    /// An album.
    Album(AlbumSearchResult),
    /// An artist.
    Artist(ArtistSearchResult),
    /// A playlist.
    Playlist(PlaylistSearchResult),
    /// A podcast show.
    Podcast(PodcastSearchResult),
    /// A podcast episode.
    Episode(EpisodeSearchResult),
}

impl SearchResult {
    /// Catalog id of the wrapped object.
    pub fn id(&self) -> &str {
        match self {
            Self::Track(r) => &r.id,
            Self::Album(r) => &r.id,
            Self::Artist(r) => &r.id,
            Self::Playlist(r) => &r.id,
            Self::Podcast(r) => &r.id,
            Self::Episode(r) => &r.id,
        }
    }

    /// Display name of the wrapped object.
    pub fn name(&self) -> &str {
        match self {
            Self::Track(r) => &r.name,
            Self::Album(r) => &r.name,
            Self::Artist(r) => &r.name,
            Self::Playlist(r) => &r.name,
            Self::Podcast(r) => &r.name,
            Self::Episode(r) => &r.name,
        }
    }

    /// Lowercase kind label ("track", "album", ...).
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Track(_) => "track",
            Self::Album(_) => "album",
            Self::Artist(_) => "artist",
            Self::Playlist(_) => "playlist",
            Self::Podcast(_) => "podcast",
            Self::Episode(_) => "episode",
        }
    }
}

// ============================================================================
// Search Results
// ============================================================================

/// Everything that matched one search query, grouped by kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching tracks.
    pub tracks: Vec<TrackSearchResult>,
    /// Matching albums.
    pub albums: Vec<AlbumSearchResult>,
    /// Matching artists.
    pub artists: Vec<ArtistSearchResult>,
    /// Matching playlists.
    pub playlists: Vec<PlaylistSearchResult>,
    /// Matching podcast shows.
    pub shows: Vec<PodcastSearchResult>,
    /// Matching podcast episodes.
    pub episodes: Vec<EpisodeSearchResult>,
}

impl SearchResults {
    /// Results with every list empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Total number of results across all kinds.
    pub fn total(&self) -> usize {
        self.tracks.len()
            + self.albums.len()
            + self.artists.len()
            + self.playlists.len()
            + self.shows.len()
            + self.episodes.len()
    }
}
