//! Domain models for Encore.
//!
//! These are the types view-state holders see. They are independent of the
//! wire format: the Spotify DTOs in `encore-catalog` are mapped into them.
//!
//! ## Submodules
//!
//! - [`search`] - The six search-result kinds and `SearchResults`
//! - [`podcast`] - Podcast shows and episodes
//! - [`browse`] - Featured playlists, categories, genres, home feed carousels
//! - [`image`] - Image variant selection

pub mod browse;
pub mod image;
pub mod podcast;
pub mod search;

// Re-export everything at the models level
pub use browse::{
    FeaturedPlaylists, Genre, GenreType, HomeFeedCarousel, HomeFeedCarouselCardInfo,
    PlaylistsForCategory,
};
pub use image::{ImageSize, ImageVariant};
pub use podcast::{PodcastEpisode, PodcastShow, PodcastShowInfo};
pub use search::{
    AlbumSearchResult, ArtistSearchResult, EpisodeSearchResult, PlaylistSearchResult,
    PodcastSearchResult, SearchResult, SearchResults, TrackSearchResult,
};
