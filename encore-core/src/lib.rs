// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Encore Core
//!
//! Core types, models, and result taxonomy for the Encore catalog client.
//!
//! This crate provides the foundational abstractions used across all other
//! Encore crates, including:
//!
//! - Domain models (tracks, albums, artists, playlists, podcasts, episodes)
//! - The closed [`ErrorKind`] taxonomy and the [`FetchedResource`] result
//! - Paging value types shared by the paging engine and its adapters
//! - The bearer credential and its failure type
//!
//! ## Key Types
//!
//! ### Results
//! - [`FetchedResource`] - Outcome of a one-shot fetch
//! - [`ErrorKind`] - Classified failure of a catalog request
//!
//! ### Paging
//! - [`PageKey`] - Offset/limit pair identifying a page
//! - [`Page`] - One loaded slice of a remote collection
//! - [`LoadResult`] - Outcome of a single page load
//! - [`PagingConfig`] - Page size, initial load size, prefetch distance
//!
//! ### Credentials
//! - [`BearerToken`] - Short-lived API credential
//! - [`CredentialError`] - Why a credential could not be obtained
//!
//! ### Catalog Models
//! - [`SearchResult`] and its six variants
//! - [`SearchResults`], [`PodcastShow`], [`PodcastEpisode`]
//! - [`FeaturedPlaylists`], [`PlaylistsForCategory`], [`Genre`]
//! - [`HomeFeedCarousel`], [`HomeFeedCarouselCardInfo`]

pub mod error;
pub mod models;
pub mod paging;
pub mod resource;
pub mod token;

// Re-export error types
pub use error::{CredentialError, ErrorKind};

// Re-export result and paging types
pub use paging::{LoadResult, Page, PageKey, PagingConfig};
pub use resource::FetchedResource;
pub use token::BearerToken;

// Re-export all model types
pub use models::{
    // Search results
    AlbumSearchResult,
    ArtistSearchResult,
    EpisodeSearchResult,
    PlaylistSearchResult,
    PodcastSearchResult,
    SearchResult,
    SearchResults,
    TrackSearchResult,
    // Podcasts
    PodcastEpisode,
    PodcastShow,
    PodcastShowInfo,
    // Browse
    FeaturedPlaylists,
    Genre,
    GenreType,
    HomeFeedCarousel,
    HomeFeedCarouselCardInfo,
    PlaylistsForCategory,
    // Images
    ImageSize,
    ImageVariant,
};
