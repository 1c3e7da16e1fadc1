// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Encore Catalog
//!
//! The music and podcast catalog behind Encore.
//!
//! ## Layers
//!
//! - [`CatalogService`] - One method per remote endpoint, returning raw
//!   responses. [`spotify::SpotifyClient`] implements it over HTTP.
//! - [`paging`] - Resource-specific paging adapters built on
//!   [`encore_fetch::PagingSource`]
//! - [`repositories`] - One-shot fetches and paging source factories,
//!   grouped by resource
//!
//! ## Wiring
//!
//! ```ignore
//! use encore_catalog::{CatalogContext, repositories::CatalogAlbumsRepository};
//!
//! let ctx = CatalogContext::connect_spotify(settings)?;
//! let albums = CatalogAlbumsRepository::new(ctx.clone());
//! let album = albums.fetch_album("4aawyAB9vmqN3uQ7FjRGTy", "US").await?;
//! ```

pub mod context;
pub mod paging;
pub mod repositories;
pub mod service;
pub mod spotify;

pub use context::{CatalogContext, SpotifySettings};
pub use repositories::{
    AlbumsRepository, CatalogAlbumsRepository, CatalogGenresRepository, CatalogHomeFeedRepository,
    CatalogPodcastsRepository, CatalogSearchRepository, CatalogTracksRepository, FetchResult,
    GenresRepository, HomeFeedRepository, PodcastsRepository, SearchRepository, SearchSources,
    TracksRepository,
};
pub use service::{CatalogService, SearchKind, Window};
