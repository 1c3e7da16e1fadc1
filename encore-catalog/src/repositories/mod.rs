//! Repositories: the data layer the presentation side talks to.
//!
//! Each repository exposes one-shot fetches returning a
//! [`FetchedResource`](encore_core::FetchedResource) and factories for paging
//! sources. The `Catalog*` implementations hold only a
//! [`CatalogContext`](crate::CatalogContext).

pub mod albums;
pub mod genres;
pub mod home_feed;
pub mod podcasts;
pub mod search;
pub mod tracks;

pub use albums::{AlbumsRepository, CatalogAlbumsRepository};
pub use genres::{CatalogGenresRepository, GenresRepository};
pub use home_feed::{CatalogHomeFeedRepository, HomeFeedRepository};
pub use podcasts::{CatalogPodcastsRepository, PodcastsRepository};
pub use search::{CatalogSearchRepository, SearchRepository, SearchSources};
pub use tracks::{CatalogTracksRepository, TracksRepository};

use encore_core::FetchedResource;
use encore_fetch::FetchError;

/// Result of a one-shot repository fetch.
pub type FetchResult<T> = Result<FetchedResource<T>, FetchError>;
