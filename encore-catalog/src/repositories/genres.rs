//! Genres.

use encore_core::Genre;

use crate::spotify::genres::supported_genres;

/// Genre listing. Needs no network.
pub trait GenresRepository: Send + Sync {
    /// Every genre tracks can be fetched for.
    fn fetch_available_genres(&self) -> Vec<Genre>;
}

/// [`GenresRepository`] listing the catalog's supported seed genres.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogGenresRepository;

impl GenresRepository for CatalogGenresRepository {
    fn fetch_available_genres(&self) -> Vec<Genre> {
        supported_genres()
    }
}
