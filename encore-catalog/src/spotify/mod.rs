//! Spotify Web API backend.
//!
//! - [`api::SpotifyClient`] - [`CatalogService`](crate::CatalogService) over HTTP
//! - [`token::SpotifyTokenIssuer`] - Client-credentials token exchange
//! - [`dto`] - Response types
//! - [`mapper`] - Response to model mapping
//! - [`genres`] - Supported recommendation genres

pub mod api;
pub mod dto;
pub mod genres;
pub mod mapper;
pub mod token;

pub use api::{DEFAULT_API_BASE_URL, SpotifyClient};
pub use token::{DEFAULT_TOKEN_URL, SpotifyTokenIssuer};
