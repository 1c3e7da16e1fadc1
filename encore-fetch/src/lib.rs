// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Encore Fetch
//!
//! The data-access core of the Encore catalog client.
//!
//! ## Host APIs
//!
//! - [`host::http`] - HTTP client with tracing and domain allowlist
//!
//! ## Credentials
//!
//! - [`credential::CredentialProvider`] - Supplies a valid bearer token
//! - [`credential::CachedTokenProvider`] - Caches a token and refreshes it
//!   single-flight through a [`credential::TokenIssuer`]
//!
//! ## Results
//!
//! - [`classify::classify`] - Reduces a [`RemoteError`] to an
//!   [`ErrorKind`](encore_core::ErrorKind)
//! - [`runner::run_with_token`] - One-shot fetch returning a
//!   [`FetchedResource`](encore_core::FetchedResource)
//! - [`runner::load_page_with_token`] - The same boundary at page granularity
//!
//! ## Paging
//!
//! - [`paging::PagingSource`] - Forward-only keyed paging engine
//!
//! ## Example
//!
//! ```ignore
//! use encore_fetch::{run_with_token, CachedTokenProvider};
//!
//! let tokens = CachedTokenProvider::new(issuer);
//! let album = run_with_token(&tokens, |token| async move {
//!     service.album(&token, "4aawyAB9vmqN3uQ7FjRGTy", "US").await
//! })
//! .await?;
//! ```

pub mod classify;
pub mod credential;
pub mod error;
pub mod host;
pub mod paging;
pub mod runner;

// Errors
pub use classify::classify;
pub use error::{FetchError, RemoteError};

// Host APIs
pub use host::http::{HttpClient, ResponseExt};

// Credentials
pub use credential::{CachedTokenProvider, ClientCredentials, CredentialProvider, TokenIssuer};

// Results & paging
pub use paging::{LoadState, LoadStep, PagingSource};
pub use runner::{load_page_with_token, run_with_token};
