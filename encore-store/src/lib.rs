// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Encore Store
//!
//! Configuration and view state for Encore.
//!
//! This crate provides:
//!
//! - **Config**: API, market and paging settings persisted as JSON
//! - **HomeFeedStore**: the home feed carousels with watch-channel updates
//! - **SearchSession**: the active query and its paging sources
//! - **Persistence**: owner-only JSON file helpers
//!
//! ## Usage
//!
//! ```ignore
//! use encore_catalog::{CatalogContext, CatalogHomeFeedRepository};
//! use encore_store::{Config, HomeFeedStore};
//!
//! let config = Config::load().await?;
//! let ctx = CatalogContext::connect_spotify(config.spotify_settings()?)?;
//! let store = HomeFeedStore::new(
//!     Arc::new(CatalogHomeFeedRepository::new(ctx)),
//!     config.market.clone(),
//! );
//!
//! let mut rx = store.subscribe();
//! store.refresh().await;
//! while rx.changed().await.is_ok() {
//!     println!("{:?}", store.state().await);
//! }
//! ```

pub mod config;
pub mod error;
pub mod home_feed;
pub mod persistence;
pub mod search_session;

pub use config::{ApiConfig, Config, MarketConfig};
pub use error::StoreError;
pub use home_feed::{
    HomeFeedSnapshot, HomeFeedState, HomeFeedStore, SectionFailure, current_greeting,
    greeting_for_hour,
};
pub use persistence::{default_config_dir, default_config_path, ensure_dir, load_json, save_json};
pub use search_session::SearchSession;
