//! # navitube - TubeMusic client for NaviMusic
//!
//! This crate provides a Rust client for the TubeMusic streaming API, with
//! an in-memory cache and integration with the other NaviMusic modules.
//!
//! ## Overview
//!
//! `navitube` gives access to the TubeMusic catalog:
//! - Watch queues and radios (`/next`), with continuation-based paging
//! - Catalog navigation (albums, artists, playlists, browse shelves)
//! - Filtered and unfiltered search with continuation-based paging
//! - In-memory TTL cache to minimize API requests
//! - Hide-explicit content filtering driven by configuration
//!
//! Every paginated endpoint returns an **opaque continuation token**: the
//! caller stores it and passes it back verbatim to fetch the following
//! page; a missing token means the listing is exhausted. Nothing in this
//! crate interprets the token's contents.
//!
//! ## Module structure
//!
//! ```text
//! navitube/
//! ├── src/
//! │   ├── lib.rs              # Main module (this file)
//! │   ├── client.rs           # High-level client with cache
//! │   ├── models.rs           # Catalog item types
//! │   ├── endpoint.rs         # Endpoint descriptors (watch/browse/search)
//! │   ├── pages.rs            # Page types with continuation tokens
//! │   ├── api/
//! │   │   ├── mod.rs          # REST layer (JSON POST + error handling)
//! │   │   ├── next.rs         # Watch queue / radio paging
//! │   │   ├── browse.rs       # Catalog pages
//! │   │   └── search.rs       # Search
//! │   ├── cache.rs            # In-memory TTL cache
//! │   ├── config_ext.rs       # naviconfig extension trait
//! │   └── error.rs            # Error handling
//! ```
//!
//! ## Usage
//!
//! ### Basic usage with automatic configuration
//!
//! ```rust,no_run
//! use navitube::{SearchFilter, TubeClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Uses the configuration from naviconfig
//!     let client = TubeClient::from_config()?;
//!
//!     // Search for songs
//!     let page = client.search("still life", SearchFilter::Songs).await?;
//!     for item in &page.items {
//!         println!("{}", item.title());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Paging a radio
//!
//! ```rust,no_run
//! use navitube::{TubeClient, WatchEndpoint};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = TubeClient::from_config()?;
//!
//!     let endpoint = WatchEndpoint::for_song("v123");
//!     let mut page = client.next(&endpoint, None).await?;
//!     while let Some(token) = page.continuation.take() {
//!         page = client.next(&endpoint, Some(&token)).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod client;
pub mod config_ext;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod pages;

pub use api::TubeApi;
pub use cache::TubeCache;
pub use client::TubeClient;
pub use config_ext::TubeConfigExt;
pub use endpoint::{BrowseEndpoint, SearchFilter, WatchEndpoint, RADIO_PARAMS};
pub use error::{Result, TubeError};
pub use models::{
    AlbumItem, AlbumRef, Artist, ArtistItem, FilterExplicit, PlaylistItem, SongItem, TubeItem,
};
pub use pages::{
    AlbumPage, ArtistPage, ArtistSection, BrowsePage, ItemsPage, NextPage,
    PlaylistContinuationPage, PlaylistPage, SearchSummaryPage, SearchSummarySection,
};
