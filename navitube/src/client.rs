//! High-level TubeMusic client
//!
//! This module provides a client combining the REST layer with the
//! in-memory cache and the hide-explicit content setting.

use crate::api::TubeApi;
use crate::cache::TubeCache;
use crate::config_ext::TubeConfigExt;
use crate::endpoint::{BrowseEndpoint, SearchFilter, WatchEndpoint};
use crate::error::{Result, TubeError};
use crate::models::{AlbumItem, FilterExplicit};
use crate::pages::{
    AlbumPage, ArtistPage, BrowsePage, ItemsPage, NextPage, PlaylistContinuationPage,
    PlaylistPage, SearchSummaryPage,
};
use naviconfig::Config;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// High-level TubeMusic client with cache
pub struct TubeClient {
    /// Low-level API
    api: TubeApi,
    /// In-memory cache
    cache: Arc<TubeCache>,
    /// Drop explicit-marked items from search/browse results
    hide_explicit: bool,
}

impl TubeClient {
    /// Creates a client against the production endpoint with defaults
    pub fn new() -> Result<Self> {
        Ok(Self {
            api: TubeApi::new()?,
            cache: Arc::new(TubeCache::new()),
            hide_explicit: false,
        })
    }

    /// Creates a client against a specific base URL
    ///
    /// Mostly useful for tests pointing at a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            api: TubeApi::with_base_url(base_url)?,
            cache: Arc::new(TubeCache::new()),
            hide_explicit: false,
        })
    }

    /// Creates a client from the global naviconfig configuration
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use navitube::TubeClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let client = TubeClient::from_config()?;
    ///     let albums = client.new_release_albums().await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn from_config() -> Result<Self> {
        let config = naviconfig::get_config();
        Self::from_config_obj(config.as_ref())
    }

    /// Creates a client from a specific Config object
    pub fn from_config_obj(config: &Config) -> Result<Self> {
        info!("Creating TubeMusic client from configuration");

        let mut api = TubeApi::with_options(
            config.get_tube_base_url(),
            Duration::from_secs(config.get_tube_timeout_secs() as u64),
        )?;
        api.set_locale(config.get_tube_language(), config.get_tube_region());
        api.set_visitor_id(config.get_tube_visitor_id()?);
        api.set_cookie(config.get_tube_cookie()?);

        Ok(Self {
            api,
            cache: Arc::new(TubeCache::new()),
            hide_explicit: config.get_tube_hide_explicit(),
        })
    }

    /// Returns whether explicit results are being dropped
    pub fn hide_explicit(&self) -> bool {
        self.hide_explicit
    }

    /// Sets whether explicit results are dropped from search/browse
    pub fn set_hide_explicit(&mut self, hide_explicit: bool) {
        self.hide_explicit = hide_explicit;
    }

    /// Returns a reference to the cache
    pub fn cache(&self) -> Arc<TubeCache> {
        self.cache.clone()
    }

    // ============ Albums ============

    /// Fetches an album page, serving repeated lookups from the cache
    pub async fn album(&self, album_id: &str) -> Result<AlbumPage> {
        if let Some(page) = self.cache.get_album(album_id).await {
            debug!("Album {} found in cache", album_id);
            return Ok(page);
        }

        let page = self.api.album(album_id).await?;
        self.cache
            .put_album(album_id.to_string(), page.clone())
            .await;

        Ok(page)
    }

    /// Resolves the identifier of the playlist mirroring an album
    ///
    /// This is the lookup radio queues use to expand a locally known album
    /// into a remote radio.
    pub async fn resolve_album_playlist(&self, album_id: &str) -> Result<String> {
        let page = self.album(album_id).await?;
        page.album.playlist_id.clone().ok_or_else(|| {
            TubeError::Parse(format!("Album {album_id} page carries no playlist id"))
        })
    }

    // ============ Artists ============

    /// Fetches an artist page, serving repeated lookups from the cache
    pub async fn artist(&self, artist_id: &str) -> Result<ArtistPage> {
        if let Some(page) = self.cache.get_artist(artist_id).await {
            debug!("Artist {} found in cache", artist_id);
            return Ok(page);
        }

        let page = self.api.artist(artist_id).await?;
        self.cache
            .put_artist(artist_id.to_string(), page.clone())
            .await;

        Ok(page)
    }

    // ============ Playlists ============

    /// Fetches the first page of a playlist
    pub async fn playlist(&self, playlist_id: &str) -> Result<PlaylistPage> {
        if let Some(page) = self.cache.get_playlist(playlist_id).await {
            debug!("Playlist {} found in cache", playlist_id);
            return Ok(page);
        }

        let page = self.api.playlist(playlist_id).await?;
        self.cache
            .put_playlist(playlist_id.to_string(), page.clone())
            .await;

        Ok(page)
    }

    /// Fetches a follow-up page of a playlist's track list
    ///
    /// Continuation pages are position-dependent and therefore never cached.
    pub async fn playlist_continuation(
        &self,
        continuation: &str,
    ) -> Result<PlaylistContinuationPage> {
        self.api.playlist_continuation(continuation).await
    }

    // ============ Watch queue ============

    /// Fetches one page of a watch queue or radio
    ///
    /// Never cached: each page advances the server-side queue position.
    pub async fn next(
        &self,
        endpoint: &WatchEndpoint,
        continuation: Option<&str>,
    ) -> Result<NextPage> {
        self.api.next(endpoint, continuation).await
    }

    // ============ Browse ============

    /// Fetches a catalog browse page
    pub async fn browse(&self, endpoint: &BrowseEndpoint) -> Result<BrowsePage> {
        let mut page = self.api.browse(endpoint).await?;
        page.items = page.items.filter_explicit(self.hide_explicit);
        Ok(page)
    }

    /// Fetches the next page of a browse listing
    pub async fn browse_continuation(&self, continuation: &str) -> Result<BrowsePage> {
        let mut page = self.api.browse_continuation(continuation).await?;
        page.items = page.items.filter_explicit(self.hide_explicit);
        Ok(page)
    }

    /// Fetches the new-release albums shelf
    pub async fn new_release_albums(&self) -> Result<Vec<AlbumItem>> {
        let albums = self.api.new_release_albums().await?;
        Ok(albums.filter_explicit(self.hide_explicit))
    }

    // ============ Search ============

    /// Searches the catalog within one result category
    ///
    /// First pages are cached per `(query, filter)`; continuations are not.
    pub async fn search(&self, query: &str, filter: SearchFilter) -> Result<ItemsPage> {
        let cache_key = format!("{}:{}", query, filter.param());

        if let Some(page) = self.cache.get_search(&cache_key).await {
            debug!("Search results for '{}' found in cache", query);
            return Ok(page);
        }

        let mut page = self.api.search(query, filter).await?;
        page.items = page.items.filter_explicit(self.hide_explicit);

        self.cache.put_search(cache_key, page.clone()).await;

        Ok(page)
    }

    /// Fetches the next page of a filtered search
    pub async fn search_continuation(&self, continuation: &str) -> Result<ItemsPage> {
        let mut page = self.api.search_continuation(continuation).await?;
        page.items = page.items.filter_explicit(self.hide_explicit);
        Ok(page)
    }

    /// Searches the catalog without a filter (overview sections)
    pub async fn search_summary(&self, query: &str) -> Result<SearchSummaryPage> {
        let mut page = self.api.search_summary(query).await?;
        for summary in &mut page.summaries {
            summary.items = std::mem::take(&mut summary.items).filter_explicit(self.hide_explicit);
        }
        Ok(page)
    }
}
