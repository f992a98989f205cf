//! In-memory cache for TubeMusic data
//!
//! TTL-bounded caches to keep repeated catalog lookups off the network.
//! Watch-queue pages and continuations are never cached: their contents
//! depend on the paging position, not just on a key.

use crate::pages::{AlbumPage, ArtistPage, ItemsPage, PlaylistPage};
use moka::future::Cache as MokaCache;
use std::sync::Arc;
use std::time::Duration;

/// Main cache for TubeMusic catalog data
#[derive(Clone)]
pub struct TubeCache {
    /// Album pages (TTL: 1 hour)
    albums: Arc<MokaCache<String, AlbumPage>>,
    /// Artist pages (TTL: 1 hour)
    artists: Arc<MokaCache<String, ArtistPage>>,
    /// Playlist first pages (TTL: 30 minutes)
    playlists: Arc<MokaCache<String, PlaylistPage>>,
    /// Filtered search first pages (TTL: 15 minutes)
    searches: Arc<MokaCache<String, ItemsPage>>,
}

impl TubeCache {
    /// Creates a new cache with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    /// Creates a new cache with a specific capacity
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            albums: Arc::new(
                MokaCache::builder()
                    .max_capacity(max_capacity)
                    .time_to_live(Duration::from_secs(3600))
                    .build(),
            ),
            artists: Arc::new(
                MokaCache::builder()
                    .max_capacity(max_capacity / 2)
                    .time_to_live(Duration::from_secs(3600))
                    .build(),
            ),
            playlists: Arc::new(
                MokaCache::builder()
                    .max_capacity(max_capacity / 4)
                    .time_to_live(Duration::from_secs(1800))
                    .build(),
            ),
            searches: Arc::new(
                MokaCache::builder()
                    .max_capacity(max_capacity / 2)
                    .time_to_live(Duration::from_secs(900))
                    .build(),
            ),
        }
    }

    // ============ Albums ============

    /// Gets an album page from the cache
    pub async fn get_album(&self, id: &str) -> Option<AlbumPage> {
        self.albums.get(id).await
    }

    /// Puts an album page into the cache
    pub async fn put_album(&self, id: String, page: AlbumPage) {
        self.albums.insert(id, page).await;
    }

    /// Invalidates a cached album page
    pub async fn invalidate_album(&self, id: &str) {
        self.albums.invalidate(id).await;
    }

    // ============ Artists ============

    /// Gets an artist page from the cache
    pub async fn get_artist(&self, id: &str) -> Option<ArtistPage> {
        self.artists.get(id).await
    }

    /// Puts an artist page into the cache
    pub async fn put_artist(&self, id: String, page: ArtistPage) {
        self.artists.insert(id, page).await;
    }

    /// Invalidates a cached artist page
    pub async fn invalidate_artist(&self, id: &str) {
        self.artists.invalidate(id).await;
    }

    // ============ Playlists ============

    /// Gets a playlist page from the cache
    pub async fn get_playlist(&self, id: &str) -> Option<PlaylistPage> {
        self.playlists.get(id).await
    }

    /// Puts a playlist page into the cache
    pub async fn put_playlist(&self, id: String, page: PlaylistPage) {
        self.playlists.insert(id, page).await;
    }

    /// Invalidates a cached playlist page
    pub async fn invalidate_playlist(&self, id: &str) {
        self.playlists.invalidate(id).await;
    }

    // ============ Searches ============

    /// Gets a search first page from the cache
    pub async fn get_search(&self, key: &str) -> Option<ItemsPage> {
        self.searches.get(key).await
    }

    /// Puts a search first page into the cache
    pub async fn put_search(&self, key: String, page: ItemsPage) {
        self.searches.insert(key, page).await;
    }

    /// Clears all cached entries
    pub fn clear(&self) {
        self.albums.invalidate_all();
        self.artists.invalidate_all();
        self.playlists.invalidate_all();
        self.searches.invalidate_all();
    }
}

impl Default for TubeCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AlbumItem;

    fn album_page(id: &str) -> AlbumPage {
        AlbumPage {
            album: AlbumItem {
                id: id.to_string(),
                playlist_id: Some(format!("PL-{id}")),
                title: "Cached Album".to_string(),
                artists: vec![],
                year: Some(2021),
                thumbnail: None,
                explicit: false,
            },
            songs: vec![],
            description: None,
        }
    }

    #[tokio::test]
    async fn album_roundtrip_and_invalidation() {
        let cache = TubeCache::new();
        assert!(cache.get_album("al1").await.is_none());

        cache.put_album("al1".to_string(), album_page("al1")).await;
        let cached = cache.get_album("al1").await.unwrap();
        assert_eq!(cached.album.playlist_id.as_deref(), Some("PL-al1"));

        cache.invalidate_album("al1").await;
        assert!(cache.get_album("al1").await.is_none());
    }
}
