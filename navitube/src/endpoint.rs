//! Endpoint descriptors for the TubeMusic API
//!
//! These are the values a caller hands to the API layer to say *what* to
//! fetch; continuation tokens say *where to resume* and are kept separate.

use serde::{Deserialize, Serialize};

/// Parameter value asking the watch endpoint for a radio expansion
pub const RADIO_PARAMS: &str = "wAEB";

/// Describes a watch-queue request (the `/next` endpoint)
///
/// At least one of `video_id` or `playlist_id` must be set for the request
/// to make sense; the server resolves a queue around the given seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchEndpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

impl WatchEndpoint {
    /// Watch queue seeded from a single song
    pub fn for_song(video_id: impl Into<String>) -> Self {
        Self {
            video_id: Some(video_id.into()),
            ..Default::default()
        }
    }

    /// Watch queue over a playlist's contents
    pub fn for_playlist(playlist_id: impl Into<String>) -> Self {
        Self {
            playlist_id: Some(playlist_id.into()),
            ..Default::default()
        }
    }

    /// Radio expansion of a playlist (album/playlist radio)
    pub fn radio(playlist_id: impl Into<String>) -> Self {
        Self {
            playlist_id: Some(playlist_id.into()),
            params: Some(RADIO_PARAMS.to_string()),
            ..Default::default()
        }
    }

    /// Sets the position within the queue the playback starts at
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }
}

/// Describes a catalog page request (the `/browse` endpoint)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowseEndpoint {
    pub browse_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
}

impl BrowseEndpoint {
    pub fn new(browse_id: impl Into<String>) -> Self {
        Self {
            browse_id: browse_id.into(),
            params: None,
        }
    }

    pub fn with_params(browse_id: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            browse_id: browse_id.into(),
            params: Some(params.into()),
        }
    }
}

/// Search result category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchFilter {
    Songs,
    Videos,
    Albums,
    Artists,
    CommunityPlaylists,
    FeaturedPlaylists,
}

impl SearchFilter {
    /// All filters, in the order the search UI presents them
    pub const ALL: [SearchFilter; 6] = [
        SearchFilter::Songs,
        SearchFilter::Videos,
        SearchFilter::Albums,
        SearchFilter::Artists,
        SearchFilter::CommunityPlaylists,
        SearchFilter::FeaturedPlaylists,
    ];

    /// The wire value of the filter
    pub fn param(&self) -> &'static str {
        match self {
            SearchFilter::Songs => "songs",
            SearchFilter::Videos => "videos",
            SearchFilter::Albums => "albums",
            SearchFilter::Artists => "artists",
            SearchFilter::CommunityPlaylists => "community_playlists",
            SearchFilter::FeaturedPlaylists => "featured_playlists",
        }
    }
}
