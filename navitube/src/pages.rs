//! Page types returned by the TubeMusic API
//!
//! Every paginated response carries an opaque continuation token; `None`
//! means the listing is exhausted. The token's contents are never
//! interpreted on this side, only passed back verbatim.

use crate::endpoint::BrowseEndpoint;
use crate::models::{AlbumItem, ArtistItem, PlaylistItem, SongItem, TubeItem};
use serde::{Deserialize, Serialize};

/// One page of a mixed item listing (search results, filtered browse)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsPage {
    pub items: Vec<TubeItem>,
    pub continuation: Option<String>,
}

/// One page of a watch queue or radio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextPage {
    /// Queue title, when the server names it (e.g. playlist name)
    pub title: Option<String>,
    pub items: Vec<SongItem>,
    /// Index of the seed song within `items`, on the first page
    pub current_index: Option<usize>,
    pub continuation: Option<String>,
}

/// A full album page, track list included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumPage {
    /// Album header; `playlist_id` is always populated here
    pub album: AlbumItem,
    pub songs: Vec<SongItem>,
    pub description: Option<String>,
}

/// A titled shelf of an artist page, with an optional "more" target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSection {
    pub title: String,
    pub items: Vec<TubeItem>,
    pub more: Option<BrowseEndpoint>,
}

/// A full artist page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistPage {
    pub artist: ArtistItem,
    pub sections: Vec<ArtistSection>,
}

/// The first page of a playlist, with a continuation for the rest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPage {
    pub playlist: PlaylistItem,
    pub songs: Vec<SongItem>,
    pub continuation: Option<String>,
}

/// A follow-up page of a playlist's track list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistContinuationPage {
    pub songs: Vec<SongItem>,
    pub continuation: Option<String>,
}

/// A catalog browse page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowsePage {
    pub title: Option<String>,
    pub items: Vec<TubeItem>,
    pub continuation: Option<String>,
}

/// One titled section of the unfiltered search overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSummarySection {
    pub title: String,
    pub items: Vec<TubeItem>,
}

/// The unfiltered search overview: a few best matches per category
///
/// Overview sections are not paginated; switching to a concrete
/// [`crate::endpoint::SearchFilter`] yields pageable [`ItemsPage`]s instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSummaryPage {
    pub summaries: Vec<SearchSummarySection>,
}
