//! Data structures for TubeMusic catalog objects

use serde::{Deserialize, Deserializer, Serialize};

/// Flexible deserializer for IDs that may be strings or integers
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::custom("ID must be a string or number")),
    }
}

/// An artist credit attached to a song, album or playlist
///
/// The id is optional: uploaded or anonymous content may carry a display
/// name without a navigable artist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// A lightweight reference to the album a song belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRef {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

/// A playable song
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongItem {
    /// Unique identifier, also the stream locator for the player
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Song title
    pub title: String,
    /// Artist credits, possibly empty
    #[serde(default)]
    pub artists: Vec<Artist>,
    /// Album the song belongs to, if any
    #[serde(default)]
    pub album: Option<AlbumRef>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<u32>,
    /// Cover thumbnail URL
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Explicit-content marker
    #[serde(default)]
    pub explicit: bool,
}

/// An album as returned by search/browse listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Identifier of the playlist mirroring the album's track list
    ///
    /// Listings usually omit it; the full album page always carries it.
    #[serde(default)]
    pub playlist_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub explicit: bool,
}

/// An artist as returned by search/browse listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// A playlist as returned by search/browse listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: Option<Artist>,
    #[serde(default)]
    pub song_count: Option<u32>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Any item that can appear in a mixed search/browse listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TubeItem {
    Song(SongItem),
    Album(AlbumItem),
    Artist(ArtistItem),
    Playlist(PlaylistItem),
}

impl TubeItem {
    /// Returns the item's unique identifier
    pub fn id(&self) -> &str {
        match self {
            TubeItem::Song(s) => &s.id,
            TubeItem::Album(a) => &a.id,
            TubeItem::Artist(a) => &a.id,
            TubeItem::Playlist(p) => &p.id,
        }
    }

    /// Returns the item's display title
    pub fn title(&self) -> &str {
        match self {
            TubeItem::Song(s) => &s.title,
            TubeItem::Album(a) => &a.title,
            TubeItem::Artist(a) => &a.title,
            TubeItem::Playlist(p) => &p.title,
        }
    }

    /// Whether the item carries an explicit-content marker
    ///
    /// Artists and playlists are never marked explicit themselves.
    pub fn is_explicit(&self) -> bool {
        match self {
            TubeItem::Song(s) => s.explicit,
            TubeItem::Album(a) => a.explicit,
            TubeItem::Artist(_) | TubeItem::Playlist(_) => false,
        }
    }
}

/// Extension trait applying the hide-explicit content setting to item lists
pub trait FilterExplicit {
    /// Drops explicit-marked entries when `hide_explicit` is set
    fn filter_explicit(self, hide_explicit: bool) -> Self;
}

impl FilterExplicit for Vec<TubeItem> {
    fn filter_explicit(mut self, hide_explicit: bool) -> Self {
        if hide_explicit {
            self.retain(|item| !item.is_explicit());
        }
        self
    }
}

impl FilterExplicit for Vec<SongItem> {
    fn filter_explicit(mut self, hide_explicit: bool) -> Self {
        if hide_explicit {
            self.retain(|song| !song.explicit);
        }
        self
    }
}

impl FilterExplicit for Vec<AlbumItem> {
    fn filter_explicit(mut self, hide_explicit: bool) -> Self {
        if hide_explicit {
            self.retain(|album| !album.explicit);
        }
        self
    }
}
