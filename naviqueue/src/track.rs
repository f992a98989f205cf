//! QueueTrack: the playable descriptor a queue hands to the player

use navitube::{AlbumRef, Artist, SongItem, WatchEndpoint};

/// A playable track
///
/// Immutable once created; identity is the `id`, which doubles as the
/// stream locator the player resolves at playback time. Tracks come either
/// from the local library (built with [`QueueTrack::new`]) or from a remote
/// page (converted from [`SongItem`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueTrack {
    id: String,
    title: String,
    artists: Vec<Artist>,
    album: Option<AlbumRef>,
    duration: Option<u32>,
    thumbnail: Option<String>,
    explicit: bool,
}

impl QueueTrack {
    /// Creates a minimal track from an id and a title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artists: Vec::new(),
            album: None,
            duration: None,
            thumbnail: None,
            explicit: false,
        }
    }

    /// Sets the artist credits
    pub fn with_artists(mut self, artists: Vec<Artist>) -> Self {
        self.artists = artists;
        self
    }

    /// Sets the album reference
    pub fn with_album(mut self, album: AlbumRef) -> Self {
        self.album = Some(album);
        self
    }

    /// Sets the duration in seconds
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Returns the track identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the track title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the artist credits
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Returns the album the track belongs to, if known
    pub fn album(&self) -> Option<&AlbumRef> {
        self.album.as_ref()
    }

    /// Returns the duration in seconds, if known
    pub fn duration(&self) -> Option<u32> {
        self.duration
    }

    /// Returns the cover thumbnail URL, if known
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    /// Whether the track carries an explicit-content marker
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// Watch endpoint that starts playback from this track
    pub fn watch_endpoint(&self) -> WatchEndpoint {
        WatchEndpoint::for_song(self.id.clone())
    }
}

impl From<SongItem> for QueueTrack {
    fn from(song: SongItem) -> Self {
        Self {
            id: song.id,
            title: song.title,
            artists: song.artists,
            album: song.album,
            duration: song.duration,
            thumbnail: song.thumbnail,
            explicit: song.explicit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_from_song_item_keeps_identity() {
        let song = SongItem {
            id: "s1".to_string(),
            title: "Some Song".to_string(),
            artists: vec![Artist {
                id: Some("ar1".to_string()),
                name: "Some Artist".to_string(),
            }],
            album: None,
            duration: Some(241),
            thumbnail: None,
            explicit: true,
        };

        let track = QueueTrack::from(song);
        assert_eq!(track.id(), "s1");
        assert_eq!(track.title(), "Some Song");
        assert_eq!(track.duration(), Some(241));
        assert!(track.is_explicit());
        assert_eq!(track.watch_endpoint().video_id.as_deref(), Some("s1"));
    }
}
