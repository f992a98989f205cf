//! Concrete queue strategies
//!
//! Each strategy answers "get the initial page" and "fetch the next page"
//! for one way of starting playback; they differ only in which remote
//! endpoint seeds the queue and how the first remote page is merged with
//! what is already known locally.

mod album_radio;
mod list;
mod playlist_radio;
mod song_radio;

pub use album_radio::{AlbumWithTracks, LocalAlbumRadio};
pub use list::ListQueue;
pub use playlist_radio::{LocalPlaylistRadio, PlaylistWithTracks};
pub use song_radio::SongRadio;
