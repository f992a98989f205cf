//! Playlist radio seeded from a locally known playlist
//!
//! Same local-seed shape as the album radio, except the remote playlist
//! identifier is already known, so no resolution call is needed.

use crate::error::Result;
use crate::source::RadioSource;
use crate::{Queue, QueueStatus, QueueTrack};
use async_trait::async_trait;
use navitube::WatchEndpoint;
use std::sync::Arc;

/// A locally known playlist: header plus its resident track list
#[derive(Debug, Clone)]
pub struct PlaylistWithTracks {
    /// Remote playlist identifier
    pub id: String,
    /// Playlist name, becomes the queue title
    pub title: String,
    /// The playlist's tracks, in playlist order
    pub tracks: Vec<QueueTrack>,
}

/// Radio queue over a locally known playlist
pub struct LocalPlaylistRadio<S: RadioSource> {
    source: Arc<S>,
    playlist: PlaylistWithTracks,
    start_index: usize,
    continuation: Option<String>,
    first_page_loaded: bool,
}

impl<S: RadioSource> LocalPlaylistRadio<S> {
    pub fn new(source: Arc<S>, playlist: PlaylistWithTracks) -> Self {
        Self::starting_at(source, playlist, 0)
    }

    /// Playlist radio starting playback at `start_index`
    pub fn starting_at(
        source: Arc<S>,
        playlist: PlaylistWithTracks,
        start_index: usize,
    ) -> Self {
        Self {
            source,
            playlist,
            start_index,
            continuation: None,
            first_page_loaded: false,
        }
    }

    fn endpoint(&self) -> WatchEndpoint {
        WatchEndpoint::radio(self.playlist.id.clone())
    }
}

#[async_trait]
impl<S: RadioSource> Queue for LocalPlaylistRadio<S> {
    async fn initial_status(&mut self) -> Result<QueueStatus> {
        Ok(QueueStatus {
            title: Some(self.playlist.title.clone()),
            tracks: self.playlist.tracks.clone(),
            start_index: self.start_index,
        })
    }

    fn has_next_page(&self) -> bool {
        !self.first_page_loaded || self.continuation.is_some()
    }

    async fn next_page(&mut self) -> Result<Vec<QueueTrack>> {
        if !self.first_page_loaded {
            let page = self.source.next_page(&self.endpoint(), None).await?;
            self.continuation = page.continuation;
            self.first_page_loaded = true;

            // The first radio page repeats the playlist's own tracks
            let known = self.playlist.tracks.len();
            return Ok(page
                .items
                .into_iter()
                .skip(known)
                .map(QueueTrack::from)
                .collect());
        }

        let page = self
            .source
            .next_page(&self.endpoint(), self.continuation.as_deref())
            .await?;
        self.continuation = page.continuation;

        Ok(page.items.into_iter().map(QueueTrack::from).collect())
    }
}
