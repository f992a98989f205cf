//! Static queue over a pre-resolved track list

use crate::error::Result;
use crate::{Queue, QueueStatus, QueueTrack};
use async_trait::async_trait;

/// A queue whose contents are fully known at creation
///
/// Used when playback starts over tracks the caller already holds (a local
/// album played as-is, a selection). Never pages.
pub struct ListQueue {
    title: Option<String>,
    tracks: Vec<QueueTrack>,
    start_index: usize,
}

impl ListQueue {
    pub fn new(title: Option<String>, tracks: Vec<QueueTrack>) -> Self {
        Self {
            title,
            tracks,
            start_index: 0,
        }
    }

    /// Sets the track playback starts at
    pub fn starting_at(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }
}

#[async_trait]
impl Queue for ListQueue {
    async fn initial_status(&mut self) -> Result<QueueStatus> {
        Ok(QueueStatus {
            title: self.title.clone(),
            tracks: self.tracks.clone(),
            start_index: self.start_index,
        })
    }

    fn has_next_page(&self) -> bool {
        false
    }

    async fn next_page(&mut self) -> Result<Vec<QueueTrack>> {
        Ok(Vec::new())
    }
}
