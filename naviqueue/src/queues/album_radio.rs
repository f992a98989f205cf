//! Album radio seeded from a locally known album
//!
//! The album's own tracks are available immediately; the radio expansion
//! behind them is paged in from the remote source on demand.

use crate::error::Result;
use crate::source::RadioSource;
use crate::{Queue, QueueStatus, QueueTrack};
use async_trait::async_trait;
use navitube::WatchEndpoint;
use std::sync::Arc;
use tracing::debug;

/// A locally known album: header plus its resident track list
#[derive(Debug, Clone)]
pub struct AlbumWithTracks {
    /// Remote album identifier (used to resolve the radio playlist)
    pub id: String,
    /// Album title, becomes the queue title
    pub title: String,
    /// The album's tracks, in album order
    pub tracks: Vec<QueueTrack>,
}

/// Paging state of a local-seed radio
///
/// Seeding turns into Paging on the first successful `next_page`; after
/// that the stored continuation alone drives further pages.
enum RadioState {
    /// Local tracks known, remote playlist not yet resolved
    Seeding,
    /// Remote continuation drives further pages
    Paging {
        playlist_id: String,
        continuation: Option<String>,
    },
}

/// Radio queue over a locally known album
///
/// `initial_status` serves the album's own tracks without touching the
/// network. The first `next_page` resolves the album's remote playlist,
/// fetches the first radio page, and returns only the expansion past the
/// tracks the caller already has; later calls are plain continuation
/// fetches.
pub struct LocalAlbumRadio<S: RadioSource> {
    source: Arc<S>,
    album: AlbumWithTracks,
    start_index: usize,
    state: RadioState,
}

impl<S: RadioSource> LocalAlbumRadio<S> {
    pub fn new(source: Arc<S>, album: AlbumWithTracks) -> Self {
        Self::starting_at(source, album, 0)
    }

    /// Album radio starting playback at `start_index`
    pub fn starting_at(source: Arc<S>, album: AlbumWithTracks, start_index: usize) -> Self {
        Self {
            source,
            album,
            start_index,
            state: RadioState::Seeding,
        }
    }
}

#[async_trait]
impl<S: RadioSource> Queue for LocalAlbumRadio<S> {
    async fn initial_status(&mut self) -> Result<QueueStatus> {
        Ok(QueueStatus {
            title: Some(self.album.title.clone()),
            tracks: self.album.tracks.clone(),
            start_index: self.start_index,
        })
    }

    fn has_next_page(&self) -> bool {
        match &self.state {
            RadioState::Seeding => true,
            RadioState::Paging { continuation, .. } => continuation.is_some(),
        }
    }

    async fn next_page(&mut self) -> Result<Vec<QueueTrack>> {
        let (playlist_id, continuation) = match &self.state {
            RadioState::Seeding => {
                let playlist_id = self.source.resolve_album_playlist(&self.album.id).await?;
                let page = self
                    .source
                    .next_page(&WatchEndpoint::radio(playlist_id.clone()), None)
                    .await?;

                // Nothing was committed until here: a failed resolution or
                // fetch leaves the queue in Seeding and the same call can
                // simply be retried.
                self.state = RadioState::Paging {
                    playlist_id,
                    continuation: page.continuation,
                };

                // The first radio page repeats the album's own tracks; only
                // the expansion past them is new to the caller.
                let known = self.album.tracks.len();
                if page.items.len() < known {
                    debug!(
                        got = page.items.len(),
                        known, "Radio first page shorter than the local track list"
                    );
                }
                return Ok(page
                    .items
                    .into_iter()
                    .skip(known)
                    .map(QueueTrack::from)
                    .collect());
            }
            RadioState::Paging {
                playlist_id,
                continuation,
            } => (playlist_id.clone(), continuation.clone()),
        };

        let page = self
            .source
            .next_page(
                &WatchEndpoint::radio(playlist_id.clone()),
                continuation.as_deref(),
            )
            .await?;
        self.state = RadioState::Paging {
            playlist_id,
            continuation: page.continuation,
        };

        Ok(page.items.into_iter().map(QueueTrack::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::ScriptedRadio;
    use navitube::RADIO_PARAMS;

    fn album() -> AlbumWithTracks {
        AlbumWithTracks {
            id: "al1".to_string(),
            title: "First Album".to_string(),
            tracks: vec![
                QueueTrack::new("s1", "One"),
                QueueTrack::new("s2", "Two"),
                QueueTrack::new("s3", "Three"),
            ],
        }
    }

    #[tokio::test]
    async fn initial_status_serves_the_local_tracks() {
        let source = Arc::new(ScriptedRadio::new("PL-al1", vec![]));
        let mut radio = LocalAlbumRadio::starting_at(source.clone(), album(), 2);

        let status = radio.initial_status().await.unwrap();
        assert_eq!(status.title.as_deref(), Some("First Album"));
        assert_eq!(status.tracks.len(), 3);
        assert_eq!(status.start_index, 2);

        // No network traffic yet
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn first_page_returns_only_the_expansion_past_the_local_tracks() {
        let source = Arc::new(ScriptedRadio::new(
            "PL-al1",
            vec![Ok(ScriptedRadio::page(
                "First Album Radio",
                &["s1", "s2", "s3", "s4", "s5"],
                Some("c1"),
            ))],
        ));
        let mut radio = LocalAlbumRadio::new(source.clone(), album());

        assert!(radio.has_next_page());
        let batch = radio.next_page().await.unwrap();

        let ids: Vec<&str> = batch.iter().map(|t| t.id()).collect();
        assert_eq!(ids, ["s4", "s5"]);

        // The resolved playlist was queried as a radio, without continuation
        let requests = source.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0.playlist_id.as_deref(), Some("PL-al1"));
        assert_eq!(requests[0].0.params.as_deref(), Some(RADIO_PARAMS));
        assert_eq!(requests[0].1, None);

        // The response's continuation was stored
        assert!(radio.has_next_page());
    }

    #[tokio::test]
    async fn later_pages_ride_the_stored_continuation() {
        let source = Arc::new(ScriptedRadio::new(
            "PL-al1",
            vec![
                Ok(ScriptedRadio::page(
                    "First Album Radio",
                    &["s1", "s2", "s3", "s4"],
                    Some("c1"),
                )),
                Ok(ScriptedRadio::page("First Album Radio", &["s5", "s6"], None)),
            ],
        ));
        let mut radio = LocalAlbumRadio::new(source.clone(), album());

        radio.next_page().await.unwrap();
        let batch = radio.next_page().await.unwrap();

        // Paging-state pages come back whole, no dedup applied
        assert_eq!(batch.len(), 2);

        let requests = source.requests();
        assert_eq!(requests[1].1.as_deref(), Some("c1"));

        // Null continuation means exhausted
        assert!(!radio.has_next_page());
    }

    #[tokio::test]
    async fn failed_seeding_fetch_leaves_the_queue_retryable() {
        let source = Arc::new(
            ScriptedRadio::new(
                "PL-al1",
                vec![Ok(ScriptedRadio::page(
                    "First Album Radio",
                    &["s1", "s2", "s3", "s4"],
                    Some("c1"),
                ))],
            )
            .with_resolve_failures(1),
        );
        let mut radio = LocalAlbumRadio::new(source.clone(), album());

        // First attempt dies resolving the playlist
        assert!(radio.next_page().await.is_err());
        assert!(radio.has_next_page());
        assert!(source.requests().is_empty());

        // The retry replays the whole seeding transition
        let batch = radio.next_page().await.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].id(), "s4");
        assert_eq!(source.requests()[0].1, None);
    }

    #[tokio::test]
    async fn failed_paging_fetch_keeps_the_continuation() {
        let source = Arc::new(ScriptedRadio::new(
            "PL-al1",
            vec![
                Ok(ScriptedRadio::page(
                    "First Album Radio",
                    &["s1", "s2", "s3"],
                    Some("c1"),
                )),
                Err(crate::QueueError::other("transient network failure")),
                Ok(ScriptedRadio::page("First Album Radio", &["s4"], None)),
            ],
        ));
        let mut radio = LocalAlbumRadio::new(source.clone(), album());

        radio.next_page().await.unwrap();
        assert!(radio.next_page().await.is_err());

        // Token untouched by the failure: the retry sends "c1" again
        assert!(radio.has_next_page());
        let batch = radio.next_page().await.unwrap();
        assert_eq!(batch[0].id(), "s4");

        let requests = source.requests();
        assert_eq!(requests[1].1.as_deref(), Some("c1"));
        assert_eq!(requests[2].1.as_deref(), Some("c1"));
    }

    #[tokio::test]
    async fn shorter_remote_page_yields_an_empty_batch() {
        let source = Arc::new(ScriptedRadio::new(
            "PL-al1",
            vec![Ok(ScriptedRadio::page("First Album Radio", &["s1"], None))],
        ));
        let mut radio = LocalAlbumRadio::new(source.clone(), album());

        let batch = radio.next_page().await.unwrap();
        assert!(batch.is_empty());
        assert!(!radio.has_next_page());
    }
}
