//! Radio queue seeded from a watch endpoint

use crate::error::Result;
use crate::source::RadioSource;
use crate::{Queue, QueueStatus, QueueTrack};
use async_trait::async_trait;
use navitube::WatchEndpoint;
use std::sync::Arc;

/// An endless queue expanded from a single seed (song, playlist position)
///
/// The usual entry point when the user taps a song in search results: the
/// song plays immediately (as the preload track) while the first remote
/// page resolves the queue around it.
pub struct SongRadio<S: RadioSource> {
    source: Arc<S>,
    endpoint: WatchEndpoint,
    preload: Option<QueueTrack>,
    continuation: Option<String>,
    first_page_loaded: bool,
}

impl<S: RadioSource> SongRadio<S> {
    /// Radio seeded from a track the caller already holds
    pub fn from_track(source: Arc<S>, track: QueueTrack) -> Self {
        let endpoint = track.watch_endpoint();
        Self {
            source,
            endpoint,
            preload: Some(track),
            continuation: None,
            first_page_loaded: false,
        }
    }

    /// Radio over an arbitrary watch endpoint
    pub fn from_endpoint(source: Arc<S>, endpoint: WatchEndpoint) -> Self {
        Self {
            source,
            endpoint,
            preload: None,
            continuation: None,
            first_page_loaded: false,
        }
    }
}

#[async_trait]
impl<S: RadioSource> Queue for SongRadio<S> {
    fn preload_track(&self) -> Option<QueueTrack> {
        self.preload.clone()
    }

    async fn initial_status(&mut self) -> Result<QueueStatus> {
        let page = self.source.next_page(&self.endpoint, None).await?;
        self.continuation = page.continuation;
        self.first_page_loaded = true;

        Ok(QueueStatus {
            title: page.title,
            tracks: page.items.into_iter().map(QueueTrack::from).collect(),
            start_index: page.current_index.unwrap_or(0),
        })
    }

    fn has_next_page(&self) -> bool {
        !self.first_page_loaded || self.continuation.is_some()
    }

    async fn next_page(&mut self) -> Result<Vec<QueueTrack>> {
        let page = self
            .source
            .next_page(&self.endpoint, self.continuation.as_deref())
            .await?;
        self.continuation = page.continuation;
        self.first_page_loaded = true;

        Ok(page.items.into_iter().map(QueueTrack::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::ScriptedRadio;
    use navitube::NextPage;

    fn page(ids: &[&str], continuation: Option<&str>) -> NextPage {
        ScriptedRadio::page("Seeded Radio", ids, continuation)
    }

    #[tokio::test]
    async fn initial_status_comes_from_the_first_remote_page() {
        let source = Arc::new(ScriptedRadio::new(
            "unused",
            vec![Ok(page(&["s1", "s2", "s3"], Some("c1")))],
        ));

        let track = QueueTrack::new("s1", "Seed");
        let mut radio = SongRadio::from_track(source.clone(), track.clone());

        assert_eq!(radio.preload_track(), Some(track));
        assert!(radio.has_next_page());

        let status = radio.initial_status().await.unwrap();
        assert_eq!(status.title.as_deref(), Some("Seeded Radio"));
        assert_eq!(status.tracks.len(), 3);
        assert_eq!(status.start_index, 0);

        // The seed's endpoint reached the source, without a continuation
        let requests = source.requests();
        assert_eq!(requests[0].0.video_id.as_deref(), Some("s1"));
        assert_eq!(requests[0].1, None);
    }

    #[tokio::test]
    async fn pages_until_the_continuation_runs_out() {
        let source = Arc::new(ScriptedRadio::new(
            "unused",
            vec![
                Ok(page(&["s1"], Some("c1"))),
                Ok(page(&["s2"], Some("c2"))),
                Ok(page(&["s3"], None)),
            ],
        ));

        let mut radio =
            SongRadio::from_endpoint(source.clone(), WatchEndpoint::for_song("s1"));
        let status = radio.initial_status().await.unwrap();

        let mut all: Vec<QueueTrack> = status.tracks;
        while radio.has_next_page() {
            all.extend(radio.next_page().await.unwrap());
        }

        assert_eq!(all.len(), 3);
        assert!(!radio.has_next_page());

        // Tokens were forwarded verbatim, one slot at a time
        let requests = source.requests();
        assert_eq!(requests[1].1.as_deref(), Some("c1"));
        assert_eq!(requests[2].1.as_deref(), Some("c2"));
    }
}
