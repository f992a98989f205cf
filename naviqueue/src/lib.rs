//! # NaviQueue
//!
//! Queue and paging core for NaviMusic.
//!
//! This crate provides the abstractions a playback session is built on:
//! an ordered, lazily-extended sequence of playable tracks, fetched page by
//! page from a remote source through opaque continuation tokens.
//!
//! ## Features
//!
//! - **Queue contract**: initial snapshot + incremental paging
//!   ([`Queue`], [`QueueStatus`]).
//! - **Queue strategies**: static lists, song radios, and local-seed album
//!   and playlist radios (`queues` module).
//! - **Keyed listings**: the per-filter "load more" table search and browse
//!   screens hold, with a single-flight guard
//!   ([`PagedListing`](pager::PagedListing)).
//! - **Source seams**: [`RadioSource`](source::RadioSource) and
//!   [`PagingSource`](source::PagingSource), implemented by
//!   `navitube::TubeClient` and mockable in tests.
//!
//! ## Paging model
//!
//! Every paginated fetch hands back an opaque continuation token. A queue
//! keeps exactly one token slot: consuming it to fetch a page replaces it
//! with the token from the response, and `None` marks exhaustion. A failed
//! fetch leaves the slot untouched, so the same call can be retried.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use naviqueue::queues::{AlbumWithTracks, LocalAlbumRadio};
//! use naviqueue::{Queue, QueueTrack};
//! use navitube::TubeClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(TubeClient::from_config()?);
//!
//!     let album = AlbumWithTracks {
//!         id: "al1".to_string(),
//!         title: "Some Album".to_string(),
//!         tracks: vec![QueueTrack::new("s1", "Opener")],
//!     };
//!
//!     let mut queue = LocalAlbumRadio::new(client, album);
//!     let status = queue.initial_status().await?;
//!     println!("Playing: {:?}", status.title);
//!
//!     while queue.has_next_page() {
//!         let batch = queue.next_page().await?;
//!         println!("{} more tracks", batch.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod pager;
pub mod queues;
pub mod source;
mod track;

use async_trait::async_trait;

pub use error::{QueueError, Result};
pub use pager::{LoadOutcome, PagedListing};
pub use source::{BrowsePaging, PagingSource, RadioSource, SearchPaging};
pub use track::QueueTrack;

/// Starting snapshot of a queue
///
/// Produced once, at queue creation, to seed the player's current position.
#[derive(Debug, Clone)]
pub struct QueueStatus {
    /// Display title of the queue, when it has one
    pub title: Option<String>,
    /// The initially known tracks, in play order
    pub tracks: Vec<QueueTrack>,
    /// Index within `tracks` playback starts at
    pub start_index: usize,
}

/// An ordered, incrementally-fetched sequence of playable tracks backing a
/// playback session
///
/// A queue instance is created per playback session, lives while it is the
/// active player queue, and is simply dropped when the user starts another
/// one; it holds no external resources.
///
/// # Contract
///
/// - [`initial_status`](Queue::initial_status) is called exactly once per
///   instance, before any paging.
/// - [`has_next_page`](Queue::has_next_page) is a pure query with no side
///   effect.
/// - [`next_page`](Queue::next_page) must not be called once
///   `has_next_page` returns false. Failures propagate the remote source's
///   error and leave the paging state unchanged, so repeating the call is
///   safe.
#[async_trait]
pub trait Queue: Send {
    /// Track the player may start buffering before the initial status is
    /// available (e.g. the song a radio was seeded from)
    fn preload_track(&self) -> Option<QueueTrack> {
        None
    }

    /// Returns the starting snapshot of the queue
    async fn initial_status(&mut self) -> Result<QueueStatus>;

    /// Whether another page can be fetched
    fn has_next_page(&self) -> bool;

    /// Fetches the next batch of tracks and advances the paging state
    async fn next_page(&mut self) -> Result<Vec<QueueTrack>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestQueue {
        served: bool,
    }

    #[async_trait]
    impl Queue for TestQueue {
        async fn initial_status(&mut self) -> Result<QueueStatus> {
            Ok(QueueStatus {
                title: Some("Test".to_string()),
                tracks: vec![QueueTrack::new("s1", "One")],
                start_index: 0,
            })
        }

        fn has_next_page(&self) -> bool {
            !self.served
        }

        async fn next_page(&mut self) -> Result<Vec<QueueTrack>> {
            self.served = true;
            Ok(vec![QueueTrack::new("s2", "Two")])
        }
    }

    #[tokio::test]
    async fn queue_trait_objects_page_to_exhaustion() {
        let mut queue: Box<dyn Queue> = Box::new(TestQueue { served: false });
        assert!(queue.preload_track().is_none());

        let status = queue.initial_status().await.unwrap();
        assert_eq!(status.tracks.len(), 1);
        assert_eq!(status.start_index, 0);

        let mut all = status.tracks;
        while queue.has_next_page() {
            all.extend(queue.next_page().await.unwrap());
        }
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].id(), "s2");
    }
}
