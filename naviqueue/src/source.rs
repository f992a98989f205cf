//! Boundary traits to the remote paging source
//!
//! Queues and listings never talk HTTP themselves; they consume one of the
//! trait seams below. `navitube::TubeClient` implements both sides for the
//! real backend, and tests substitute scripted fakes.

use crate::error::Result;
use async_trait::async_trait;
use navitube::{
    BrowseEndpoint, ItemsPage, NextPage, SearchFilter, TubeClient, WatchEndpoint,
};
use std::hash::Hash;
use std::sync::Arc;

/// Remote collaborator radio queues page against
#[async_trait]
pub trait RadioSource: Send + Sync {
    /// Resolves the remote playlist mirroring a locally known album
    async fn resolve_album_playlist(&self, album_id: &str) -> Result<String>;

    /// Fetches one watch-queue page
    ///
    /// `continuation` resumes where a previous page stopped; the token is
    /// forwarded verbatim.
    async fn next_page(
        &self,
        endpoint: &WatchEndpoint,
        continuation: Option<&str>,
    ) -> Result<NextPage>;
}

#[async_trait]
impl RadioSource for TubeClient {
    async fn resolve_album_playlist(&self, album_id: &str) -> Result<String> {
        Ok(TubeClient::resolve_album_playlist(self, album_id).await?)
    }

    async fn next_page(
        &self,
        endpoint: &WatchEndpoint,
        continuation: Option<&str>,
    ) -> Result<NextPage> {
        Ok(self.next(endpoint, continuation).await?)
    }
}

/// Remote collaborator keyed listings page against
///
/// A paging source answers "one more page for this key": given an endpoint
/// descriptor and the last continuation token, it returns the next batch of
/// items plus the token for the batch after it (or `None` when exhausted).
#[async_trait]
pub trait PagingSource: Send + Sync {
    /// Endpoint descriptor selecting what is being listed
    type Key: Clone + Eq + Hash + Send + Sync;

    /// Fetches one page for `key`; `continuation` resumes a previous page
    async fn fetch_page(&self, key: &Self::Key, continuation: Option<&str>)
        -> Result<ItemsPage>;
}

/// Search listing over a fixed query, keyed by result filter
pub struct SearchPaging {
    client: Arc<TubeClient>,
    query: String,
}

impl SearchPaging {
    pub fn new(client: Arc<TubeClient>, query: impl Into<String>) -> Self {
        Self {
            client,
            query: query.into(),
        }
    }

    /// Returns the query this listing searches for
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[async_trait]
impl PagingSource for SearchPaging {
    type Key = SearchFilter;

    async fn fetch_page(
        &self,
        key: &SearchFilter,
        continuation: Option<&str>,
    ) -> Result<ItemsPage> {
        let page = match continuation {
            Some(token) => self.client.search_continuation(token).await?,
            None => self.client.search(&self.query, *key).await?,
        };
        Ok(page)
    }
}

/// Catalog listing keyed by browse endpoint (artist songs, browse shelves)
pub struct BrowsePaging {
    client: Arc<TubeClient>,
}

impl BrowsePaging {
    pub fn new(client: Arc<TubeClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PagingSource for BrowsePaging {
    type Key = BrowseEndpoint;

    async fn fetch_page(
        &self,
        key: &BrowseEndpoint,
        continuation: Option<&str>,
    ) -> Result<ItemsPage> {
        let page = match continuation {
            Some(token) => self.client.browse_continuation(token).await?,
            None => self.client.browse(key).await?,
        };
        Ok(ItemsPage {
            items: page.items,
            continuation: page.continuation,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted fakes shared by the queue tests

    use super::*;
    use crate::error::QueueError;
    use navitube::{NextPage, SongItem};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A [`RadioSource`] serving pre-baked pages in order, recording every
    /// request it sees
    pub(crate) struct ScriptedRadio {
        playlist_id: String,
        resolve_failures: Mutex<usize>,
        pages: Mutex<VecDeque<Result<NextPage>>>,
        requests: Mutex<Vec<(WatchEndpoint, Option<String>)>>,
    }

    impl ScriptedRadio {
        pub fn new(playlist_id: &str, pages: Vec<Result<NextPage>>) -> Self {
            Self {
                playlist_id: playlist_id.to_string(),
                resolve_failures: Mutex::new(0),
                pages: Mutex::new(pages.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Makes the next `n` playlist resolutions fail
        pub fn with_resolve_failures(self, n: usize) -> Self {
            *self.resolve_failures.lock().unwrap() = n;
            self
        }

        /// Builds a page of synthetic songs
        pub fn page(title: &str, ids: &[&str], continuation: Option<&str>) -> NextPage {
            NextPage {
                title: Some(title.to_string()),
                items: ids
                    .iter()
                    .map(|id| SongItem {
                        id: id.to_string(),
                        title: format!("Song {id}"),
                        artists: vec![],
                        album: None,
                        duration: None,
                        thumbnail: None,
                        explicit: false,
                    })
                    .collect(),
                current_index: Some(0),
                continuation: continuation.map(String::from),
            }
        }

        /// Every `(endpoint, continuation)` pair the source has served
        pub fn requests(&self) -> Vec<(WatchEndpoint, Option<String>)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RadioSource for ScriptedRadio {
        async fn resolve_album_playlist(&self, album_id: &str) -> Result<String> {
            let mut failures = self.resolve_failures.lock().unwrap();
            if *failures > 0 {
                *failures -= 1;
                return Err(QueueError::other(format!(
                    "cannot resolve playlist for {album_id}"
                )));
            }
            Ok(self.playlist_id.clone())
        }

        async fn next_page(
            &self,
            endpoint: &WatchEndpoint,
            continuation: Option<&str>,
        ) -> Result<NextPage> {
            self.requests
                .lock()
                .unwrap()
                .push((endpoint.clone(), continuation.map(String::from)));
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(QueueError::other("page script exhausted")))
        }
    }
}
