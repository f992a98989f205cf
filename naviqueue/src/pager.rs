//! Keyed continuation-paged listing state
//!
//! Search and browse screens hold one growing item list per filter key,
//! extended by "load more" triggers. This module owns that table
//! explicitly: page state is a plain value per key, and a single-flight
//! guard makes a duplicate trigger a no-op instead of a race.

use crate::error::Result;
use crate::source::{BrowsePaging, PagingSource, SearchPaging};
use navitube::{ItemsPage, TubeClient, TubeItem};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Outcome of a `load_more` trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and appended; carries the number of new items
    Loaded(usize),
    /// A fetch for this key is already outstanding; the trigger was ignored
    AlreadyLoading,
    /// The listing is exhausted for this key; the trigger was ignored
    Exhausted,
    /// The listing was reset while the fetch was outstanding; the stale
    /// page was dropped
    Superseded,
}

/// Accumulated page state for one key
#[derive(Debug, Default)]
struct PageSlot {
    items: Vec<TubeItem>,
    continuation: Option<String>,
    /// Whether the first page has been consumed
    loaded: bool,
    /// Single-flight guard: a fetch for this key is outstanding
    in_flight: bool,
}

struct ListingInner<K> {
    pages: HashMap<K, PageSlot>,
    /// Bumped on reset; fetches started under an older generation are stale
    generation: u64,
}

/// An owned table of continuation-paged listings, one per key
///
/// Triggers may come from several tasks at once (scroll events, retries):
/// the table serializes its state behind an async mutex, marks a key
/// in-flight for the duration of its fetch, and drops results that raced a
/// [`reset`](PagedListing::reset).
///
/// The continuation for a key is a single slot: each fetched page replaces
/// it with the token from the response, and a failed fetch leaves it
/// untouched so the same trigger can be retried.
pub struct PagedListing<S: PagingSource> {
    source: Arc<S>,
    inner: Mutex<ListingInner<S::Key>>,
}

impl<S: PagingSource> PagedListing<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            inner: Mutex::new(ListingInner {
                pages: HashMap::new(),
                generation: 0,
            }),
        }
    }

    /// Triggers a page load for `key`
    ///
    /// Fetches the first page if the key is untouched, the next page if a
    /// continuation is stored, and does nothing when the key is exhausted
    /// or a fetch for it is already outstanding.
    ///
    /// Dropping the returned future mid-fetch leaves the key claimed;
    /// [`reset`](PagedListing::reset) releases it together with the rest of
    /// the table.
    pub async fn load_more(&self, key: &S::Key) -> Result<LoadOutcome> {
        // Claim the slot under the lock
        let (continuation, generation) = {
            let mut inner = self.inner.lock().await;
            let generation = inner.generation;
            let slot = inner.pages.entry(key.clone()).or_default();
            if slot.in_flight {
                debug!("Load already outstanding for this key, ignoring trigger");
                return Ok(LoadOutcome::AlreadyLoading);
            }
            if slot.loaded && slot.continuation.is_none() {
                return Ok(LoadOutcome::Exhausted);
            }
            slot.in_flight = true;
            (slot.continuation.clone(), generation)
        };

        // Fetch with the lock released
        let fetched = self.source.fetch_page(key, continuation.as_deref()).await;

        // Commit under the lock
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            // A reset cleared the table while we were fetching; the claimed
            // slot is gone and the page must not resurrect it.
            debug!("Listing was reset mid-fetch, dropping stale page");
            return Ok(LoadOutcome::Superseded);
        }
        let slot = inner.pages.entry(key.clone()).or_default();
        slot.in_flight = false;

        match fetched {
            Ok(page) => {
                let count = page.items.len();
                slot.items.extend(page.items);
                slot.continuation = page.continuation;
                slot.loaded = true;
                Ok(LoadOutcome::Loaded(count))
            }
            Err(err) => {
                // Continuation stays untouched: retrying the trigger repeats
                // the same fetch.
                warn!("Page load failed: {}", err);
                Err(err)
            }
        }
    }

    /// Clears every accumulated page and invalidates outstanding fetches
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.pages.clear();
        inner.generation += 1;
    }

    /// Whether more pages can be fetched for `key`
    pub async fn has_more(&self, key: &S::Key) -> bool {
        let inner = self.inner.lock().await;
        match inner.pages.get(key) {
            None => true,
            Some(slot) => !slot.loaded || slot.continuation.is_some(),
        }
    }

    /// Snapshot of the accumulated state for `key`
    ///
    /// `None` until a first page has loaded.
    pub async fn snapshot(&self, key: &S::Key) -> Option<ItemsPage> {
        let inner = self.inner.lock().await;
        inner
            .pages
            .get(key)
            .filter(|slot| slot.loaded)
            .map(|slot| ItemsPage {
                items: slot.items.clone(),
                continuation: slot.continuation.clone(),
            })
    }

    /// Accumulated items for `key`, empty while nothing has loaded
    pub async fn items(&self, key: &S::Key) -> Vec<TubeItem> {
        let inner = self.inner.lock().await;
        inner
            .pages
            .get(key)
            .map(|slot| slot.items.clone())
            .unwrap_or_default()
    }
}

impl PagedListing<SearchPaging> {
    /// Listing over a fixed search query, keyed by result filter
    pub fn for_search(client: Arc<TubeClient>, query: impl Into<String>) -> Self {
        Self::new(Arc::new(SearchPaging::new(client, query)))
    }
}

impl PagedListing<BrowsePaging> {
    /// Listing over catalog pages, keyed by browse endpoint
    pub fn for_browse(client: Arc<TubeClient>) -> Self {
        Self::new(Arc::new(BrowsePaging::new(client)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueueError;
    use async_trait::async_trait;
    use navitube::SongItem;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::Semaphore;

    fn page(ids: &[&str], continuation: Option<&str>) -> ItemsPage {
        ItemsPage {
            items: ids
                .iter()
                .map(|id| {
                    TubeItem::Song(SongItem {
                        id: id.to_string(),
                        title: format!("Song {id}"),
                        artists: vec![],
                        album: None,
                        duration: None,
                        thumbnail: None,
                        explicit: false,
                    })
                })
                .collect(),
            continuation: continuation.map(String::from),
        }
    }

    /// Scripted paging source, optionally gated so tests can hold a fetch
    /// open while poking the listing from outside
    struct ScriptedPaging {
        scripts: StdMutex<HashMap<String, VecDeque<Result<ItemsPage>>>>,
        requests: StdMutex<Vec<(String, Option<String>)>>,
        gate: Option<Arc<Semaphore>>,
    }

    impl ScriptedPaging {
        fn new(scripts: Vec<(&str, Vec<Result<ItemsPage>>)>) -> Self {
            Self {
                scripts: StdMutex::new(
                    scripts
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v.into()))
                        .collect(),
                ),
                requests: StdMutex::new(Vec::new()),
                gate: None,
            }
        }

        fn gated(mut self, gate: Arc<Semaphore>) -> Self {
            self.gate = Some(gate);
            self
        }

        fn requests(&self) -> Vec<(String, Option<String>)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PagingSource for ScriptedPaging {
        type Key = String;

        async fn fetch_page(
            &self,
            key: &String,
            continuation: Option<&str>,
        ) -> Result<ItemsPage> {
            self.requests
                .lock()
                .unwrap()
                .push((key.clone(), continuation.map(String::from)));
            if let Some(gate) = &self.gate {
                gate.acquire().await.unwrap().forget();
            }
            self.scripts
                .lock()
                .unwrap()
                .get_mut(key)
                .and_then(|pages| pages.pop_front())
                .unwrap_or_else(|| Err(QueueError::other("page script exhausted")))
        }
    }

    #[tokio::test]
    async fn load_more_appends_items_and_replaces_the_continuation() {
        let source = Arc::new(ScriptedPaging::new(vec![(
            "songs",
            vec![
                Ok(page(&["s1", "s2"], Some("abc"))),
                Ok(page(&["s3"], None)),
            ],
        )]));
        let listing = PagedListing::new(source.clone());
        let key = "songs".to_string();

        assert!(listing.has_more(&key).await);
        assert!(listing.snapshot(&key).await.is_none());

        assert_eq!(listing.load_more(&key).await.unwrap(), LoadOutcome::Loaded(2));
        let snapshot = listing.snapshot(&key).await.unwrap();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.continuation.as_deref(), Some("abc"));

        // The stored token rides the second fetch, and its null replacement
        // marks exhaustion
        assert_eq!(listing.load_more(&key).await.unwrap(), LoadOutcome::Loaded(1));
        assert_eq!(source.requests()[1].1.as_deref(), Some("abc"));
        assert_eq!(listing.items(&key).await.len(), 3);
        assert!(!listing.has_more(&key).await);

        assert_eq!(listing.load_more(&key).await.unwrap(), LoadOutcome::Exhausted);
        assert_eq!(source.requests().len(), 2);
    }

    #[tokio::test]
    async fn keys_page_independently() {
        let source = Arc::new(ScriptedPaging::new(vec![
            ("songs", vec![Ok(page(&["s1"], Some("cs")))]),
            ("albums", vec![Ok(page(&["al1", "al2"], None))]),
        ]));
        let listing = PagedListing::new(source);
        let songs = "songs".to_string();
        let albums = "albums".to_string();

        listing.load_more(&songs).await.unwrap();
        listing.load_more(&albums).await.unwrap();

        assert_eq!(listing.items(&songs).await.len(), 1);
        assert_eq!(listing.items(&albums).await.len(), 2);
        assert!(listing.has_more(&songs).await);
        assert!(!listing.has_more(&albums).await);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_the_continuation_for_a_retry() {
        let source = Arc::new(ScriptedPaging::new(vec![(
            "songs",
            vec![
                Ok(page(&["s1"], Some("abc"))),
                Err(QueueError::other("transient network failure")),
                Ok(page(&["s2"], Some("def"))),
            ],
        )]));
        let listing = PagedListing::new(source.clone());
        let key = "songs".to_string();

        listing.load_more(&key).await.unwrap();
        assert!(listing.load_more(&key).await.is_err());

        // State unchanged by the failure
        let snapshot = listing.snapshot(&key).await.unwrap();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.continuation.as_deref(), Some("abc"));

        // The retry repeats the identical fetch
        assert_eq!(listing.load_more(&key).await.unwrap(), LoadOutcome::Loaded(1));
        let requests = source.requests();
        assert_eq!(requests[1].1.as_deref(), Some("abc"));
        assert_eq!(requests[2].1.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn duplicate_triggers_are_single_flight() {
        let gate = Arc::new(Semaphore::new(0));
        let source = Arc::new(
            ScriptedPaging::new(vec![("songs", vec![Ok(page(&["s1"], None))])])
                .gated(gate.clone()),
        );
        let listing = Arc::new(PagedListing::new(source.clone()));
        let key = "songs".to_string();

        // First trigger parks inside the fetch, holding the in-flight flag
        let first = tokio::spawn({
            let listing = listing.clone();
            let key = key.clone();
            async move { listing.load_more(&key).await }
        });
        tokio::task::yield_now().await;

        // A second trigger while the fetch is outstanding is a no-op
        assert_eq!(
            listing.load_more(&key).await.unwrap(),
            LoadOutcome::AlreadyLoading
        );

        gate.add_permits(1);
        assert_eq!(first.await.unwrap().unwrap(), LoadOutcome::Loaded(1));

        // Exactly one fetch reached the source
        assert_eq!(source.requests().len(), 1);
    }

    #[tokio::test]
    async fn reset_supersedes_an_outstanding_fetch() {
        let gate = Arc::new(Semaphore::new(0));
        let source = Arc::new(
            ScriptedPaging::new(vec![("songs", vec![Ok(page(&["s1"], Some("abc")))])])
                .gated(gate.clone()),
        );
        let listing = Arc::new(PagedListing::new(source));
        let key = "songs".to_string();

        let first = tokio::spawn({
            let listing = listing.clone();
            let key = key.clone();
            async move { listing.load_more(&key).await }
        });
        tokio::task::yield_now().await;

        listing.reset().await;
        gate.add_permits(1);

        assert_eq!(first.await.unwrap().unwrap(), LoadOutcome::Superseded);
        // The stale page did not resurrect the cleared slot
        assert!(listing.snapshot(&key).await.is_none());
        assert!(listing.has_more(&key).await);
    }
}
