//! Catalog search, filtered and unfiltered

use super::TubeApi;
use crate::endpoint::SearchFilter;
use crate::error::Result;
use crate::models::TubeItem;
use crate::pages::{ItemsPage, SearchSummaryPage, SearchSummarySection};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Response of the `/search` endpoint with a filter
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<TubeItem>,
    #[serde(default)]
    continuation: Option<String>,
}

/// Response of the unfiltered `/search` endpoint
#[derive(Debug, Deserialize)]
struct SearchSummaryResponse {
    #[serde(default)]
    summaries: Vec<SummarySectionResponse>,
}

#[derive(Debug, Deserialize)]
struct SummarySectionResponse {
    title: String,
    #[serde(default)]
    items: Vec<TubeItem>,
}

impl TubeApi {
    /// Searches the catalog within one result category
    pub async fn search(&self, query: &str, filter: SearchFilter) -> Result<ItemsPage> {
        debug!(query = %query, filter = filter.param(), "Searching");
        let body = json!({
            "query": query,
            "filter": filter.param(),
        });
        let response: SearchResponse = self.post("/search", body).await?;

        Ok(ItemsPage {
            items: response.items,
            continuation: response.continuation,
        })
    }

    /// Fetches the next page of a filtered search
    pub async fn search_continuation(&self, continuation: &str) -> Result<ItemsPage> {
        debug!("Fetching search continuation");
        let body = json!({ "continuation": continuation });
        let response: SearchResponse = self.post("/search", body).await?;

        Ok(ItemsPage {
            items: response.items,
            continuation: response.continuation,
        })
    }

    /// Searches the catalog without a filter
    ///
    /// Returns a few best matches per category; not pageable.
    pub async fn search_summary(&self, query: &str) -> Result<SearchSummaryPage> {
        debug!(query = %query, "Searching (summary)");
        let body = json!({ "query": query });
        let response: SearchSummaryResponse = self.post("/search", body).await?;

        Ok(SearchSummaryPage {
            summaries: response
                .summaries
                .into_iter()
                .map(|s| SearchSummarySection {
                    title: s.title,
                    items: s.items,
                })
                .collect(),
        })
    }
}
