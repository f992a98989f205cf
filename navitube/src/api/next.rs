//! Watch-queue / radio paging endpoint

use super::TubeApi;
use crate::endpoint::WatchEndpoint;
use crate::error::Result;
use crate::models::SongItem;
use crate::pages::NextPage;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Response of the `/next` endpoint
#[derive(Debug, Deserialize)]
struct NextResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    items: Vec<SongItem>,
    #[serde(default)]
    current_index: Option<usize>,
    #[serde(default)]
    continuation: Option<String>,
}

impl TubeApi {
    /// Fetches one page of the watch queue described by `endpoint`
    ///
    /// With `continuation` set, the server resumes the queue where the
    /// previous page stopped; the token travels back verbatim and is never
    /// inspected here.
    pub async fn next(
        &self,
        endpoint: &WatchEndpoint,
        continuation: Option<&str>,
    ) -> Result<NextPage> {
        debug!(
            video_id = ?endpoint.video_id,
            playlist_id = ?endpoint.playlist_id,
            has_continuation = continuation.is_some(),
            "Fetching watch queue page"
        );

        let body = json!({
            "video_id": endpoint.video_id,
            "playlist_id": endpoint.playlist_id,
            "params": endpoint.params,
            "index": endpoint.index,
            "continuation": continuation,
        });

        let response: NextResponse = self.post("/next", body).await?;

        Ok(NextPage {
            title: response.title,
            items: response.items,
            current_index: response.current_index,
            continuation: response.continuation,
        })
    }
}
