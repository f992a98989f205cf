//! End-to-end search listing: PagedListing over the real client, against a
//! local mock server

use mockito::Matcher;
use naviqueue::{LoadOutcome, PagedListing};
use navitube::{SearchFilter, TubeClient};
use serde_json::json;
use std::sync::Arc;

fn song_json(id: &str) -> serde_json::Value {
    json!({
        "type": "song",
        "id": id,
        "title": format!("Song {id}"),
    })
}

#[tokio::test]
async fn search_listing_pages_end_to_end() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let first = server
        .mock("POST", "/search")
        .match_body(Matcher::PartialJson(json!({
            "query": "test",
            "filter": "songs",
        })))
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [song_json("s1"), song_json("s2")],
                "continuation": "abc",
            })
            .to_string(),
        )
        .create_async()
        .await;

    let second = server
        .mock("POST", "/search")
        .match_body(Matcher::PartialJson(json!({"continuation": "abc"})))
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [song_json("s3")],
                "continuation": null,
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = Arc::new(TubeClient::with_base_url(server.url())?);
    let listing = PagedListing::for_search(client, "test");
    let key = SearchFilter::Songs;

    assert!(listing.has_more(&key).await);

    assert_eq!(listing.load_more(&key).await?, LoadOutcome::Loaded(2));
    let snapshot = listing.snapshot(&key).await.expect("first page loaded");
    assert_eq!(snapshot.continuation.as_deref(), Some("abc"));

    assert_eq!(listing.load_more(&key).await?, LoadOutcome::Loaded(1));
    assert_eq!(listing.load_more(&key).await?, LoadOutcome::Exhausted);
    assert!(!listing.has_more(&key).await);

    let items = listing.items(&key).await;
    let ids: Vec<&str> = items.iter().map(|item| item.id()).collect();
    assert_eq!(ids, ["s1", "s2", "s3"]);

    first.assert_async().await;
    second.assert_async().await;
    Ok(())
}
