//! Stream an album radio: local tracks play first, then the remote
//! expansion is paged in on demand
//!
//! Run with: cargo run --example album_radio -- <album_id>

use naviqueue::queues::{AlbumWithTracks, LocalAlbumRadio};
use naviqueue::{Queue, QueueTrack};
use navitube::TubeClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let album_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "al-demo".to_string());

    let client = Arc::new(TubeClient::from_config()?);

    // Stand-in for tracks the local library would provide
    let album = AlbumWithTracks {
        id: album_id,
        title: "Demo Album".to_string(),
        tracks: vec![
            QueueTrack::new("s1", "Opener"),
            QueueTrack::new("s2", "Middle Eight"),
            QueueTrack::new("s3", "Closer"),
        ],
    };

    let mut queue = LocalAlbumRadio::new(client, album);

    let status = queue.initial_status().await?;
    println!("Queue: {}", status.title.as_deref().unwrap_or("(untitled)"));
    for track in &status.tracks {
        println!("  {} - {}", track.id(), track.title());
    }

    let mut fetched = 0;
    while queue.has_next_page() && fetched < 2 {
        let batch = queue.next_page().await?;
        fetched += 1;
        println!("Radio expansion, page {fetched}:");
        for track in &batch {
            println!("  {} - {}", track.id(), track.title());
        }
    }

    Ok(())
}
