//! Basic navitube usage: search the catalog and page through the results
//!
//! Run with: cargo run --example basic_usage -- "<query>"

use navitube::{SearchFilter, TubeClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let query = std::env::args().nth(1).unwrap_or_else(|| "aurora".to_string());
    let client = TubeClient::from_config()?;

    println!("Searching songs for '{query}'...");
    let mut page = client.search(&query, SearchFilter::Songs).await?;
    let mut shown = 0;

    loop {
        for item in &page.items {
            shown += 1;
            println!("{shown:3}. {}", item.title());
        }

        // Three pages are plenty for a demo
        if shown >= 60 {
            break;
        }
        match page.continuation.as_deref() {
            Some(token) => page = client.search_continuation(token).await?,
            None => break,
        }
    }

    println!("{shown} results shown");
    Ok(())
}
