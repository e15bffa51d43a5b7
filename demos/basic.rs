//! Basic NNTP reader example
//!
//! Run with: cargo run --example basic

use nntp_reader::{ArticleId, Direction, NntpClient, ServerConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (RUST_LOG=nntp_reader=trace shows every protocol line)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Configure the NNTP server
    let mut config = ServerConfig::new(
        std::env::var("NNTP_HOST").unwrap_or_else(|_| "news.example.com".to_string()),
    )
    .with_port(
        std::env::var("NNTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(119),
    );
    if let (Ok(user), Ok(pass)) = (std::env::var("NNTP_USER"), std::env::var("NNTP_PASS")) {
        config = config.with_credentials(user, pass);
    }

    println!("Connecting to {}:{}...", config.host, config.port);

    // Connect to the server (authenticates when credentials are set)
    let mut client = NntpClient::connect(Arc::new(config)).await?;
    println!(
        "Connected! Posting {}",
        if client.posting_allowed() {
            "allowed"
        } else {
            "not allowed"
        }
    );

    if std::env::var("NNTP_TRACE").is_ok() {
        client.set_tracer(|direction: Direction, line: &str| eprintln!("{} {}", direction, line));
    }

    // Select a newsgroup
    let group = std::env::var("NNTP_GROUP").unwrap_or_else(|_| "alt.test".to_string());
    let group_info = client.select_group(&group).await?;
    println!(
        "Selected group '{}': {} articles ({}-{})",
        group_info.name, group_info.count, group_info.first, group_info.last
    );

    // Fetch some article overview data
    if group_info.count > 0 {
        let start = group_info.last.saturating_sub(10).max(group_info.first);
        let range = format!("{}-{}", start, group_info.last);
        println!("\nFetching XOVER {}...", range);

        let entries = client.overview_entries(Some(&range)).await?;
        println!("Got {} entries:\n", entries.len());

        for entry in entries.iter().take(5) {
            println!(
                "  #{}: {} (by {}, {} bytes)",
                entry.article_number, entry.subject, entry.author, entry.bytes
            );
        }

        if entries.len() > 5 {
            println!("  ... and {} more", entries.len() - 5);
        }

        // Show the newest article in full
        if let Some(newest) = entries.last() {
            let article = client
                .article(Some(&ArticleId::ByNumber(newest.article_number)))
                .await?;
            println!("\n{}", article);
        }
    }

    // Close gracefully
    client.close().await?;
    println!("\nConnection closed.");

    Ok(())
}
