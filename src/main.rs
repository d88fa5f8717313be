mod models;
mod persist;
mod scrapers;

use models::StatsRecord;
use scrapers::{ScraperTrait, TopmateScraper};
use tracing::{info, warn, Level};
use tracing_subscriber;

/// Output path, relative to the working directory
const STATS_PATH: &str = "assets/data/topmate_stats.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("📊 Topmate Stats Updater");
    info!("========================");

    let scraper = TopmateScraper::new()?;

    // A failed fetch still produces a valid stats file: fall back to the
    // complete default record and persist that instead.
    let stats = match scraper.scrape().await {
        Ok(stats) => stats,
        Err(e) => {
            warn!("Error fetching stats: {:#}", e);
            info!("Falling back to default stats");
            StatsRecord::fallback()
        }
    };

    let stats = stats.validated();

    persist::write_stats(STATS_PATH, &stats).await?;

    println!(
        "Stats updated successfully: {} bookings, {} reviews, {}/5 rating (as of {})",
        stats.bookings, stats.reviews, stats.rating, stats.last_updated
    );

    Ok(())
}
