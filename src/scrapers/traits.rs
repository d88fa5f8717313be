use crate::models::StatsRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all profile stats scrapers
/// This allows easy addition of new sources (Calendly, Gumroad, etc) in the future
#[async_trait]
pub trait ScraperTrait: Send + Sync {
    /// Scrape the current stats snapshot from the source
    async fn scrape(&self) -> Result<StatsRecord>;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}
