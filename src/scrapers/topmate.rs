use crate::models::{StatsRecord, DEFAULT_BOOKINGS, DEFAULT_RATING, DEFAULT_REVIEWS};
use crate::scrapers::traits::ScraperTrait;
use crate::scrapers::types::ScrapeTarget;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Sums of digit runs at or above these bounds are concatenation noise
/// from surrounding markup, not real counts
const MAX_BOOKINGS: u64 = 1_000_000;
const MAX_REVIEWS: u64 = 10_000;

/// Topmate profile scraper implementation
pub struct TopmateScraper {
    client: Client,
    target: ScrapeTarget,
}

impl TopmateScraper {
    /// Create a new Topmate scraper for the default profile
    pub fn new() -> Result<Self> {
        Self::with_target(ScrapeTarget::default())
    }

    /// Create a new Topmate scraper for a custom profile URL
    pub fn with_target(target: ScrapeTarget) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, target })
    }
}

impl Default for TopmateScraper {
    fn default() -> Self {
        Self::new().expect("Failed to create default TopmateScraper")
    }
}

#[async_trait]
impl ScraperTrait for TopmateScraper {
    async fn scrape(&self) -> Result<StatsRecord> {
        info!("Starting Topmate scrape for {}", self.target.profile_url);

        let response = self
            .client
            .get(&self.target.profile_url)
            .send()
            .await
            .context("Failed to fetch Topmate profile page")?;

        if !response.status().is_success() {
            warn!("Topmate returned status: {}", response.status());
            anyhow::bail!("Failed to fetch Topmate profile page: {}", response.status());
        }

        let html = response.text().await.context("Failed to read response body")?;

        debug!("Downloaded {} bytes of HTML", html.len());

        let stats = extract_stats(&html);

        info!(
            "✅ Extracted stats: {} bookings, {} reviews, {}/5 rating",
            stats.bookings, stats.reviews, stats.rating
        );

        Ok(stats)
    }

    fn source_name(&self) -> &'static str {
        "Topmate"
    }
}

/// Pull the three stats out of raw profile HTML.
///
/// The page markup is free text with no stable structure, so each stat is
/// recovered by a linear scan over the document's text nodes with a substring
/// predicate. Any field with no usable match keeps its default.
pub fn extract_stats(html: &str) -> StatsRecord {
    let document = Html::parse_document(html);
    let nodes: Vec<&str> = document.root_element().text().collect();

    StatsRecord {
        bookings: extract_bookings(&nodes).unwrap_or(DEFAULT_BOOKINGS),
        reviews: extract_reviews(&nodes).unwrap_or(DEFAULT_REVIEWS),
        rating: extract_rating(&nodes).unwrap_or(DEFAULT_RATING),
        last_updated: Utc::now(),
    }
}

/// Concatenate every ASCII digit in the text and parse the run as an integer.
/// Deliberately lossy: "1,234 sales" and "1 234 sales" both yield 1234, and
/// unrelated digits in the same node get folded in. The sanity bounds on the
/// callers reject the worst of the resulting noise.
fn digit_run(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Sum the digit runs of every text node mentioning "sales" (any case),
/// skipping runs at or above the sanity bound.
fn extract_bookings(nodes: &[&str]) -> Option<u64> {
    let total: u64 = nodes
        .iter()
        .filter(|node| node.to_lowercase().contains("sales"))
        .filter_map(|node| digit_run(node))
        .filter(|count| *count < MAX_BOOKINGS)
        .sum();

    (total > 0).then_some(total)
}

/// Take the digit run of the first text node mentioning "Testimonials".
/// Only that one node is considered; a bad parse there falls back to the
/// default rather than scanning further.
fn extract_reviews(nodes: &[&str]) -> Option<u64> {
    let node = nodes.iter().find(|node| node.contains("Testimonials"))?;
    digit_run(node).filter(|count| *count < MAX_REVIEWS)
}

/// Scan text nodes containing "/5" and accept the first one whose leading
/// "X/" piece parses to a rating within [0, 5].
fn extract_rating(nodes: &[&str]) -> Option<f64> {
    nodes
        .iter()
        .filter(|node| node.contains("/5"))
        .filter_map(|node| node.trim().split('/').next()?.parse::<f64>().ok())
        .find(|rating| (0.0..=5.0).contains(rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_bookings_across_sales_nodes() {
        let html = "<div><span>1,234 sales</span><span>567 sales</span></div>";
        assert_eq!(extract_stats(html).bookings, 1801);
    }

    #[test]
    fn sales_match_is_case_insensitive() {
        let html = "<p>45 SALES</p>";
        assert_eq!(extract_stats(html).bookings, 45);
    }

    #[test]
    fn oversized_bookings_fall_back_to_default() {
        let html = "<p>2,000,000 sales</p>";
        assert_eq!(extract_stats(html).bookings, DEFAULT_BOOKINGS);
    }

    #[test]
    fn reviews_from_first_testimonials_node() {
        let html = "<h2>Testimonials (142)</h2>";
        assert_eq!(extract_stats(html).reviews, 142);
    }

    #[test]
    fn oversized_reviews_fall_back_to_default() {
        let html = "<h2>Testimonials (99999)</h2>";
        assert_eq!(extract_stats(html).reviews, DEFAULT_REVIEWS);
    }

    #[test]
    fn testimonials_match_is_case_sensitive() {
        let html = "<h2>testimonials (142)</h2>";
        assert_eq!(extract_stats(html).reviews, DEFAULT_REVIEWS);
    }

    #[test]
    fn rating_from_leading_piece_of_slash_five_node() {
        let html = "<span>4.6/5 stars</span>";
        assert_eq!(extract_stats(html).rating, 4.6);
    }

    #[test]
    fn out_of_range_rating_falls_back_to_default() {
        let html = "<span>7/5</span>";
        assert_eq!(extract_stats(html).rating, DEFAULT_RATING);
    }

    #[test]
    fn rating_scan_skips_invalid_candidates() {
        let html = "<div><span>7/5</span><span>rated 4/5</span><span>4.2/5</span></div>";
        assert_eq!(extract_stats(html).rating, 4.2);
    }

    #[test]
    fn empty_html_yields_all_defaults() {
        let stats = extract_stats("");
        assert_eq!(stats.bookings, DEFAULT_BOOKINGS);
        assert_eq!(stats.reviews, DEFAULT_REVIEWS);
        assert_eq!(stats.rating, DEFAULT_RATING);
    }

    #[test]
    fn adversarial_html_stays_within_bounds() {
        let html = "<p>sales sales 99999999999999999999 sales</p>\
                    <p>Testimonials</p>\
                    <p>NaN/5</p>\
                    <script>var x = '1e308 sales';</script>";
        let stats = extract_stats(html);
        assert!(stats.rating >= 0.0 && stats.rating <= 5.0);
        assert_eq!(stats.reviews, DEFAULT_REVIEWS);
    }

    #[test]
    fn digit_run_folds_in_unrelated_digits() {
        // Lossy by design: all digits in the node concatenate
        let html = "<p>12 sales in 3 days</p>";
        assert_eq!(extract_stats(html).bookings, 123);
    }

    #[test]
    fn digit_run_rejects_empty_and_non_numeric() {
        assert_eq!(digit_run("no numbers here"), None);
        assert_eq!(digit_run(""), None);
        assert_eq!(digit_run("1,234"), Some(1234));
    }
}
