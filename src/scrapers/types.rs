/// Target profile for stats scraping
#[derive(Debug, Clone)]
pub struct ScrapeTarget {
    /// Public profile page to fetch
    pub profile_url: String,
}

impl Default for ScrapeTarget {
    fn default() -> Self {
        Self {
            profile_url: "https://topmate.io/tharun_polu".to_string(),
        }
    }
}
