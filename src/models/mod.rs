use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default values used when scraping fails or yields nothing usable
pub const DEFAULT_BOOKINGS: u64 = 699;
pub const DEFAULT_REVIEWS: u64 = 87;
pub const DEFAULT_RATING: f64 = 4.8;

/// Snapshot of profile statistics scraped from Topmate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsRecord {
    pub bookings: u64,
    pub reviews: u64,
    pub rating: f64,
    pub last_updated: DateTime<Utc>,
}

impl StatsRecord {
    /// Complete default record, used when the fetch itself fails
    pub fn fallback() -> Self {
        Self {
            bookings: DEFAULT_BOOKINGS,
            reviews: DEFAULT_REVIEWS,
            rating: DEFAULT_RATING,
            last_updated: Utc::now(),
        }
    }

    /// Re-check range constraints before persistence, resetting any
    /// out-of-range field to its default. Bookings and reviews are unsigned
    /// so their >= 0 constraint holds by construction; rating still needs
    /// the [0, 5] check.
    pub fn validated(mut self) -> Self {
        if !self.rating.is_finite() || !(0.0..=5.0).contains(&self.rating) {
            self.rating = DEFAULT_RATING;
        }
        self
    }
}
