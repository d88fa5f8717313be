pub mod topmate;
pub mod traits;
pub mod types;

pub use topmate::TopmateScraper;
pub use traits::ScraperTrait;
