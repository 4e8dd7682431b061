pub mod detail_scraper;
pub mod listing_scraper;
pub mod pacer;
pub mod page_fetcher;
pub mod photo_harvester;

pub use detail_scraper::*;
pub use listing_scraper::*;
pub use pacer::*;
pub use page_fetcher::*;
pub use photo_harvester::*;
