use crate::domain::{
    photo::{ListingEntry, PhotoRecord},
    step::StepOutcome,
};

use super::{DetailScraper, ListingScraper, PageFetcher, RequestPacer};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HarvestReport {
    pub listed: usize,
    pub collected: usize,
    pub fetch_failures: usize,
    pub incomplete: usize,
}

pub struct Harvest {
    pub records: Vec<PhotoRecord>,
    pub report: HarvestReport,
}

/// Listing page first, then each detail page in turn, one request at a time.
pub struct PhotoHarvester<F> {
    fetcher: F,
    listing_scraper: ListingScraper,
    detail_scraper: DetailScraper,
    pacer: RequestPacer,
    category: String,
}

impl<F: PageFetcher> PhotoHarvester<F> {
    pub fn new(
        fetcher: F,
        listing_scraper: ListingScraper,
        detail_scraper: DetailScraper,
        pacer: RequestPacer,
        category: String,
    ) -> Self {
        PhotoHarvester {
            fetcher,
            listing_scraper,
            detail_scraper,
            pacer,
            category,
        }
    }

    pub async fn harvest(&mut self, listing_url: &str) -> Harvest {
        let entries = self.list_photos(listing_url).await;
        let total_photos = entries.len();
        log::info!("Found {} photos to parse", total_photos);

        let mut records = Vec::with_capacity(total_photos);
        let mut report = HarvestReport {
            listed: total_photos,
            ..HarvestReport::default()
        };

        for (i, entry) in entries.iter().enumerate() {
            log::info!(
                "Parsing photo {}/{}: {}",
                i + 1,
                total_photos,
                entry.detail_page_url
            );

            match self.collect_photo(entry).await {
                StepOutcome::Success(record) => records.push(record),
                StepOutcome::Absent => report.incomplete += 1,
                // Already logged by the fetcher. Not retried.
                StepOutcome::TransportFailure(_) => report.fetch_failures += 1,
            }
        }

        report.collected = records.len();

        Harvest { records, report }
    }

    async fn list_photos(&self, listing_url: &str) -> Vec<ListingEntry> {
        match self.fetcher.fetch_page(listing_url).await {
            StepOutcome::Success(page_source) => self.listing_scraper.extract_entries(&page_source),
            StepOutcome::Absent | StepOutcome::TransportFailure(_) => vec![],
        }
    }

    async fn collect_photo(&mut self, entry: &ListingEntry) -> StepOutcome<PhotoRecord> {
        self.pacer.wait_turn().await;

        match self.fetcher.fetch_page(&entry.detail_page_url).await {
            StepOutcome::Success(page_source) => self
                .detail_scraper
                .extract_details(&page_source)
                .map(|details| PhotoRecord::new(entry, details, &self.category))
                .into(),
            StepOutcome::Absent => StepOutcome::Absent,
            StepOutcome::TransportFailure(e) => StepOutcome::TransportFailure(e),
        }
    }
}
