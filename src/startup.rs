use std::path::Path;

use crate::{
    configuration::Settings,
    dal::photo_file::{save_photos, SaveResult},
    services::{
        DetailScraper, ListingScraper, PageFetcher, PhotoHarvester, ReqwestFetcher, RequestPacer,
    },
};

pub fn build_harvester<F: PageFetcher>(
    fetcher: F,
    configuration: &Settings,
) -> anyhow::Result<PhotoHarvester<F>> {
    let listing_scraper = ListingScraper::new(
        &configuration.source.image_host,
        &configuration.source.detail_url_template,
    )?;
    let detail_scraper = DetailScraper::from_settings(&configuration.selectors)?;
    let pacer = RequestPacer::new(configuration.harvest.request_interval());

    Ok(PhotoHarvester::new(
        fetcher,
        listing_scraper,
        detail_scraper,
        pacer,
        configuration.harvest.category.clone(),
    ))
}

/// One full pass: listing, details, then a single write at the end.
pub async fn run(configuration: Settings) -> anyhow::Result<SaveResult> {
    let fetcher = ReqwestFetcher::new(&configuration.source.user_agent)?;
    run_with(fetcher, &configuration).await
}

pub async fn run_with<F: PageFetcher>(
    fetcher: F,
    configuration: &Settings,
) -> anyhow::Result<SaveResult> {
    let mut harvester = build_harvester(fetcher, configuration)?;
    let harvest = harvester.harvest(&configuration.source.listing_url).await;

    let report = &harvest.report;
    log::info!(
        "Collected {} of {} photos | {} fetch failures, {} incomplete pages",
        report.collected,
        report.listed,
        report.fetch_failures,
        report.incomplete
    );

    save_photos(
        &harvest.records,
        Path::new(&configuration.output.path),
        configuration.output.format,
    )
}
