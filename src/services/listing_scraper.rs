use regex::Regex;
use scraper::{Html, Selector};

use crate::{configuration::PHOTO_ID_PLACEHOLDER, domain::photo::ListingEntry};

pub struct ListingScraper {
    img_selector: Selector,
    photo_id_pattern: Regex,
    image_host: String,
    detail_url_template: String,
}

impl ListingScraper {
    pub fn new(image_host: &str, detail_url_template: &str) -> anyhow::Result<Self> {
        let img_selector = Selector::parse("img[src]")
            .map_err(|e| anyhow::anyhow!("Invalid img selector: {:?}", e))?;
        let photo_id_pattern = Regex::new(r"/(\d+)_")?;

        Ok(ListingScraper {
            img_selector,
            photo_id_pattern,
            image_host: image_host.to_string(),
            detail_url_template: detail_url_template.to_string(),
        })
    }

    /// Returns one entry per hosted `<img>` in document order. Duplicates
    /// are kept; images without a numeric photo id are skipped.
    pub fn extract_entries(&self, page_source: &str) -> Vec<ListingEntry> {
        let html_document = Html::parse_document(page_source);

        html_document
            .select(&self.img_selector)
            .filter_map(|img| img.value().attr("src"))
            .filter(|src| src.contains(&self.image_host))
            .filter_map(|src| {
                let image_url = absolute_image_url(src);
                let photo_id = self.extract_photo_id(&image_url)?;
                let detail_page_url = self.detail_page_url(&photo_id);

                Some(ListingEntry {
                    photo_id,
                    detail_page_url,
                    image_url,
                })
            })
            .collect()
    }

    fn extract_photo_id(&self, image_url: &str) -> Option<String> {
        self.photo_id_pattern
            .captures(image_url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    fn detail_page_url(&self, photo_id: &str) -> String {
        self.detail_url_template
            .replace(PHOTO_ID_PLACEHOLDER, photo_id)
    }
}

fn absolute_image_url(src: &str) -> String {
    match src.starts_with("//") {
        true => format!("https:{}", src),
        false => src.to_string(),
    }
}
