use std::{path::Path, time::Duration};

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use url::Url;

const DEFAULT_LISTING_URL: &str = "https://www.flickr.com/photos/201748906@N08/with/54260070380/";
const DEFAULT_DETAIL_URL_TEMPLATE: &str =
    "https://www.flickr.com/photos/201748906@N08/{photo_id}/in/dateposted-public/";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const PHOTO_ID_PLACEHOLDER: &str = "{photo_id}";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub source: SourceSettings,
    pub selectors: SelectorSettings,
    pub harvest: HarvestSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    pub listing_url: String,
    /// Substring an `<img src>` must contain to count as a hosted photo.
    pub image_host: String,
    /// Detail page URL with `{photo_id}` in place of the photo identifier.
    pub detail_url_template: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectorSettings {
    pub title: String,
    pub description: String,
    pub date_taken: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarvestSettings {
    pub category: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub request_interval_ms: u64,
}

impl HarvestSettings {
    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.request_interval_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    pub path: String,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    get_configuration_from(Path::new("configuration"))
}

/// Defaults, then `<dir>/base.yaml` if present, then `APP_*` environment variables.
pub fn get_configuration_from(configuration_directory: &Path) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("source.listing_url", DEFAULT_LISTING_URL)?
        .set_default("source.image_host", "staticflickr.com")?
        .set_default("source.detail_url_template", DEFAULT_DETAIL_URL_TEMPLATE)?
        .set_default("source.user_agent", DEFAULT_USER_AGENT)?
        .set_default("selectors.title", ".photo-title")?
        .set_default("selectors.description", ".photo-desc")?
        .set_default("selectors.date_taken", ".date-taken-label")?
        .set_default("harvest.category", "street")?
        .set_default("harvest.request_interval_ms", 1000_i64)?
        .set_default("output.path", "flickr_photos_supabase.csv")?
        .set_default("output.format", "csv")?
        .add_source(
            config::File::from(configuration_directory.join("base.yaml")).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let settings = settings.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}

impl Settings {
    fn validate(&self) -> Result<(), config::ConfigError> {
        if let Err(e) = Url::parse(&self.source.listing_url) {
            return Err(config::ConfigError::Message(format!(
                "source.listing_url {:?} is not a valid url: {}",
                self.source.listing_url, e
            )));
        }

        match self.source.detail_url_template.contains(PHOTO_ID_PLACEHOLDER) {
            true => Ok(()),
            false => Err(config::ConfigError::Message(format!(
                "source.detail_url_template must contain {}",
                PHOTO_ID_PLACEHOLDER
            ))),
        }
    }
}
