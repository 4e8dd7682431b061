use async_trait::async_trait;
use reqwest::Client;

use crate::domain::step::StepOutcome;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the body. Failures are logged here and
    /// surface as `TransportFailure`, never as a panic or error.
    async fn fetch_page(&self, url: &str) -> StepOutcome<String>;
}

pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(ReqwestFetcher { client })
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch_page(&self, url: &str) -> StepOutcome<String> {
        let response = match self.client.get(url).send().await {
            Ok(res) => res,
            Err(e) => {
                log::error!("Error fetching {}: {}", url, e);
                return StepOutcome::TransportFailure(e.to_string());
            }
        };

        let response = match response.error_for_status() {
            Ok(res) => res,
            Err(e) => {
                log::error!("Error fetching {}: {}", url, e);
                return StepOutcome::TransportFailure(e.to_string());
            }
        };

        match response.text().await {
            Ok(body) => StepOutcome::Success(body),
            Err(e) => {
                log::error!("Failed to read body from {}. Error: {:?}", url, e);
                StepOutcome::TransportFailure(e.to_string())
            }
        }
    }
}
