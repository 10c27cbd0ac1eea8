//! Bulletin download service.

use reqwest::Client;

use crate::error::Result;
use crate::models::FetchConfig;
use crate::utils::http::{create_async_client, fetch_text};

/// Downloads the raw bulletin from the forecast office.
pub struct BulletinFetcher {
    client: Client,
    url: String,
}

impl BulletinFetcher {
    /// Create a fetcher with the given HTTP settings.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current bulletin text.
    pub async fn fetch(&self) -> Result<String> {
        log::info!("Fetching bulletin from {}", self.url);
        let text = fetch_text(&self.client, &self.url).await?;
        log::info!("Received bulletin: {} bytes", text.len());
        Ok(text)
    }
}
