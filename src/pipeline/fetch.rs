// src/pipeline/fetch.rs

//! Raw bulletin download.

use std::path::Path;

use crate::error::Result;
use crate::models::Config;
use crate::services::BulletinFetcher;

/// Download the bulletin, optionally saving it to `output`.
pub async fn run_fetch(config: &Config, output: Option<&Path>) -> Result<String> {
    let fetcher = BulletinFetcher::new(&config.fetch)?;
    let xml = fetcher.fetch().await?;

    if let Some(path) = output {
        tokio::fs::write(path, &xml).await?;
        log::info!("Bulletin saved to {}", path.display());
    }

    Ok(xml)
}
