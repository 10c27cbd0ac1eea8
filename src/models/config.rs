//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP settings for downloading the bulletin
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Bulletin parsing settings
    #[serde(default)]
    pub parser: ParserConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.fetch.url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "fetch.url must be http(s), got '{}'",
                url.scheme()
            )));
        }
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::validation("fetch.timeout_secs must be > 0"));
        }
        if self.parser.default_region.trim().is_empty() {
            return Err(AppError::validation("parser.default_region is empty"));
        }
        if self.output.wave_template.trim().is_empty() {
            return Err(AppError::validation("output.wave_template is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Bulletin location
    #[serde(default = "defaults::url")]
    pub url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: defaults::url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Layout of the per-direction wave table in the forecast item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletinFormat {
    /// Direction, current period, next period; trend between the two
    #[default]
    Compact,
    /// Direction plus four periods across tonight and tomorrow
    Expanded,
}

impl BulletinFormat {
    /// Minimum `<td>` count for a data row in this layout.
    pub fn min_cells(self) -> usize {
        match self {
            Self::Compact => 3,
            Self::Expanded => 5,
        }
    }
}

/// Bulletin parsing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub format: BulletinFormat,

    /// Region used when the caller does not name one
    #[serde(default = "defaults::region")]
    pub default_region: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            format: BulletinFormat::default(),
            default_region: defaults::region(),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default = "defaults::pretty")]
    pub pretty: bool,

    /// Template for one wave entry in the text summary.
    /// See [`crate::models::WaveHeight::format`] for placeholders.
    #[serde(default = "defaults::wave_template")]
    pub wave_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: defaults::pretty(),
            wave_template: defaults::wave_template(),
        }
    }
}

mod defaults {
    pub fn url() -> String {
        "https://www.weather.gov/source/hfo/xml/SurfState.xml".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; surfstate/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    pub fn region() -> String {
        "Oahu".into()
    }

    pub fn pretty() -> bool {
        true
    }
    pub fn wave_template() -> String {
        "{direction} {height} ft ({trend})".into()
    }
}
