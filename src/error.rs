// src/error.rs

//! Unified error handling for the surf bulletin tools.

use thiserror::Error;

/// Result type alias for bulletin operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required feed item is absent from the bulletin.
    /// `target` is the region or item title that was looked up.
    #[error("{message}")]
    NotFound { target: String, message: String },

    /// The bulletin could not be decoded, or the parsed report is inconsistent
    #[error("Parse error: {0}")]
    Parse(String),

    /// Upstream answered with a non-success status
    #[error("NOAA fetch failed: {status} {reason}")]
    Fetch { status: u16, reason: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an error for a missing region forecast.
    pub fn region_not_found(region: impl Into<String>) -> Self {
        let region = region.into();
        Self::NotFound {
            message: format!("No forecast found for {region}"),
            target: region,
        }
    }

    /// Create an error for a missing named feed item.
    pub fn section_not_found(section: impl Into<String>) -> Self {
        let section = section.into();
        Self::NotFound {
            message: format!("No {section} item in bulletin"),
            target: section,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<quick_xml::DeError> for AppError {
    fn from(err: quick_xml::DeError) -> Self {
        Self::Parse(format!("malformed bulletin feed: {err}"))
    }
}
