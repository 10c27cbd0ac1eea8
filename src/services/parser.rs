// src/services/parser.rs

//! Bulletin parser service.
//!
//! Turns one raw `SurfState.xml` document into a [`SurfReport`]. Parsing is
//! pure: no I/O, no shared state, safe to call from any thread.

use crate::error::{AppError, Result};
use crate::models::{BulletinFormat, Feed, ParserConfig, SurfReport};
use crate::services::day_info::extract_general_day_info;
use crate::services::tables::extract_wave_heights;
use crate::utils::html::extract_paragraphs;
use crate::utils::{capitalize_first, parse_build_date};

/// Title of the free-text analyst commentary item.
pub const DISCUSSION_TITLE: &str = "Discussion";

/// Feed item title for a region's forecast ("big island" -> "Forecast for Big island").
pub fn forecast_title(region: &str) -> String {
    format!("Forecast for {}", capitalize_first(region))
}

/// Parser for the surf bulletin feed.
#[derive(Debug, Clone)]
pub struct BulletinParser {
    format: BulletinFormat,
    default_region: String,
}

impl BulletinParser {
    pub fn new(format: BulletinFormat, default_region: impl Into<String>) -> Self {
        Self {
            format,
            default_region: default_region.into(),
        }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.format, config.default_region.clone())
    }

    /// Parse a bulletin for `region`, or for the default region when `None`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Parse`] if the feed cannot be decoded or the result is inconsistent
    /// - [`AppError::NotFound`] if the region's forecast or the discussion item is missing
    pub fn parse(&self, xml: &str, region: Option<&str>) -> Result<SurfReport> {
        let feed: Feed = quick_xml::de::from_str(xml)?;
        let channel = feed.channel;

        let region = region.unwrap_or(&self.default_region);
        let forecast = channel
            .find_item(&forecast_title(region))
            .ok_or_else(|| AppError::region_not_found(region))?;
        let discussion = channel
            .find_item(DISCUSSION_TITLE)
            .ok_or_else(|| AppError::section_not_found(DISCUSSION_TITLE))?;

        let forecast_html = forecast.description.trim();
        let wave_heights = extract_wave_heights(self.format, forecast_html);
        let general_day_info = match self.format {
            BulletinFormat::Compact => Some(extract_general_day_info(forecast_html)),
            BulletinFormat::Expanded => None,
        };
        let discussion = extract_paragraphs(discussion.description.trim());

        let last_build_date = channel
            .last_build_date
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        let last_build_date_object = parse_build_date(&last_build_date);
        if last_build_date_object.is_none() {
            log::warn!("Unrecognised lastBuildDate '{last_build_date}'");
        }

        let report = SurfReport {
            last_build_date,
            last_build_date_object,
            discussion,
            wave_heights,
            general_day_info,
        };
        report.validate()?;

        log::debug!(
            "Parsed {} report for {}: {} wave entries, {} discussion paragraphs",
            match self.format {
                BulletinFormat::Compact => "compact",
                BulletinFormat::Expanded => "expanded",
            },
            region,
            report.wave_heights.len(),
            report.discussion.len()
        );

        Ok(report)
    }
}

impl Default for BulletinParser {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}
