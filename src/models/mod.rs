// src/models/mod.rs

//! Domain models for the surf bulletin tools.

mod config;
mod feed;
mod report;

// Re-export all public types
pub use config::{BulletinFormat, Config, FetchConfig, OutputConfig, ParserConfig};
pub use feed::{Channel, Feed, FeedItem};
pub use report::{ForecastDay, GeneralDayInfo, SurfReport, TimeOfDay, Trend, WaveHeight};
