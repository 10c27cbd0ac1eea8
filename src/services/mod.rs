//! Service layer for the surf bulletin tools.
//!
//! This module contains the business logic for:
//! - Bulletin download (`BulletinFetcher`)
//! - Bulletin parsing (`BulletinParser`)

mod day_info;
mod fetcher;
mod parser;
mod tables;

pub use day_info::extract_general_day_info;
pub use fetcher::BulletinFetcher;
pub use parser::{BulletinParser, DISCUSSION_TITLE, forecast_title};
pub use tables::{HEADER_ROWS, extract_wave_heights};
