//! Pipeline entry points for bulletin operations.
//!
//! - `run_fetch`: Download the raw bulletin
//! - `run_report`: Load a bulletin and parse it into a report
//! - `run_validate`: Check configuration

pub mod fetch;
pub mod report;
pub mod validate;

pub use fetch::run_fetch;
pub use report::{BulletinSource, load_bulletin, render_json, render_text, run_report};
pub use validate::run_validate;
