//! Utility functions and helpers.

pub mod html;
pub mod http;

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("float pattern")
});

/// Zone abbreviations chrono's RFC 2822 parser does not know, with their offsets.
const EXTRA_ZONES: &[(&str, &str)] = &[
    ("HST", "-1000"),
    ("HDT", "-0900"),
    ("AKST", "-0900"),
    ("AKDT", "-0800"),
    ("SST", "-1100"),
    ("ChST", "+1000"),
];

/// Uppercase the first character and lowercase the rest ("big island" -> "Big island").
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Parse the longest leading decimal number, ignoring leading whitespace.
///
/// Returns `NaN` when the text does not start with a number, so "5ft" is 5
/// and "flat" is `NaN`.
pub fn parse_float_prefix(text: &str) -> f64 {
    FLOAT_PREFIX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}

/// Split a "min-max" range on the first hyphen. Missing sides are `NaN`.
pub fn parse_range(text: &str) -> (f64, f64) {
    let mut parts = text.split('-');
    let min = parts.next().map_or(f64::NAN, parse_float_prefix);
    let max = parts.next().map_or(f64::NAN, parse_float_prefix);
    (min, max)
}

pub fn midpoint(min: f64, max: f64) -> f64 {
    (min + max) / 2.0
}

/// Parse a feed build date (RFC 2822, RFC 3339, or RFC 2822 with a US zone abbreviation).
pub fn parse_build_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .or_else(|| {
            let (head, zone) = raw.rsplit_once(' ')?;
            let (_, offset) = EXTRA_ZONES.iter().find(|(abbr, _)| *abbr == zone)?;
            DateTime::parse_from_rfc2822(&format!("{head} {offset}")).ok()
        })
}
