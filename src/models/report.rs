//! Parsed surf report data structures.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Direction of change between two adjacent forecast periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Steady,
}

impl Trend {
    /// Midpoint change beyond which a trend is no longer steady.
    pub const THRESHOLD: f64 = 0.5;

    /// Classify the change from `current` to `next`.
    ///
    /// A `NaN` on either side compares false everywhere and yields `Steady`.
    pub fn between(current: f64, next: f64) -> Self {
        let difference = next - current;
        if difference.abs() > Self::THRESHOLD {
            if difference > 0.0 {
                Self::Increasing
            } else {
                Self::Decreasing
            }
        } else {
            Self::Steady
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Steady => "steady",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastDay {
    Tonight,
    Tomorrow,
}

impl fmt::Display for ForecastDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Tonight => "tonight",
            Self::Tomorrow => "tomorrow",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        })
    }
}

/// One wave height forecast for a shore direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveHeight {
    /// Shore direction ("N", "East", ...)
    pub direction: String,

    /// Range as printed in the bulletin, e.g. "4-6"
    pub height: String,

    pub min_height: f64,
    pub max_height: f64,

    /// Set by the compact layout only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,

    /// Set by the expanded layout only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<ForecastDay>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeOfDay>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_height: Option<f64>,

    /// Zero-based data row index in the source table
    pub order: usize,
}

impl WaveHeight {
    /// Format the entry for display using a template.
    ///
    /// Supported placeholders:
    /// - `{direction}`, `{height}`, `{min}`, `{max}`, `{average}`
    /// - `{trend}`, `{day}`, `{time}`, `{order}`
    ///
    /// Fields the layout does not set render as `-`.
    pub fn format(&self, template: &str) -> String {
        fn or_dash<T: ToString>(value: Option<T>) -> String {
            value.map_or_else(|| "-".to_string(), |v| v.to_string())
        }

        template
            .replace("{direction}", &self.direction)
            .replace("{height}", &self.height)
            .replace("{min}", &self.min_height.to_string())
            .replace("{max}", &self.max_height.to_string())
            .replace("{average}", &or_dash(self.average_height))
            .replace("{trend}", &or_dash(self.trend))
            .replace("{day}", &or_dash(self.day))
            .replace("{time}", &or_dash(self.time))
            .replace("{order}", &self.order.to_string())
    }

    fn is_compact(&self) -> bool {
        self.trend.is_some()
            && self.day.is_none()
            && self.time.is_none()
            && self.average_height.is_none()
    }

    fn is_expanded(&self) -> bool {
        self.trend.is_none()
            && self.day.is_some()
            && self.time.is_some()
            && self.average_height.is_some()
    }
}

/// Per-day conditions block from the forecast item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralDayInfo {
    pub day: String,
    pub weather: String,
    pub temperature: String,
    pub winds: String,
    pub sunrise: String,
    pub sunset: String,
}

impl GeneralDayInfo {
    pub fn has_content(&self) -> bool {
        [
            &self.day,
            &self.weather,
            &self.temperature,
            &self.winds,
            &self.sunrise,
            &self.sunset,
        ]
        .iter()
        .any(|value| !value.is_empty())
    }
}

/// Structured result of parsing one bulletin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfReport {
    /// `lastBuildDate` exactly as published
    pub last_build_date: String,

    /// Parsed build date; `None` when the published string is not a recognised date
    pub last_build_date_object: Option<DateTime<FixedOffset>>,

    pub discussion: Vec<String>,

    pub wave_heights: Vec<WaveHeight>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_day_info: Option<Vec<GeneralDayInfo>>,
}

impl SurfReport {
    /// Whether both reports come from the same bulletin build.
    pub fn has_same_build(&self, other: &SurfReport) -> bool {
        self.last_build_date == other.last_build_date
    }

    /// Check the report against its own contract.
    pub fn validate(&self) -> Result<()> {
        if self.last_build_date.trim().is_empty() {
            return Err(schema_violation("lastBuildDate is empty"));
        }

        if let Some(index) = self.discussion.iter().position(|p| p.trim().is_empty()) {
            return Err(schema_violation(format!(
                "discussion paragraph {index} is empty"
            )));
        }

        if self.wave_heights.windows(2).any(|w| w[0].order > w[1].order) {
            return Err(schema_violation("waveHeights are not sorted by order"));
        }

        let all_compact = self.wave_heights.iter().all(WaveHeight::is_compact);
        let all_expanded = self.wave_heights.iter().all(WaveHeight::is_expanded);
        if !all_compact && !all_expanded {
            return Err(schema_violation(
                "waveHeights mix compact and expanded entries or have missing fields",
            ));
        }

        Ok(())
    }
}

fn schema_violation(message: impl fmt::Display) -> AppError {
    AppError::parse(format!("schema violation: {message}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact_entry(order: usize) -> WaveHeight {
        WaveHeight {
            direction: "N".to_string(),
            height: "3-5".to_string(),
            min_height: 3.0,
            max_height: 5.0,
            trend: Some(Trend::Increasing),
            day: None,
            time: None,
            average_height: None,
            order,
        }
    }

    fn sample_report() -> SurfReport {
        SurfReport {
            last_build_date: "Thu, 16 Oct 2025 15:30:00 -1000".to_string(),
            last_build_date_object: None,
            discussion: vec!["Surf building.".to_string()],
            wave_heights: vec![compact_entry(0), compact_entry(1)],
            general_day_info: None,
        }
    }

    #[test]
    fn test_trend_threshold() {
        assert_eq!(Trend::between(4.0, 4.5), Trend::Steady);
        assert_eq!(Trend::between(4.0, 3.5), Trend::Steady);
        assert_eq!(Trend::between(4.0, 4.51), Trend::Increasing);
        assert_eq!(Trend::between(4.0, 3.49), Trend::Decreasing);
        assert_eq!(Trend::between(4.0, 5.0), Trend::Increasing);
    }

    #[test]
    fn test_trend_nan_is_steady() {
        assert_eq!(Trend::between(f64::NAN, 9.0), Trend::Steady);
        assert_eq!(Trend::between(1.0, f64::NAN), Trend::Steady);
    }

    #[test]
    fn test_format() {
        let entry = compact_entry(2);
        assert_eq!(
            entry.format("{direction} {height} ft ({trend}) #{order}"),
            "N 3-5 ft (increasing) #2"
        );
        assert_eq!(entry.format("{day}/{time}"), "-/-");
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_report().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_paragraph() {
        let mut report = sample_report();
        report.discussion.push("  ".to_string());
        let err = report.validate().unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_validate_rejects_unsorted_and_mixed() {
        let mut report = sample_report();
        report.wave_heights.reverse();
        assert!(report.validate().is_err());

        let mut report = sample_report();
        report.wave_heights[1].trend = None;
        assert!(report.validate().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert!(json.get("lastBuildDate").is_some());
        assert!(json.get("generalDayInfo").is_none());
        let entry = &json["waveHeights"][0];
        assert_eq!(entry["minHeight"], 3.0);
        assert_eq!(entry["trend"], "increasing");
        assert!(entry.get("averageHeight").is_none());
    }

    #[test]
    fn test_has_same_build() {
        let a = sample_report();
        let mut b = sample_report();
        b.discussion.clear();
        assert!(a.has_same_build(&b));
        b.last_build_date = "Fri, 17 Oct 2025 06:00:00 -1000".to_string();
        assert!(!a.has_same_build(&b));
    }
}
