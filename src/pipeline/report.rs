// src/pipeline/report.rs

//! Fetch-then-parse pipeline and report rendering.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::{Config, SurfReport};
use crate::services::{BulletinFetcher, BulletinParser};

/// Where the bulletin text comes from.
#[derive(Debug, Clone)]
pub enum BulletinSource {
    /// Download from `fetch.url`
    Remote,
    /// Read a previously saved bulletin
    File(PathBuf),
}

/// Load the raw bulletin text.
pub async fn load_bulletin(config: &Config, source: &BulletinSource) -> Result<String> {
    match source {
        BulletinSource::Remote => BulletinFetcher::new(&config.fetch)?.fetch().await,
        BulletinSource::File(path) => {
            log::info!("Reading bulletin from {}", path.display());
            Ok(tokio::fs::read_to_string(path).await?)
        }
    }
}

/// Load and parse a bulletin for `region` (default region when `None`).
pub async fn run_report(
    config: &Config,
    source: &BulletinSource,
    region: Option<&str>,
) -> Result<SurfReport> {
    let xml = load_bulletin(config, source).await?;
    let parser = BulletinParser::from_config(&config.parser);
    let report = parser.parse(&xml, region)?;

    log::info!(
        "Parsed report built {}: {} wave entries, {} discussion paragraphs",
        report.last_build_date,
        report.wave_heights.len(),
        report.discussion.len()
    );

    Ok(report)
}

/// Serialize a report as JSON.
pub fn render_json(report: &SurfReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Human-readable summary, one wave entry per line via `wave_template`.
pub fn render_text(report: &SurfReport, wave_template: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Surf report (built {})", report.last_build_date);

    let _ = writeln!(out, "\nWave heights:");
    if report.wave_heights.is_empty() {
        let _ = writeln!(out, "    (none)");
    }
    for wave in &report.wave_heights {
        let _ = writeln!(out, "    {}", wave.format(wave_template));
    }

    if let Some(days) = report.general_day_info.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "\nConditions:");
        for day in days {
            let _ = writeln!(
                out,
                "    {}: {} | {} | {} | sunrise {} | sunset {}",
                day.day, day.weather, day.temperature, day.winds, day.sunrise, day.sunset
            );
        }
    }

    let _ = writeln!(out, "\nDiscussion:");
    for paragraph in &report.discussion {
        let _ = writeln!(out, "    {paragraph}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ForecastDay, GeneralDayInfo, TimeOfDay, Trend, WaveHeight};
    use std::io::Write;

    const BULLETIN: &str = "<?xml version=\"1.0\"?>\n<rss version=\"2.0\"><channel>\
        <lastBuildDate>Thu, 16 Oct 2025 15:30:00 -1000</lastBuildDate>\
        <item><title>Forecast for Oahu</title><description><![CDATA[<table>\
        <tr><th>a</th></tr><tr><th>b</th></tr><tr><th>c</th></tr>\
        <tr><td>North</td><td>3-5</td><td>4-6</td></tr></table>]]></description></item>\
        <item><title>Discussion</title><description><![CDATA[<p>Surf building.</p><p></p><p>  </p>]]></description></item>\
        </channel></rss>";

    fn sample_report() -> SurfReport {
        SurfReport {
            last_build_date: "Thu, 16 Oct 2025 15:30:00 -1000".to_string(),
            last_build_date_object: None,
            discussion: vec!["Surf building.".to_string()],
            wave_heights: vec![WaveHeight {
                direction: "N".to_string(),
                height: "3-5".to_string(),
                min_height: 3.0,
                max_height: 5.0,
                trend: Some(Trend::Increasing),
                day: None,
                time: None,
                average_height: None,
                order: 0,
            }],
            general_day_info: None,
        }
    }

    #[tokio::test]
    async fn test_run_report_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BULLETIN.as_bytes()).unwrap();

        let source = BulletinSource::File(file.path().to_path_buf());
        let report = run_report(&Config::default(), &source, None).await.unwrap();

        assert_eq!(report.wave_heights.len(), 1);
        assert_eq!(report.wave_heights[0].direction, "N");
        assert_eq!(report.discussion, vec!["Surf building."]);
    }

    #[tokio::test]
    async fn test_run_report_missing_file() {
        let source = BulletinSource::File(PathBuf::from("/nonexistent/SurfState.xml"));
        let result = run_report(&Config::default(), &source, None).await;
        assert!(matches!(result, Err(crate::error::AppError::Io(_))));
    }

    #[test]
    fn test_render_json_compact() {
        let json = render_json(&sample_report(), false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"waveHeights\""));
        assert!(json.contains("\"trend\":\"increasing\""));
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_report(), "{direction} {height} ft ({trend})");
        assert!(text.starts_with("Surf report (built Thu, 16 Oct 2025 15:30:00 -1000)"));
        assert!(text.contains("    N 3-5 ft (increasing)"));
        assert!(text.contains("    Surf building."));
        assert!(!text.contains("Conditions:"));
    }

    #[test]
    fn test_render_text_expanded_with_conditions() {
        let mut report = sample_report();
        report.wave_heights = vec![
            WaveHeight {
                direction: "North Facing".to_string(),
                height: "3-5".to_string(),
                min_height: 3.0,
                max_height: 5.0,
                trend: None,
                day: Some(ForecastDay::Tonight),
                time: Some(TimeOfDay::Pm),
                average_height: Some(4.0),
                order: 0,
            },
            WaveHeight {
                direction: "North Facing".to_string(),
                height: "5-7".to_string(),
                min_height: 5.0,
                max_height: 7.0,
                trend: None,
                day: Some(ForecastDay::Tomorrow),
                time: Some(TimeOfDay::Am),
                average_height: Some(6.0),
                order: 0,
            },
        ];
        report.general_day_info = Some(vec![GeneralDayInfo {
            day: "Tonight".to_string(),
            weather: "Partly cloudy".to_string(),
            temperature: "Low 73".to_string(),
            winds: "East 10 mph".to_string(),
            sunrise: "6:25 AM".to_string(),
            sunset: "6:10 PM".to_string(),
        }]);

        let text = render_text(&report, "{direction} {day} {time}: {height} ft (avg {average}, {trend})");
        assert!(text.contains("    North Facing tonight PM: 3-5 ft (avg 4, -)"));
        assert!(text.contains("    North Facing tomorrow AM: 5-7 ft (avg 6, -)"));
        assert!(text.contains("\nConditions:\n"));
        assert!(text.contains(
            "    Tonight: Partly cloudy | Low 73 | East 10 mph | sunrise 6:25 AM | sunset 6:10 PM"
        ));
    }
}
