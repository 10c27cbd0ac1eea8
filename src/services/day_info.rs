//! General day conditions (weather, winds, sun times) from the forecast item.

use crate::models::GeneralDayInfo;
use crate::utils::html::{day_label, labeled_cell, split_divs};

/// One record per `<div>` that carries a `<strong>` day label and any content.
pub fn extract_general_day_info(html: &str) -> Vec<GeneralDayInfo> {
    split_divs(html)
        .into_iter()
        .filter_map(|section| {
            let day = day_label(section)?;
            let info = GeneralDayInfo {
                day: day.to_string(),
                weather: labeled_cell(section, "Weather"),
                temperature: labeled_cell(section, "Temperature"),
                winds: labeled_cell(section, "Winds"),
                sunrise: labeled_cell(section, "Sunrise"),
                sunset: labeled_cell(section, "Sunset"),
            };
            info.has_content().then_some(info)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_labeled_fields() {
        let html = "<div class=\"day\"><span><strong>Friday</strong></span><table>\
                    <tr><th>Weather</th><td>Sunny</td></tr>\
                    <tr><th>Temperature</th><td>High 86</td></tr>\
                    <tr><th>Winds</th><td>NE 15 mph</td></tr>\
                    <tr><th>Sunrise</th><td>6:25 AM</td></tr>\
                    <tr><th>Sunset</th><td>6:10 PM</td></tr></table></div>";
        let info = extract_general_day_info(html);

        assert_eq!(
            info,
            vec![GeneralDayInfo {
                day: "Friday".to_string(),
                weather: "Sunny".to_string(),
                temperature: "High 86".to_string(),
                winds: "NE 15 mph".to_string(),
                sunrise: "6:25 AM".to_string(),
                sunset: "6:10 PM".to_string(),
            }]
        );
    }

    #[test]
    fn test_divs_without_day_label_ignored() {
        let html = "<div><table><tr><th>Weather</th><td>Sunny</td></tr></table></div>";
        assert!(extract_general_day_info(html).is_empty());
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let html = "<div><span><strong>Tonight</strong></span><table><tr><th>Winds</th><td>E 10</td></tr></table></div>\n<div>footer</div>";
        let info = extract_general_day_info(html);
        assert_eq!(info.len(), 1);
        assert_eq!(info[0].winds, "E 10");
        assert_eq!(info[0].weather, "");
    }

    #[test]
    fn test_empty_record_dropped() {
        let html = "<div><span><strong></strong></span></div>";
        assert!(extract_general_day_info(html).is_empty());
    }
}
