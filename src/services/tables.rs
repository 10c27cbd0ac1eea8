//! Wave height table extraction.
//!
//! Both bulletin layouts share the table/row/cell walk and differ only in how
//! a data row turns into entries.

use unicode_segmentation::UnicodeSegmentation;

use crate::models::{BulletinFormat, ForecastDay, TimeOfDay, Trend, WaveHeight};
use crate::utils::html::{find_table, split_cells, split_rows, strip_markup};
use crate::utils::{midpoint, parse_range};

/// Leading `<tr>` rows that carry column headings, not data.
pub const HEADER_ROWS: usize = 3;

/// Expanded layout columns after the direction cell, in table order.
const EXPANDED_PERIODS: [(ForecastDay, TimeOfDay); 4] = [
    (ForecastDay::Tonight, TimeOfDay::Pm),
    (ForecastDay::Tonight, TimeOfDay::Am),
    (ForecastDay::Tomorrow, TimeOfDay::Am),
    (ForecastDay::Tomorrow, TimeOfDay::Pm),
];

/// Extract wave heights from a forecast item's HTML.
///
/// A missing table or short rows are not errors; they just produce fewer entries.
pub fn extract_wave_heights(format: BulletinFormat, html: &str) -> Vec<WaveHeight> {
    let Some(table) = find_table(html) else {
        log::warn!("Forecast item has no wave height table");
        return Vec::new();
    };

    let mut entries = Vec::new();
    for (order, row) in split_rows(table).into_iter().skip(HEADER_ROWS).enumerate() {
        let cells: Vec<String> = split_cells(row).into_iter().map(strip_markup).collect();
        if cells.len() < format.min_cells() {
            log::debug!(
                "Skipping wave row {order}: {} cells, need {}",
                cells.len(),
                format.min_cells()
            );
            continue;
        }

        match format {
            BulletinFormat::Compact => entries.push(compact_entry(&cells, order)),
            BulletinFormat::Expanded => entries.extend(expanded_entries(&cells, order)),
        }
    }

    entries.sort_by_key(|entry| entry.order);
    entries
}

/// Direction initial, first period's range, and the trend into the second period.
fn compact_entry(cells: &[String], order: usize) -> WaveHeight {
    let direction = cells[0].graphemes(true).next().unwrap_or("").to_string();
    let current = &cells[1];
    let next = &cells[2];

    let (min_height, max_height) = parse_range(current);
    let (next_min, next_max) = parse_range(next);
    let trend = Trend::between(
        midpoint(min_height, max_height),
        midpoint(next_min, next_max),
    );

    WaveHeight {
        direction,
        height: current.clone(),
        min_height,
        max_height,
        trend: Some(trend),
        day: None,
        time: None,
        average_height: None,
        order,
    }
}

/// One entry per period column, all sharing the row's order.
fn expanded_entries(cells: &[String], order: usize) -> Vec<WaveHeight> {
    let direction = &cells[0];
    EXPANDED_PERIODS
        .iter()
        .zip(&cells[1..])
        .map(|(&(day, time), height)| {
            let (min_height, max_height) = parse_range(height);
            WaveHeight {
                direction: direction.clone(),
                height: height.clone(),
                min_height,
                max_height,
                trend: None,
                day: Some(day),
                time: Some(time),
                average_height: Some(midpoint(min_height, max_height)),
                order,
            }
        })
        .collect()
}
