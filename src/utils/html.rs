// src/utils/html.rs

//! Pattern-based extraction over the HTML embedded in bulletin items.
//!
//! The bulletin's markup is small, machine-generated and stable, so each
//! step is a targeted regex rather than a full DOM walk. Every function is
//! pure and independent so a layout change upstream only touches one of them.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

static TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<table[^>]*>.*?</table>").expect("table pattern"));
static ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<tr.*?</tr>").expect("row pattern"));
static CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<td[^>]*>(.*?)</td>").expect("cell pattern"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>(.*?)</p>").expect("paragraph pattern"));
static DIV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<div[^>]*>.*?</div>").expect("div pattern"));
static DAY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<span[^>]*><strong>(.*?)</strong>").expect("day label pattern")
});

/// First `<table>...</table>` block, tags included.
pub fn find_table(html: &str) -> Option<&str> {
    TABLE.find(html).map(|m| m.as_str())
}

/// Every `<tr>...</tr>` block in document order.
pub fn split_rows(table: &str) -> Vec<&str> {
    ROW.find_iter(table).map(|m| m.as_str()).collect()
}

/// Inner content of every single-line `<td>...</td>` in a row.
pub fn split_cells(row: &str) -> Vec<&str> {
    CELL.captures_iter(row)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Remove all tags, decode entities, trim.
pub fn strip_markup(html: &str) -> String {
    let text = TAG.replace_all(html, "");
    decode_entities(&text).trim().to_string()
}

/// Decode HTML character references (`&amp;`, `&#39;`, `&nbsp;`, ...).
///
/// A bare `<` is kept as text rather than read as the start of a tag.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    Html::parse_fragment(&text.replace('<', "&lt;"))
        .root_element()
        .text()
        .collect()
}

/// Plain text of every `<p>` paragraph, empty ones dropped.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    PARAGRAPH
        .find_iter(html)
        .map(|m| strip_markup(m.as_str()))
        .filter(|p| !p.is_empty())
        .collect()
}

/// Every `<div>...</div>` block, non-greedy (an inner `</div>` ends the block).
pub fn split_divs(html: &str) -> Vec<&str> {
    DIV.find_iter(html).map(|m| m.as_str()).collect()
}

/// Text of the first `<span><strong>LABEL</strong>` in a section.
pub fn day_label(section: &str) -> Option<&str> {
    DAY_LABEL
        .captures(section)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Value of the `<td>` that follows the `<th>` containing `label`.
///
/// Returns an empty string when the label is absent.
pub fn labeled_cell(section: &str, label: &str) -> String {
    let pattern = format!(r"{}[^>]*</th><td[^>]*>(.*?)</td>", regex::escape(label));
    Regex::new(&pattern)
        .ok()
        .and_then(|re| {
            re.captures(section)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
        .unwrap_or_default()
}
