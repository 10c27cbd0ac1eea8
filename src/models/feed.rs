//! Outer RSS structure of the bulletin.

use serde::Deserialize;

/// `<rss>` document root.
#[derive(Debug, Deserialize)]
pub struct Feed {
    pub channel: Channel,
}

/// `<channel>` element. Only the fields the parser reads are mapped.
#[derive(Debug, Deserialize)]
pub struct Channel {
    #[serde(rename = "lastBuildDate", default)]
    pub last_build_date: Option<String>,

    #[serde(rename = "item", default)]
    pub items: Vec<FeedItem>,
}

impl Channel {
    /// First item whose trimmed title equals `title`.
    pub fn find_item(&self, title: &str) -> Option<&FeedItem> {
        self.items.iter().find(|item| item.title.trim() == title)
    }
}

/// `<item>` element. `description` carries the embedded HTML payload.
#[derive(Debug, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,
}
