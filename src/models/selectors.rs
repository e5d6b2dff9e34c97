// src/models/selectors.rs

//! CSS selectors for scraping the portal's markup.

use serde::{Deserialize, Serialize};

/// CSS selectors for the listing fragment and the detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortalSelectors {
    /// Selector for each data-carrying list item in the feed.
    /// Entries come as `<li>` pairs; the second one holds the fields.
    #[serde(default = "default_item")]
    pub item_selector: String,

    /// Selector for the primary anchor within an item
    #[serde(default = "default_anchor")]
    pub anchor_selector: String,

    /// Selector for the rich-content container on the detail page
    #[serde(default = "default_content")]
    pub content_selector: String,
}

fn default_item() -> String {
    ".resultBox li:nth-of-type(2)".to_string()
}

fn default_anchor() -> String {
    ".site-link".to_string()
}

fn default_content() -> String {
    ".bbsview .textviewer".to_string()
}

impl Default for PortalSelectors {
    fn default() -> Self {
        Self {
            item_selector: default_item(),
            anchor_selector: default_anchor(),
            content_selector: default_content(),
        }
    }
}

impl PortalSelectors {
    /// All selector strings paired with their field names.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("item_selector", self.item_selector.as_str()),
            ("anchor_selector", self.anchor_selector.as_str()),
            ("content_selector", self.content_selector.as_str()),
        ]
    }
}
