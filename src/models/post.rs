use serde::{Deserialize, Serialize};

use super::parse_date;

/// A blog/news post. `slug` is the URL segment for the detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "featuredImage")]
    pub featured_image: Option<String>,
    pub date: Option<String>,
    pub slug: String,
}

impl Post {
    /// Publish date formatted for listings, raw string when unparsable.
    pub fn formatted_date(&self) -> Option<String> {
        self.date.as_deref().map(|raw| match parse_date(raw) {
            Some(d) => d.format("%B %-d, %Y").to_string(),
            None => raw.to_string(),
        })
    }
}
