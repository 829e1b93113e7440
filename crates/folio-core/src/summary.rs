//! Blog post summary records.

use serde::{Deserialize, Serialize};

/// The minimal data needed to render one blog list entry.
///
/// Records are supplied fresh per render; nothing here is cached or
/// mutated by the components that display them. The wire form uses
/// camelCase field names (`publishedAt`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    /// URL-safe identifier; the article lives at `/blog/{slug}`.
    pub slug: String,

    /// Display title.
    pub title: String,

    /// ISO-8601 publication timestamp.
    pub published_at: String,

    /// Total view count.
    #[serde(default)]
    pub views: u64,
}

impl BlogSummary {
    /// Create a new summary record with zero views.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            published_at: published_at.into(),
            views: 0,
        }
    }

    /// Set the view count.
    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    /// Path the article preview links to.
    pub fn link(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}
