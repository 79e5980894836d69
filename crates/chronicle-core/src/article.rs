//! Article types as returned by the article API.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Characters of content shown under the hero headline.
pub const HERO_EXCERPT_CHARS: usize = 250;

/// Characters of content shown on a listing card.
pub const CARD_EXCERPT_CHARS: usize = 120;

/// Opaque article identifier issued by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArticleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ArticleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Publication status of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Waiting for admin approval.
    #[default]
    Draft,
    /// Visible on the public feed.
    Published,
    /// Any status this client does not know about.
    #[serde(other)]
    Unknown,
}

/// An article as served by the API.
///
/// Copies are transient: the API is the source of truth and every page
/// fetches its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier.
    pub id: ArticleId,

    /// Headline.
    pub headline: String,

    /// Raw body text; see [`crate::blocks::parse_content`].
    pub content: String,

    /// Byline.
    pub author: String,

    /// Publication status.
    #[serde(default)]
    pub status: ArticleStatus,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Category, when the API reports one.
    #[serde(default)]
    pub category: Option<String>,
}

impl Article {
    /// Whether this article is still waiting for approval.
    pub fn is_draft(&self) -> bool {
        self.status == ArticleStatus::Draft
    }

    /// The first `max_chars` characters of the content, with `...` appended
    /// when anything was cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        match self.content.char_indices().nth(max_chars) {
            Some((end, _)) => format!("{}...", &self.content[..end]),
            None => self.content.clone(),
        }
    }

    /// Creation date formatted for display, e.g. "July 8, 2025".
    pub fn display_date(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }

    /// Representational cover image for the detail page.
    pub fn cover_image_url(&self) -> String {
        format!("https://picsum.photos/seed/{}/1200/600", self.id)
    }

    /// Client-side route of the detail page.
    pub fn url_path(&self) -> String {
        format!("/article/{}", self.id)
    }
}

/// Title of a listing page, depending on the active category filter.
pub fn listing_title(category: Option<&str>) -> String {
    match category {
        Some(category) if !category.trim().is_empty() => format!("{category} News"),
        _ => "Top Stories".to_string(),
    }
}

/// Href of the listing filtered to `category`, with the value percent-encoded.
pub fn category_href(category: &str) -> String {
    format!("/?category={}", urlencoding::encode(category))
}
