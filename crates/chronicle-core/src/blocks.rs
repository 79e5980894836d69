//! Article body parsing.
//!
//! Article text is a sequence of blank-line separated segments. A segment
//! wrapped in `**` is a heading, one wrapped in `"` is a pull quote, anything
//! else is a paragraph.

use serde::{Deserialize, Serialize};

const SEGMENT_SEPARATOR: &str = "\n\n";
const HEADING_MARKER: &str = "**";
const QUOTE_MARKER: char = '"';

/// One classified unit of article content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Section heading, markers stripped.
    Heading(String),
    /// Pull quote, quote characters stripped.
    Quote(String),
    /// Body text, unmodified.
    Paragraph(String),
}

impl ContentBlock {
    /// The text carried by this block.
    pub fn text(&self) -> &str {
        match self {
            Self::Heading(text) | Self::Quote(text) | Self::Paragraph(text) => text,
        }
    }
}

/// Split article content into ordered blocks.
///
/// Whitespace-only segments are dropped; kept segments are never trimmed or
/// reordered.
pub fn parse_content(content: &str) -> Vec<ContentBlock> {
    content
        .split(SEGMENT_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .map(classify_segment)
        .collect()
}

/// Classify a single segment.
pub fn classify_segment(segment: &str) -> ContentBlock {
    // Both markers must fit without overlapping, so "**" and "***" stay paragraphs.
    if segment.len() >= 2 * HEADING_MARKER.len()
        && segment.starts_with(HEADING_MARKER)
        && segment.ends_with(HEADING_MARKER)
    {
        let inner = &segment[HEADING_MARKER.len()..segment.len() - HEADING_MARKER.len()];
        return ContentBlock::Heading(inner.to_string());
    }

    if segment.len() >= 2 && segment.starts_with(QUOTE_MARKER) && segment.ends_with(QUOTE_MARKER)
    {
        let inner = &segment[1..segment.len() - 1];
        return ContentBlock::Quote(inner.to_string());
    }

    ContentBlock::Paragraph(segment.to_string())
}
