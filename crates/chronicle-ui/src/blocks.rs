//! Block renderer.
//!
//! Maps each [`ContentBlock`] to exactly one element. Block text is always
//! inserted as a text node, never as HTML.

use chronicle_core::{ContentBlock, parse_content};
use leptos::prelude::*;

/// Element a block renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockElement {
    Heading,
    Quote,
    Paragraph,
}

impl BlockElement {
    /// HTML tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Heading => "h2",
            Self::Quote => "blockquote",
            Self::Paragraph => "p",
        }
    }
}

/// Presentation of one block: element, class and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMarkup<'a> {
    pub element: BlockElement,
    pub class: &'static str,
    pub text: &'a str,
}

/// Describe how `block` is rendered.
pub fn block_markup(block: &ContentBlock) -> BlockMarkup<'_> {
    let (element, class) = match block {
        ContentBlock::Heading(_) => (BlockElement::Heading, "chronicle-heading"),
        ContentBlock::Quote(_) => (BlockElement::Quote, "chronicle-quote"),
        ContentBlock::Paragraph(_) => (BlockElement::Paragraph, "chronicle-paragraph"),
    };

    BlockMarkup {
        element,
        class,
        text: block.text(),
    }
}

/// A single content block.
#[component]
pub fn ContentBlockView(
    /// The block to render.
    block: ContentBlock,
) -> impl IntoView {
    let BlockMarkup {
        element,
        class,
        text,
    } = block_markup(&block);
    let text = text.to_string();

    match element {
        BlockElement::Heading => view! { <h2 class=class>{text}</h2> }.into_any(),
        BlockElement::Quote => view! { <blockquote class=class>{text}</blockquote> }.into_any(),
        BlockElement::Paragraph => view! { <p class=class>{text}</p> }.into_any(),
    }
}

/// Article body: content text parsed into blocks, rendered in order.
#[component]
pub fn ArticleBody(
    /// Raw article content.
    #[prop(into)]
    content: String,
) -> impl IntoView {
    let blocks = parse_content(&content);

    view! {
      <div class="chronicle-article-body">
        {blocks
          .into_iter()
          .map(|block| view! { <ContentBlockView block=block /> })
          .collect_view()}
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_per_variant() {
        let heading = ContentBlock::Heading("Breaking".to_string());
        let markup = block_markup(&heading);
        assert_eq!(markup.element, BlockElement::Heading);
        assert_eq!(markup.element.tag(), "h2");
        assert_eq!(markup.class, "chronicle-heading");
        assert_eq!(markup.text, "Breaking");

        let quote = ContentBlock::Quote("No comment".to_string());
        assert_eq!(block_markup(&quote).element.tag(), "blockquote");
        assert_eq!(block_markup(&quote).class, "chronicle-quote");

        let paragraph = ContentBlock::Paragraph("Text".to_string());
        assert_eq!(block_markup(&paragraph).element.tag(), "p");
        assert_eq!(block_markup(&paragraph).class, "chronicle-paragraph");
    }

    #[test]
    fn test_one_element_per_block_in_order() {
        let blocks = parse_content("**A**\n\n\"B\"\n\nC");
        let tags: Vec<_> = blocks.iter().map(|b| block_markup(b).element.tag()).collect();
        assert_eq!(tags, vec!["h2", "blockquote", "p"]);
    }

    #[test]
    fn test_markup_keeps_text_verbatim() {
        let block = ContentBlock::Paragraph("<script>alert(1)</script>".to_string());
        assert_eq!(block_markup(&block).text, "<script>alert(1)</script>");
    }
}
