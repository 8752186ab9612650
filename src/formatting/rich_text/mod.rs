// src/formatting/rich_text/mod.rs
//! Flattens Notion rich text arrays into inline Markdown.

mod annotations;

use crate::types::RichTextItem;
use annotations::MarkdownStyleRenderer;

/// Formats an array of rich text items into inline Markdown.
///
/// Each segment starts from its `plain_text`, gets its annotation markers,
/// and is wrapped in a link when it has an `href`. Segments are concatenated
/// without separators. Mentions and equations render as their plain text.
pub fn extract_rich_text(items: &[RichTextItem]) -> String {
    items.iter().map(format_single_item).collect()
}

fn format_single_item(item: &RichTextItem) -> String {
    let styled = MarkdownStyleRenderer::apply_styles(&item.plain_text, &item.annotations);
    match item.href.as_deref() {
        Some(href) if !href.is_empty() => MarkdownStyleRenderer::apply_link(&styled, href),
        _ => styled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Annotations;
    use pretty_assertions::assert_eq;

    fn bold() -> Annotations {
        Annotations {
            bold: true,
            ..Annotations::default()
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_rich_text(&[]), "");
    }

    #[test]
    fn test_plain_segments_concatenate() {
        let items = vec![
            RichTextItem::plain_text("Hello, "),
            RichTextItem::plain_text("world"),
        ];
        assert_eq!(extract_rich_text(&items), "Hello, world");
    }

    #[test]
    fn test_bold() {
        let items = vec![RichTextItem::plain_text("Bold").with_annotations(bold())];
        assert_eq!(extract_rich_text(&items), "**Bold**");
    }

    #[test]
    fn test_bold_italic() {
        let annotations = Annotations {
            bold: true,
            italic: true,
            ..Annotations::default()
        };
        let items = vec![RichTextItem::plain_text("Multi").with_annotations(annotations)];
        assert_eq!(extract_rich_text(&items), "***Multi***");
    }

    #[test]
    fn test_link_wraps_styled_text() {
        let items = vec![RichTextItem::plain_text("Bold Link")
            .with_annotations(bold())
            .with_href("https://example.com")];
        assert_eq!(
            extract_rich_text(&items),
            "[**Bold Link**](https://example.com)"
        );
    }

    #[test]
    fn test_code_inside_strikethrough() {
        let annotations = Annotations {
            code: true,
            strikethrough: true,
            ..Annotations::default()
        };
        let items = vec![RichTextItem::plain_text("gone()").with_annotations(annotations)];
        assert_eq!(extract_rich_text(&items), "~~`gone()`~~");
    }

    #[test]
    fn test_underline_and_color_are_ignored() {
        let annotations = Annotations {
            underline: true,
            color: crate::types::Color::Red,
            ..Annotations::default()
        };
        let items = vec![RichTextItem::plain_text("quiet").with_annotations(annotations)];
        assert_eq!(extract_rich_text(&items), "quiet");
    }

    #[test]
    fn test_missing_plain_text_renders_empty() {
        let item: RichTextItem = serde_json::from_value(serde_json::json!({
            "type": "mention",
            "mention": { "type": "user", "user": { "id": "u1" } },
            "annotations": { "bold": true }
        }))
        .unwrap();
        assert_eq!(extract_rich_text(&[item]), "****");
    }
}
