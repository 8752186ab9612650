// src/formatting/rich_text/annotations.rs
//! Annotation processing for rich text.

use crate::types::Annotations;

/// Renderer for text styles to Markdown.
pub struct MarkdownStyleRenderer;

impl MarkdownStyleRenderer {
    /// Wraps `content` in Markdown markers, innermost first: code, bold,
    /// italic, strikethrough. Underline and color have no Markdown form.
    pub fn apply_styles(content: &str, annotations: &Annotations) -> String {
        let mut result = content.to_string();

        if annotations.code {
            result = format!("`{}`", result);
        }

        if annotations.bold {
            result = format!("**{}**", result);
        }

        if annotations.italic {
            result = format!("*{}*", result);
        }

        if annotations.strikethrough {
            result = format!("~~{}~~", result);
        }

        result
    }

    /// Wraps already-styled text in a Markdown link.
    pub fn apply_link(content: &str, href: &str) -> String {
        format!("[{}]({})", content, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_nest_in_fixed_order() {
        let all = Annotations {
            bold: true,
            italic: true,
            strikethrough: true,
            code: true,
            underline: true,
            ..Annotations::default()
        };
        assert_eq!(
            MarkdownStyleRenderer::apply_styles("x", &all),
            "~~***`x`***~~"
        );
    }

    #[test]
    fn test_no_styles_is_identity() {
        assert_eq!(
            MarkdownStyleRenderer::apply_styles("plain", &Annotations::default()),
            "plain"
        );
    }
}
