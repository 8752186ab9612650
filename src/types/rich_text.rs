use super::lenient::null_as_default;
use super::Color;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of a rich text segment.
///
/// Rendering only relies on `plain_text`, so the kind is informational;
/// unknown kinds are kept as `Other` instead of rejecting the segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RichTextKind {
    #[default]
    Text,
    Mention,
    Equation,
    Other,
}

impl<'de> Deserialize<'de> for RichTextKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            None | Some("text") => RichTextKind::Text,
            Some("mention") => RichTextKind::Mention,
            Some("equation") => RichTextKind::Equation,
            Some(_) => RichTextKind::Other,
        })
    }
}

/// Rich text item with formatting annotations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichTextItem {
    #[serde(rename = "type", default)]
    pub kind: RichTextKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equation: Option<EquationData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annotations: Annotations,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichTextItem {
    /// Create a plain text item, the most common rich text variant.
    pub fn plain_text(text: &str) -> Self {
        Self {
            kind: RichTextKind::Text,
            text: Some(TextContent {
                content: text.to_string(),
                link: None,
            }),
            plain_text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquationData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default, deserialize_with = "null_as_default")]
    pub bold: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub italic: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strikethrough: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub underline: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: bool,
    #[serde(default)]
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_rich_text_item_deserializes() {
        let item: RichTextItem = serde_json::from_value(serde_json::json!({
            "type": "text",
            "text": { "content": "Hello", "link": null },
            "annotations": {
                "bold": true, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "red"
            },
            "plain_text": "Hello",
            "href": null
        }))
        .unwrap();

        assert_eq!(item.kind, RichTextKind::Text);
        assert_eq!(item.plain_text, "Hello");
        assert!(item.annotations.bold);
        assert_eq!(item.annotations.color, Color::Red);
        assert_eq!(item.href, None);
    }

    #[test]
    fn test_sparse_rich_text_item_uses_defaults() {
        let item: RichTextItem =
            serde_json::from_value(serde_json::json!({ "plain_text": null, "type": "emoji_soup" }))
                .unwrap();

        assert_eq!(item.kind, RichTextKind::Other);
        assert_eq!(item.plain_text, "");
        assert_eq!(item.annotations, Annotations::default());
    }
}
