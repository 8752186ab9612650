//! Per-type block payloads.
//!
//! Each `*Content` type deserializes from the object stored under the
//! block's type key (e.g. `block["to_do"]`); each `*Block` type pairs that
//! payload with the [`BlockCommon`] fields read from the block itself.

use super::common::BlockCommon;
use crate::types::lenient::{cells_or_none, null_as_default, ok_or_none, rich_text_or_empty};
use crate::types::{BlockId, Color, EquationData, RichTextItem, UrlValue};
use serde::Deserialize;

/// Text content shared by paragraphs, headings, list items, toggles, quotes and templates
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TextBlockContent {
    #[serde(default, deserialize_with = "rich_text_or_empty")]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ToDoContent {
    #[serde(default, deserialize_with = "rich_text_or_empty")]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checked: bool,
    #[serde(default)]
    pub color: Color,
}

/// To-do block
#[derive(Debug, Clone, PartialEq)]
pub struct ToDoBlock {
    pub common: BlockCommon,
    pub content: ToDoContent,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CodeContent {
    #[serde(default, deserialize_with = "rich_text_or_empty")]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default, deserialize_with = "rich_text_or_empty")]
    pub caption: Vec<RichTextItem>,
    #[serde(default)]
    pub language: Option<String>,
}

impl CodeContent {
    /// Fence language; blank or missing languages fall back to `plaintext`.
    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or("plaintext")
    }
}

/// Code block
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub common: BlockCommon,
    pub content: CodeContent,
}

/// Callout icon. Only emoji icons render; file and external icons are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Icon {
    #[serde(rename = "type", default)]
    pub icon_type: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
}

impl Icon {
    pub fn emoji(&self) -> Option<&str> {
        match self.icon_type.as_deref() {
            Some("emoji") => self.emoji.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CalloutContent {
    #[serde(default, deserialize_with = "rich_text_or_empty")]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default, deserialize_with = "ok_or_none")]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub color: Color,
}

/// Callout block
#[derive(Debug, Clone, PartialEq)]
pub struct CalloutBlock {
    pub common: BlockCommon,
    pub content: CalloutContent,
}

/// Equation block
#[derive(Debug, Clone, PartialEq)]
pub struct EquationBlock {
    pub common: BlockCommon,
    pub content: EquationData,
}

/// Where a file-backed block's bytes live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileSource {
    External,
    File,
    #[default]
    Other,
}

impl<'de> Deserialize<'de> for FileSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("external") => FileSource::External,
            Some("file") => FileSource::File,
            _ => FileSource::Other,
        })
    }
}

/// Payload of image, video, audio, pdf and file blocks
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FileObject {
    #[serde(rename = "type", default)]
    pub source: FileSource,
    #[serde(default, deserialize_with = "ok_or_none")]
    pub external: Option<UrlValue>,
    #[serde(default, deserialize_with = "ok_or_none")]
    pub file: Option<UrlValue>,
    #[serde(default, deserialize_with = "rich_text_or_empty")]
    pub caption: Vec<RichTextItem>,
    #[serde(default)]
    pub name: Option<String>,
}

impl FileObject {
    /// URL selected by the file source; unknown sources have no URL.
    pub fn url(&self) -> Option<&str> {
        let location = match self.source {
            FileSource::External => self.external.as_ref(),
            FileSource::File => self.file.as_ref(),
            FileSource::Other => None,
        };
        location.map(|u| u.url.as_str())
    }
}

/// Image, video, audio, pdf or file block
#[derive(Debug, Clone, PartialEq)]
pub struct MediaBlock {
    pub common: BlockCommon,
    pub media: FileObject,
}

/// Payload of bookmark, embed and link_preview blocks
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LinkContent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "rich_text_or_empty")]
    pub caption: Vec<RichTextItem>,
}

/// Bookmark, embed or link preview block
#[derive(Debug, Clone, PartialEq)]
pub struct LinkBlock {
    pub common: BlockCommon,
    pub content: LinkContent,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TitleContent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

/// Child page block
#[derive(Debug, Clone, PartialEq)]
pub struct ChildPageBlock {
    pub common: BlockCommon,
    pub content: TitleContent,
}

/// Child database block. Rendering refers to it by block id only.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildDatabaseBlock {
    pub common: BlockCommon,
    pub content: TitleContent,
}

/// Target of a link_to_page block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    Page(&'a str),
    Database(&'a str),
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LinkToPageContent {
    #[serde(rename = "type", default)]
    pub link_type: Option<String>,
    #[serde(default)]
    pub page_id: Option<String>,
    #[serde(default)]
    pub database_id: Option<String>,
}

impl LinkToPageContent {
    pub fn target(&self) -> LinkTarget<'_> {
        match (self.link_type.as_deref(), &self.page_id, &self.database_id) {
            (Some("page_id"), Some(id), _) => LinkTarget::Page(id),
            (Some("database_id"), _, Some(id)) => LinkTarget::Database(id),
            _ => LinkTarget::Other,
        }
    }
}

/// Link to page block
#[derive(Debug, Clone, PartialEq)]
pub struct LinkToPageBlock {
    pub common: BlockCommon,
    pub content: LinkToPageContent,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TableContent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub table_width: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_column_header: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_row_header: bool,
}

/// Table block
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub common: BlockCommon,
    pub content: TableContent,
}

/// Cells are `None` when the API sent something other than an array.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TableRowContent {
    #[serde(default, deserialize_with = "cells_or_none")]
    pub cells: Option<Vec<Vec<RichTextItem>>>,
}

/// Table row block
#[derive(Debug, Clone, PartialEq)]
pub struct TableRowBlock {
    pub common: BlockCommon,
    pub content: TableRowContent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SyncedFrom {
    pub block_id: BlockId,
}

/// `synced_from` is absent on the original block and set on every copy.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SyncedContent {
    #[serde(default, deserialize_with = "ok_or_none")]
    pub synced_from: Option<SyncedFrom>,
}

/// Synced block
#[derive(Debug, Clone, PartialEq)]
pub struct SyncedBlock {
    pub common: BlockCommon,
    pub content: SyncedContent,
}

/// Block with no payload worth reading (divider, breadcrumb, table of contents, unsupported)
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerBlock {
    pub common: BlockCommon,
}

/// Block whose type tag is not known to this crate
#[derive(Debug, Clone, PartialEq)]
pub struct UnrecognizedBlock {
    pub common: BlockCommon,
    pub block_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_object_url_follows_source() {
        let external: FileObject = serde_json::from_value(json!({
            "type": "external",
            "external": { "url": "https://example.com/a.png" },
            "file": { "url": "https://ignored.example.com" }
        }))
        .unwrap();
        assert_eq!(external.url(), Some("https://example.com/a.png"));

        let hosted: FileObject = serde_json::from_value(json!({
            "type": "file",
            "file": { "url": "https://s3.example.com/a.png", "expiry_time": "2025-01-01T00:00:00.000Z" }
        }))
        .unwrap();
        assert_eq!(hosted.url(), Some("https://s3.example.com/a.png"));

        let unknown: FileObject =
            serde_json::from_value(json!({ "type": "file_upload", "file_upload": {} })).unwrap();
        assert_eq!(unknown.url(), None);
    }

    #[test]
    fn test_callout_icon_only_exposes_emoji() {
        let emoji: Icon = serde_json::from_value(json!({ "type": "emoji", "emoji": "💡" })).unwrap();
        assert_eq!(emoji.emoji(), Some("💡"));

        let external: Icon = serde_json::from_value(json!({
            "type": "external",
            "external": { "url": "https://example.com/icon.png" }
        }))
        .unwrap();
        assert_eq!(external.emoji(), None);
    }

    #[test]
    fn test_link_to_page_target() {
        let page: LinkToPageContent =
            serde_json::from_value(json!({ "type": "page_id", "page_id": "p1" })).unwrap();
        assert_eq!(page.target(), LinkTarget::Page("p1"));

        let database: LinkToPageContent =
            serde_json::from_value(json!({ "type": "database_id", "database_id": "d1" })).unwrap();
        assert_eq!(database.target(), LinkTarget::Database("d1"));

        let comment: LinkToPageContent =
            serde_json::from_value(json!({ "type": "comment_id", "comment_id": "c1" })).unwrap();
        assert_eq!(comment.target(), LinkTarget::Other);
    }

    #[test]
    fn test_table_row_cells_tolerate_bad_shapes() {
        let row: TableRowContent = serde_json::from_value(json!({ "cells": "nope" })).unwrap();
        assert_eq!(row.cells, None);

        let row: TableRowContent = serde_json::from_value(json!({})).unwrap();
        assert_eq!(row.cells, None);
    }

    #[test]
    fn test_code_language_fallback() {
        let code: CodeContent = serde_json::from_value(json!({ "language": "" })).unwrap();
        assert_eq!(code.language(), "plaintext");
    }
}
