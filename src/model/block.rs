use super::blocks::*;
use super::common::BlockCommon;
use super::resolved::{object_kind, type_tag, FullObject};
use crate::types::BlockId;
use serde::Deserialize;
use serde_json::Value;

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Toggle($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Callout($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Equation($pattern) => $result,
            Block::Divider($pattern) => $result,
            Block::Breadcrumb($pattern) => $result,
            Block::TableOfContents($pattern) => $result,
            Block::Image($pattern) => $result,
            Block::Video($pattern) => $result,
            Block::Audio($pattern) => $result,
            Block::File($pattern) => $result,
            Block::Pdf($pattern) => $result,
            Block::Bookmark($pattern) => $result,
            Block::Embed($pattern) => $result,
            Block::LinkPreview($pattern) => $result,
            Block::ChildPage($pattern) => $result,
            Block::ChildDatabase($pattern) => $result,
            Block::LinkToPage($pattern) => $result,
            Block::Table($pattern) => $result,
            Block::TableRow($pattern) => $result,
            Block::Synced($pattern) => $result,
            Block::Template($pattern) => $result,
            Block::Unsupported($pattern) => $result,
            Block::Unrecognized($pattern) => $result,
        }
    };
}

/// Block represents all possible Notion block types
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(TextBlock),
    Heading1(TextBlock),
    Heading2(TextBlock),
    Heading3(TextBlock),
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    ToDo(ToDoBlock),
    Toggle(TextBlock),
    Quote(TextBlock),
    Callout(CalloutBlock),
    Code(CodeBlock),
    Equation(EquationBlock),
    Divider(MarkerBlock),
    Breadcrumb(MarkerBlock),
    TableOfContents(MarkerBlock),
    Image(MediaBlock),
    Video(MediaBlock),
    Audio(MediaBlock),
    File(MediaBlock),
    Pdf(MediaBlock),
    Bookmark(LinkBlock),
    Embed(LinkBlock),
    LinkPreview(LinkBlock),
    ChildPage(ChildPageBlock),
    ChildDatabase(ChildDatabaseBlock),
    LinkToPage(LinkToPageBlock),
    Table(TableBlock),
    TableRow(TableRowBlock),
    Synced(SyncedBlock),
    Template(TextBlock),
    Unsupported(MarkerBlock),
    /// A type tag this crate does not know; the literal tag is kept for rendering.
    Unrecognized(UnrecognizedBlock),
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &BlockId {
        &self.common().id
    }

    /// Check if block has children
    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    /// Get common block data
    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    /// Get block type name
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::ToDo(_) => "to_do",
            Block::Toggle(_) => "toggle",
            Block::Quote(_) => "quote",
            Block::Callout(_) => "callout",
            Block::Code(_) => "code",
            Block::Equation(_) => "equation",
            Block::Divider(_) => "divider",
            Block::Breadcrumb(_) => "breadcrumb",
            Block::TableOfContents(_) => "table_of_contents",
            Block::Image(_) => "image",
            Block::Video(_) => "video",
            Block::Audio(_) => "audio",
            Block::File(_) => "file",
            Block::Pdf(_) => "pdf",
            Block::Bookmark(_) => "bookmark",
            Block::Embed(_) => "embed",
            Block::LinkPreview(_) => "link_preview",
            Block::ChildPage(_) => "child_page",
            Block::ChildDatabase(_) => "child_database",
            Block::LinkToPage(_) => "link_to_page",
            Block::Table(_) => "table",
            Block::TableRow(_) => "table_row",
            Block::Synced(_) => "synced_block",
            Block::Template(_) => "template",
            Block::Unsupported(_) => "unsupported",
            Block::Unrecognized(b) => &b.block_type,
        }
    }

    /// Whether this crate has a dedicated variant for the given type tag.
    pub fn is_known_type(tag: &str) -> bool {
        KNOWN_BLOCK_TYPES.contains(&tag)
    }

    /// Build a typed block from a raw API block object.
    ///
    /// The payload is read from the key named by `type`. A known type whose
    /// payload is missing or malformed is an error; unknown types always
    /// succeed as [`Block::Unrecognized`].
    pub fn from_api_value(raw: &Value) -> Result<Self, serde_json::Error> {
        let common = BlockCommon::deserialize(raw)?;
        let tag = type_tag(raw).unwrap_or_default();

        let block = match tag {
            "paragraph" => Block::Paragraph(text_block(common, raw, tag)?),
            "heading_1" => Block::Heading1(text_block(common, raw, tag)?),
            "heading_2" => Block::Heading2(text_block(common, raw, tag)?),
            "heading_3" => Block::Heading3(text_block(common, raw, tag)?),
            "bulleted_list_item" => Block::BulletedListItem(text_block(common, raw, tag)?),
            "numbered_list_item" => Block::NumberedListItem(text_block(common, raw, tag)?),
            "toggle" => Block::Toggle(text_block(common, raw, tag)?),
            "quote" => Block::Quote(text_block(common, raw, tag)?),
            "template" => Block::Template(text_block(common, raw, tag)?),
            "to_do" => Block::ToDo(ToDoBlock {
                content: payload(raw, tag)?,
                common,
            }),
            "callout" => Block::Callout(CalloutBlock {
                content: payload(raw, tag)?,
                common,
            }),
            "code" => Block::Code(CodeBlock {
                content: payload(raw, tag)?,
                common,
            }),
            "equation" => Block::Equation(EquationBlock {
                content: payload(raw, tag)?,
                common,
            }),
            "divider" => Block::Divider(MarkerBlock { common }),
            "breadcrumb" => Block::Breadcrumb(MarkerBlock { common }),
            "table_of_contents" => Block::TableOfContents(MarkerBlock { common }),
            "unsupported" => Block::Unsupported(MarkerBlock { common }),
            "image" => Block::Image(media_block(common, raw, tag)?),
            "video" => Block::Video(media_block(common, raw, tag)?),
            "audio" => Block::Audio(media_block(common, raw, tag)?),
            "file" => Block::File(media_block(common, raw, tag)?),
            "pdf" => Block::Pdf(media_block(common, raw, tag)?),
            "bookmark" => Block::Bookmark(link_block(common, raw, tag)?),
            "embed" => Block::Embed(link_block(common, raw, tag)?),
            "link_preview" => Block::LinkPreview(link_block(common, raw, tag)?),
            "child_page" => Block::ChildPage(ChildPageBlock {
                content: payload(raw, tag)?,
                common,
            }),
            "child_database" => Block::ChildDatabase(ChildDatabaseBlock {
                content: payload(raw, tag)?,
                common,
            }),
            "link_to_page" => Block::LinkToPage(LinkToPageBlock {
                content: payload(raw, tag)?,
                common,
            }),
            "table" => Block::Table(TableBlock {
                content: payload(raw, tag)?,
                common,
            }),
            "table_row" => Block::TableRow(TableRowBlock {
                content: payload(raw, tag)?,
                common,
            }),
            "synced_block" => Block::Synced(SyncedBlock {
                content: payload(raw, tag)?,
                common,
            }),
            other => Block::Unrecognized(UnrecognizedBlock {
                common,
                block_type: other.to_string(),
            }),
        };

        Ok(block)
    }
}

/// Every type tag with a dedicated [`Block`] variant.
const KNOWN_BLOCK_TYPES: &[&str] = &[
    "paragraph",
    "heading_1",
    "heading_2",
    "heading_3",
    "bulleted_list_item",
    "numbered_list_item",
    "to_do",
    "toggle",
    "quote",
    "callout",
    "code",
    "equation",
    "divider",
    "breadcrumb",
    "table_of_contents",
    "image",
    "video",
    "audio",
    "file",
    "pdf",
    "bookmark",
    "embed",
    "link_preview",
    "child_page",
    "child_database",
    "link_to_page",
    "table",
    "table_row",
    "synced_block",
    "template",
    "unsupported",
];

fn payload<T: serde::de::DeserializeOwned>(raw: &Value, key: &str) -> Result<T, serde_json::Error> {
    T::deserialize(raw.get(key).unwrap_or(&Value::Null))
}

fn text_block(common: BlockCommon, raw: &Value, key: &str) -> Result<TextBlock, serde_json::Error> {
    Ok(TextBlock {
        content: payload(raw, key)?,
        common,
    })
}

fn media_block(common: BlockCommon, raw: &Value, key: &str) -> Result<MediaBlock, serde_json::Error> {
    Ok(MediaBlock {
        media: payload(raw, key)?,
        common,
    })
}

fn link_block(common: BlockCommon, raw: &Value, key: &str) -> Result<LinkBlock, serde_json::Error> {
    Ok(LinkBlock {
        content: payload(raw, key)?,
        common,
    })
}

impl FullObject for Block {
    fn is_full(raw: &Value) -> bool {
        if object_kind(raw) != Some("block") {
            return false;
        }
        match type_tag(raw) {
            Some(tag) if Block::is_known_type(tag) => {
                raw.get(tag).is_some_and(|payload| !payload.is_null())
            }
            Some(_) => true,
            None => false,
        }
    }

    fn from_full_value(raw: &Value) -> Result<Self, serde_json::Error> {
        Block::from_api_value(raw)
    }
}
