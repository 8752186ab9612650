// src/formatting/block_renderer.rs
//! Block rendering engine: converts Notion blocks to Markdown.
//!
//! Each block renders to a single fragment. Children are never fetched or
//! expanded here; blocks that have them point the reader at a follow-up
//! request instead.

use super::properties::escape_table_cell;
use super::rich_text::extract_rich_text;
use crate::model::{
    Block, FileObject, LinkTarget, MediaBlock, PaginatedList, PartialObject, Resolved,
};
use std::fmt::Write;

// --- Placeholders ---

const CHILDREN_NEED_REQUEST: &str = "*Additional API request is needed to display child blocks*";
const EMPTY_TABLE_ROW: &str = "*Empty table row*";

// --- Public API ---

/// Renders one block into a Markdown fragment.
///
/// A missing block renders as the empty string; a partial block renders as
/// a fenced JSON dump of whatever the API returned.
pub fn convert_block_to_markdown(block: Option<&Resolved<Block>>) -> String {
    match block {
        None => String::new(),
        Some(Resolved::Partial(partial)) => render_partial(partial),
        Some(Resolved::Full(block)) => render_block(block),
    }
}

/// Renders a page of block children under a `# Block Contents` header,
/// followed by a pagination notice when more results exist.
pub fn convert_block_children_to_markdown(list: &PaginatedList<Resolved<Block>>) -> String {
    log::debug!(
        "Rendering {} blocks (has_more: {})",
        list.results.len(),
        list.has_more
    );

    let fragments: Vec<String> = list
        .results
        .iter()
        .map(|block| convert_block_to_markdown(Some(block)))
        .collect();

    let mut output = format!("# Block Contents\n\n{}", fragments.join("\n\n"));

    if list.has_more {
        output.push_str(
            "\n> More results available. Use `start_cursor` parameter with the next request.\n",
        );
        if let Some(cursor) = list.next_cursor.as_deref().filter(|c| !c.is_empty()) {
            let _ = writeln!(output, "> Next cursor: `{}`", cursor);
        }
    }

    output
}

// --- Rendering ---

fn render_partial(partial: &PartialObject) -> String {
    log::debug!(
        "Rendering partial block {} as JSON",
        partial.id().unwrap_or("<unknown>")
    );
    let json = serde_json::to_string_pretty(&partial.raw).unwrap_or_default();
    format!("```json\n{}\n```", json)
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph(b) => extract_rich_text(&b.content.rich_text),
        Block::Heading1(b) => format!("# {}", extract_rich_text(&b.content.rich_text)),
        Block::Heading2(b) => format!("## {}", extract_rich_text(&b.content.rich_text)),
        Block::Heading3(b) => format!("### {}", extract_rich_text(&b.content.rich_text)),
        Block::BulletedListItem(b) => format!("- {}", extract_rich_text(&b.content.rich_text)),
        // Markdown renumbers `1.` items itself.
        Block::NumberedListItem(b) => format!("1. {}", extract_rich_text(&b.content.rich_text)),
        Block::ToDo(b) => {
            let mark = if b.content.checked { "x" } else { " " };
            format!("- [{}] {}", mark, extract_rich_text(&b.content.rich_text))
        }
        Block::Toggle(b) => format!(
            "<details>\n<summary>{}</summary>\n\n{}\n\n</details>",
            extract_rich_text(&b.content.rich_text),
            CHILDREN_NEED_REQUEST
        ),
        Block::Quote(b) => format!("> {}", extract_rich_text(&b.content.rich_text)),
        Block::Callout(b) => {
            let icon = b.content.icon.as_ref().and_then(|i| i.emoji()).unwrap_or("");
            format!("> {} {}", icon, extract_rich_text(&b.content.rich_text))
        }
        Block::Code(b) => format!(
            "```{}\n{}\n```",
            b.content.language(),
            extract_rich_text(&b.content.rich_text)
        ),
        Block::Equation(b) => format!("$${}$$", b.content.expression),
        Block::Divider(_) => "---".to_string(),
        Block::Breadcrumb(_) => "[breadcrumb navigation]".to_string(),
        Block::TableOfContents(_) => "[TOC]".to_string(),
        Block::Image(b) => format!("![{}]({})", caption(&b.media), media_url(b)),
        Block::Video(b) => format!("🎬 [{}]({})", caption(&b.media), media_url(b)),
        Block::Audio(b) => format!("🔊 [{}]({})", caption(&b.media), media_url(b)),
        Block::Pdf(b) => format!("📄 [{}]({})", caption(&b.media), media_url(b)),
        Block::File(b) => format!(
            "📎 [{}]({})",
            b.media.name.as_deref().unwrap_or_default(),
            media_url(b)
        ),
        Block::Bookmark(b) => {
            let caption = extract_rich_text(&b.content.caption);
            let label = if caption.is_empty() {
                b.content.url.as_str()
            } else {
                caption.as_str()
            };
            format!("[{}]({})", label, b.content.url)
        }
        Block::Embed(b) => format!(
            "<iframe src=\"{}\" frameborder=\"0\"></iframe>",
            b.content.url
        ),
        Block::LinkPreview(b) => format!("🔗 [Preview]({})", b.content.url),
        Block::ChildPage(b) => format!("📄 **Child Page**: {}", b.content.title),
        Block::ChildDatabase(b) => format!("📊 **Embedded Database**: `{}`", b.common.id),
        Block::LinkToPage(b) => match b.content.target() {
            LinkTarget::Page(id) => format!("🔗 **Link to page**: `{}`", id),
            LinkTarget::Database(id) => format!("🔗 **Link to database**: `{}`", id),
            LinkTarget::Other => "🔗 **Link to page**: ``".to_string(),
        },
        Block::Table(b) => format!(
            "*Table data ({} columns) - Additional API request is needed to display details*",
            b.content.table_width
        ),
        Block::TableRow(b) => match b.content.cells.as_deref() {
            Some(cells) if !cells.is_empty() => render_table_row(cells),
            _ => EMPTY_TABLE_ROW.to_string(),
        },
        Block::Synced(b) => {
            let origin = match &b.content.synced_from {
                Some(from) => format!("`{}`", from.block_id),
                None => "original".to_string(),
            };
            format!(
                "*Synced Block ({}) - Additional API request is needed to display content*",
                origin
            )
        }
        Block::Template(b) => format!(
            "*Template Block: {}*",
            extract_rich_text(&b.content.rich_text)
        ),
        Block::Unsupported(_) => "*Unsupported block*".to_string(),
        Block::Unrecognized(b) => {
            log::debug!("No renderer for block type '{}'", b.block_type);
            format!("*Unsupported block type: {}*", b.block_type)
        }
    }
}

fn caption(media: &FileObject) -> String {
    extract_rich_text(&media.caption)
}

fn media_url(block: &MediaBlock) -> &str {
    block.media.url().unwrap_or_default()
}

fn render_table_row(cells: &[Vec<crate::types::RichTextItem>]) -> String {
    let rendered: Vec<String> = cells
        .iter()
        .map(|cell| escape_table_cell(&extract_rich_text(cell)))
        .collect();
    format!("| {} |", rendered.join(" | "))
}
