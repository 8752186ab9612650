// src/formatting/pages.rs
//! Page rendering: title, property table, child-block note and Notion link.

use super::properties::{escape_table_cell, format_property_value};
use super::rich_text::extract_rich_text;
use crate::model::{Page, Resolved};
use crate::tools::ToolName;
use std::fmt::Write;

/// Renders a page summary. Partial pages render as the empty string.
pub fn convert_page_to_markdown(page: &Resolved<Page>) -> String {
    match page {
        Resolved::Full(page) => compose_page_markdown(page),
        Resolved::Partial(partial) => {
            log::debug!(
                "Skipping markdown for partial page {}",
                partial.id().unwrap_or("<unknown>")
            );
            String::new()
        }
    }
}

fn compose_page_markdown(page: &Page) -> String {
    let title = compose_title_section(page);
    let properties = compose_properties_section(page);
    let children = compose_children_note(page);
    let link = compose_view_link(page.url.as_deref());
    [title, properties, children, link].concat()
}

fn compose_title_section(page: &Page) -> String {
    let title = page.title_property().map(extract_rich_text).unwrap_or_default();
    if title.is_empty() {
        String::new()
    } else {
        format!("# {}\n\n", title)
    }
}

fn compose_properties_section(page: &Page) -> String {
    let mut out = String::from("## Properties\n\n");
    out.push_str("| Property | Value |\n");
    out.push_str("|------------|----|\n");

    for (name, value) in &page.properties {
        let _ = writeln!(
            out,
            "| {} | {} |",
            escape_table_cell(name),
            escape_table_cell(&format_property_value(value))
        );
    }

    out
}

fn compose_children_note(page: &Page) -> String {
    format!(
        "\n\n> This page contains child blocks. You can retrieve them using `{}`.\n> Block ID: `{}`\n",
        ToolName::RetrieveBlockChildren,
        page.id
    )
}

/// `[View in Notion](url)` footer shared by page and database renderers.
pub(crate) fn compose_view_link(url: Option<&str>) -> String {
    match url {
        Some(url) if !url.is_empty() => format!("\n[View in Notion]({})\n", url),
        _ => String::new(),
    }
}
