// src/formatting/mod.rs
//! Renders Notion blocks, pages and databases into Markdown.
//!
//! Every renderer here is a pure function of its input: no I/O, no errors.
//! Partial or malformed data degrades to a JSON dump, an empty string or a
//! placeholder rather than failing.

pub mod block_renderer;
mod databases;
mod pages;
mod properties;
mod rich_text;

pub use block_renderer::{convert_block_children_to_markdown, convert_block_to_markdown};
pub use databases::{convert_database_to_markdown, convert_list_databases_to_markdown};
pub use pages::convert_page_to_markdown;
pub use properties::{escape_table_cell, format_property_value};
pub use rich_text::extract_rich_text;
