// src/formatting/properties/mod.rs
//! Property value formatting and table cell escaping.

mod formatters;
mod render;

pub use formatters::format_property_value;
pub use render::escape_table_cell;
