// src/formatting/properties/render.rs
//! Escaping for values placed inside Markdown table cells.

/// Escapes characters that would break a Markdown table row.
///
/// Pipes become `\|`, newlines become spaces and `+` becomes `\+`,
/// applied in that order.
pub fn escape_table_cell(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.replace('|', "\\|")
        .replace('\n', " ")
        .replace('+', "\\+")
}
