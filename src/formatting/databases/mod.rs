// src/formatting/databases/mod.rs
//! Database schema rendering.

mod render;

use super::pages::compose_view_link;
use super::properties::escape_table_cell;
use super::rich_text::extract_rich_text;
use crate::model::{Database, PaginatedList, Resolved};
use render::property_details;
use std::fmt::Write;

/// Renders a database's title, description and property schema.
/// Partial databases render as the empty string.
pub fn convert_database_to_markdown(database: &Resolved<Database>) -> String {
    match database {
        Resolved::Full(database) => compose_database_markdown(database),
        Resolved::Partial(_) => String::new(),
    }
}

/// Renders database search results, one schema section per database.
pub fn convert_list_databases_to_markdown(list: &PaginatedList<Resolved<Database>>) -> String {
    let sections: Vec<String> = list
        .results
        .iter()
        .map(convert_database_to_markdown)
        .collect();
    format!("# Search Results (Databases)\n\n{}", sections.join("\n\n"))
}

fn compose_database_markdown(database: &Database) -> String {
    let mut out = String::new();

    let title = extract_rich_text(&database.title);
    if !title.is_empty() {
        let _ = write!(out, "# {} (Database)\n\n", title);
    }

    let description = extract_rich_text(&database.description);
    if !description.is_empty() {
        let _ = write!(out, "{}\n\n", description);
    }

    out.push_str(&compose_schema_table(database));
    out.push_str(&compose_view_link(database.url.as_deref()));
    out
}

fn compose_schema_table(database: &Database) -> String {
    let mut out = String::from("## Properties\n\n");
    out.push_str("| Property Name | Type | Details |\n");
    out.push_str("|------------|------|------|\n");

    for (key, property) in &database.properties {
        let name = property
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(key);
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            escape_table_cell(name),
            property.property_type,
            escape_table_cell(&property_details(&property.property_type))
        );
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_partial_database_renders_empty() {
        let database = Resolved::<Database>::from_value(json!({ "object": "database", "id": "d" }));
        assert_eq!(convert_database_to_markdown(&database), "");
    }

    #[test]
    fn test_name_falls_back_to_key() {
        let database = Resolved::<Database>::from_value(json!({
            "object": "database",
            "id": "d",
            "title": [],
            "properties": {
                "Done?": { "id": "x", "type": "checkbox", "checkbox": {} }
            }
        }));
        assert_eq!(
            convert_database_to_markdown(&database),
            "## Properties\n\n| Property Name | Type | Details |\n|------------|------|------|\n| Done? | checkbox | Boolean value |\n\n"
        );
    }
}
