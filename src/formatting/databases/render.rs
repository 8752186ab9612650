// src/formatting/databases/render.rs
//! Human-readable details for each database property type.

use crate::model::DatabasePropertyType;
use crate::types::SelectOption;

/// The "Details" cell of a schema row, before escaping.
pub fn property_details(property_type: &DatabasePropertyType) -> String {
    use DatabasePropertyType::*;

    match property_type {
        Select { options } | MultiSelect { options } | Status { options } => {
            format!("Options: {}", option_names(options))
        }
        Relation { database_id } => {
            format!("Related DB: {}", database_id.as_deref().unwrap_or_default())
        }
        Formula { expression } => {
            format!("Formula: {}", expression.as_deref().unwrap_or_default())
        }
        Rollup { function } => format!("Rollup: {}", function.as_deref().unwrap_or_default()),
        CreatedBy | LastEditedBy => "User reference".to_string(),
        CreatedTime | LastEditedTime => "Timestamp".to_string(),
        Date => "Date or date range".to_string(),
        Email => "Email address".to_string(),
        Files => "File attachments".to_string(),
        Number { format } => format!(
            "Format: {}",
            format
                .as_deref()
                .filter(|f| !f.is_empty())
                .unwrap_or("plain number")
        ),
        People => "People reference".to_string(),
        PhoneNumber => "Phone number".to_string(),
        RichText => "Formatted text".to_string(),
        Title => "Database title".to_string(),
        Url => "URL link".to_string(),
        Checkbox => "Boolean value".to_string(),
        Other { .. } => String::new(),
    }
}

fn option_names(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|o| o.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
