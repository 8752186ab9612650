// src/formatting/properties/formatters.rs
//! Type-specific formatting of page property values into table cell text.

use crate::formatting::rich_text::extract_rich_text;
use crate::model::{FormulaResult, PropertyTypeValue, PropertyValue, RollupResult};
use crate::types::{DateValue, FileReference, SelectOption, User};

/// Shown for property types without a formatter.
pub const UNSUPPORTED_PROPERTY: &str = "(Unsupported property type)";

/// Formats a property value as unescaped cell text.
pub fn format_property_value(value: &PropertyValue) -> String {
    use PropertyTypeValue::*;

    log::trace!(
        "Formatting property ID: {}, Type: {}",
        value.id.as_deref().unwrap_or("-"),
        value.type_name()
    );

    match &value.type_specific_value {
        Title(items) | RichText(items) => extract_rich_text(items),
        Number(number) => number.map(format_number).unwrap_or_default(),
        Select(option) | Status(option) => format_option_name(option.as_ref()),
        MultiSelect(options) => join(options.iter().map(|o| o.name.as_str())),
        Date(date) => date.as_ref().map(format_date).unwrap_or_default(),
        People(people) => join(people.iter().map(User::to_string)),
        Files(files) => join(files.iter().map(format_file)),
        Checkbox(checked) => (if *checked { "✓" } else { "✗" }).to_string(),
        Url(text) | Email(text) | PhoneNumber(text) => text.clone().unwrap_or_default(),
        Formula(formula) => format_formula(formula),
        Relation(relations) => join(relations.iter().map(|r| format!("`{}`", r.id))),
        Rollup(rollup) => format_rollup(rollup),
        CreatedBy(user) | LastEditedBy(user) => user.id.clone(),
        CreatedTime(time) | LastEditedTime(time) => time.clone().unwrap_or_default(),
        UniqueId(unique_id) => unique_id.to_string(),
        Unsupported { .. } => UNSUPPORTED_PROPERTY.to_string(),
    }
}

/// Shortest decimal form: integral values print without a fraction.
pub fn format_number(number: f64) -> String {
    number.to_string()
}

fn format_option_name(option: Option<&SelectOption>) -> String {
    option.map(|o| o.name.clone()).unwrap_or_default()
}

fn format_date(date: &DateValue) -> String {
    match date.end.as_deref() {
        Some(end) if !end.is_empty() => format!("{} → {}", date.start, end),
        _ => date.start.clone(),
    }
}

fn format_file(file: &FileReference) -> String {
    format!("[{}]({})", file.display_name(), file.link_target())
}

// Zero, false and empty results all read as "no value".
fn format_formula(formula: &FormulaResult) -> String {
    match formula {
        FormulaResult::Number(Some(n)) if *n != 0.0 => format_number(*n),
        FormulaResult::Boolean(Some(true)) => "true".to_string(),
        FormulaResult::Date(Some(date)) => date.start.clone(),
        FormulaResult::String(Some(text)) => text.clone(),
        _ => String::new(),
    }
}

fn format_rollup(rollup: &RollupResult) -> String {
    match rollup {
        RollupResult::Array(items) => serde_json::to_string(items).unwrap_or_default(),
        RollupResult::Number(number) => number.map(format_number).unwrap_or_default(),
        RollupResult::Date(date) => date.as_ref().map(|d| d.start.clone()).unwrap_or_default(),
        RollupResult::Other => String::new(),
    }
}

fn join<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|part| part.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
