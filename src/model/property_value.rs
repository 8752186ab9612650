use super::resolved::type_tag;
use crate::types::lenient::rich_text_or_empty;
use crate::types::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Page property value: the property id plus its typed value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue {
    pub id: Option<String>,
    pub type_specific_value: PropertyTypeValue,
}

impl PropertyValue {
    /// Returns the Notion API type name for this property value.
    pub fn type_name(&self) -> &str {
        match &self.type_specific_value {
            PropertyTypeValue::Title(_) => "title",
            PropertyTypeValue::RichText(_) => "rich_text",
            PropertyTypeValue::Number(_) => "number",
            PropertyTypeValue::Select(_) => "select",
            PropertyTypeValue::MultiSelect(_) => "multi_select",
            PropertyTypeValue::Status(_) => "status",
            PropertyTypeValue::Date(_) => "date",
            PropertyTypeValue::Formula(_) => "formula",
            PropertyTypeValue::Relation(_) => "relation",
            PropertyTypeValue::Rollup(_) => "rollup",
            PropertyTypeValue::People(_) => "people",
            PropertyTypeValue::Files(_) => "files",
            PropertyTypeValue::Checkbox(_) => "checkbox",
            PropertyTypeValue::Url(_) => "url",
            PropertyTypeValue::Email(_) => "email",
            PropertyTypeValue::PhoneNumber(_) => "phone_number",
            PropertyTypeValue::CreatedTime(_) => "created_time",
            PropertyTypeValue::CreatedBy(_) => "created_by",
            PropertyTypeValue::LastEditedTime(_) => "last_edited_time",
            PropertyTypeValue::LastEditedBy(_) => "last_edited_by",
            PropertyTypeValue::UniqueId(_) => "unique_id",
            PropertyTypeValue::Unsupported { type_name } => type_name,
        }
    }

    /// Parse a raw property object, keyed by its `type`.
    ///
    /// Unknown types and malformed payloads become [`PropertyTypeValue::Unsupported`].
    pub fn from_api_value(raw: &Value) -> Self {
        let id = raw.get("id").and_then(Value::as_str).map(str::to_string);
        let tag = type_tag(raw).unwrap_or_default();

        let type_specific_value = typed_value(raw, tag).unwrap_or_else(|e| {
            log::debug!("Property of type '{}' is not readable: {}", tag, e);
            PropertyTypeValue::Unsupported {
                type_name: tag.to_string(),
            }
        });

        Self {
            id,
            type_specific_value,
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_api_value(&raw))
    }
}

/// The specific value types for page properties
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyTypeValue {
    Title(Vec<RichTextItem>),
    RichText(Vec<RichTextItem>),
    Number(Option<f64>),
    Select(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Status(Option<SelectOption>),
    Date(Option<DateValue>),
    Formula(FormulaResult),
    Relation(Vec<RelationValue>),
    Rollup(RollupResult),
    People(Vec<User>),
    Files(Vec<FileReference>),
    Checkbox(bool),
    Url(Option<String>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    CreatedTime(Option<String>),
    CreatedBy(User),
    LastEditedTime(Option<String>),
    LastEditedBy(User),
    UniqueId(UniqueIdData),
    Unsupported { type_name: String },
}

/// Formula result types
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaResult {
    String(Option<String>),
    Number(Option<f64>),
    Boolean(Option<bool>),
    Date(Option<DateValue>),
    Other,
}

/// Rollup result types. Arrays keep the raw items for JSON display.
#[derive(Debug, Clone, PartialEq)]
pub enum RollupResult {
    Number(Option<f64>),
    Date(Option<DateValue>),
    Array(Vec<Value>),
    Other,
}

fn typed_value(raw: &Value, tag: &str) -> Result<PropertyTypeValue, serde_json::Error> {
    use PropertyTypeValue as P;

    Ok(match tag {
        "title" => P::Title(rich_text_field(raw, tag)?),
        "rich_text" => P::RichText(rich_text_field(raw, tag)?),
        "number" => P::Number(field(raw, tag)?),
        "select" => P::Select(field(raw, tag)?),
        "multi_select" => P::MultiSelect(field(raw, tag)?),
        "status" => P::Status(field(raw, tag)?),
        "date" => P::Date(field(raw, tag)?),
        "people" => P::People(field(raw, tag)?),
        "files" => P::Files(field(raw, tag)?),
        "checkbox" => P::Checkbox(field(raw, tag)?),
        "url" => P::Url(field(raw, tag)?),
        "email" => P::Email(field(raw, tag)?),
        "phone_number" => P::PhoneNumber(field(raw, tag)?),
        "relation" => P::Relation(field(raw, tag)?),
        "created_time" => P::CreatedTime(field(raw, tag)?),
        "last_edited_time" => P::LastEditedTime(field(raw, tag)?),
        "created_by" => P::CreatedBy(required(raw, tag)?),
        "last_edited_by" => P::LastEditedBy(required(raw, tag)?),
        "unique_id" => P::UniqueId(required(raw, tag)?),
        "formula" => P::Formula(formula_result(required(raw, tag)?)?),
        "rollup" => P::Rollup(rollup_result(required(raw, tag)?)?),
        other => P::Unsupported {
            type_name: other.to_string(),
        },
    })
}

/// Reads `raw[key]`, treating null or missing as the type's default.
fn field<T: DeserializeOwned + Default>(raw: &Value, key: &str) -> Result<T, serde_json::Error> {
    match raw.get(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => T::deserialize(value),
    }
}

fn rich_text_field(raw: &Value, key: &str) -> Result<Vec<RichTextItem>, serde_json::Error> {
    rich_text_or_empty(raw.get(key).unwrap_or(&Value::Null))
}

/// Reads `raw[key]`, failing when it is null or missing.
fn required<T: DeserializeOwned>(raw: &Value, key: &str) -> Result<T, serde_json::Error> {
    T::deserialize(raw.get(key).unwrap_or(&Value::Null))
}

fn formula_result(formula: Value) -> Result<FormulaResult, serde_json::Error> {
    Ok(match type_tag(&formula) {
        Some("string") => FormulaResult::String(field(&formula, "string")?),
        Some("number") => FormulaResult::Number(field(&formula, "number")?),
        Some("boolean") => FormulaResult::Boolean(field(&formula, "boolean")?),
        Some("date") => FormulaResult::Date(field(&formula, "date")?),
        _ => FormulaResult::Other,
    })
}

fn rollup_result(rollup: Value) -> Result<RollupResult, serde_json::Error> {
    Ok(match type_tag(&rollup) {
        Some("number") => RollupResult::Number(field(&rollup, "number")?),
        Some("date") => RollupResult::Date(field(&rollup, "date")?),
        Some("array") => RollupResult::Array(field(&rollup, "array")?),
        _ => RollupResult::Other,
    })
}
