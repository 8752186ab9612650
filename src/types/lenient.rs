//! Tolerant deserializers for API fields that may be null, missing or malformed.
//!
//! Rendering never fails on bad input, so these helpers turn the usual
//! shape errors into empty values instead of rejecting the whole object.

use super::RichTextItem;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treats an explicit JSON `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts any JSON value; yields `None` unless it parses as `T`.
pub fn ok_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            log::debug!("Ignoring malformed field: {}", e);
            Ok(None)
        }
    }
}

/// A rich text array. Anything other than an array reads as empty, and a
/// segment that fails to parse is reduced to its `plain_text` (or dropped
/// when it has none), so one bad segment never costs the enclosing object.
pub fn rich_text_or_empty<'de, D>(deserializer: D) -> Result<Vec<RichTextItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(rich_text_from_value(Value::deserialize(deserializer)?))
}

/// Table row cells: `None` unless the value is an array; each cell is read
/// like any other rich text array.
pub fn cells_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<Vec<RichTextItem>>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(cells) => Ok(Some(cells.into_iter().map(rich_text_from_value).collect())),
        Value::Null => Ok(None),
        other => {
            log::debug!("Ignoring table cells that are not an array: {}", other);
            Ok(None)
        }
    }
}

fn rich_text_from_value(value: Value) -> Vec<RichTextItem> {
    match value {
        Value::Array(segments) => segments.iter().filter_map(salvage_segment).collect(),
        Value::Null => Vec::new(),
        other => {
            log::debug!("Ignoring rich text that is not an array: {}", other);
            Vec::new()
        }
    }
}

fn salvage_segment(segment: &Value) -> Option<RichTextItem> {
    match RichTextItem::deserialize(segment) {
        Ok(item) => Some(item),
        Err(e) => {
            log::debug!("Malformed rich text segment, keeping plain text: {}", e);
            str_field(segment, "plain_text").map(RichTextItem::plain_text)
        }
    }
}

/// Reads a string-valued field from a raw JSON object.
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}
