// src/tools/response.rs
//! Shaping raw API responses into tool results.

use crate::error::AppError;
use serde_json::{Map, Value};

/// Fields echoed back after a page is created.
pub(super) const PAGE_SUMMARY_FIELDS: &[&str] = &[
    "created_time",
    "last_edited_time",
    "url",
    "parent",
    "properties",
];

/// Fields echoed back after a database item is created or a page is updated.
pub(super) const PAGE_ITEM_SUMMARY_FIELDS: &[&str] = &[
    "created_time",
    "last_edited_time",
    "url",
    "parent",
    "properties",
    "icon",
    "cover",
];

pub(super) const DATABASE_SUMMARY_FIELDS: &[&str] = &[
    "title",
    "description",
    "created_time",
    "last_edited_time",
    "url",
    "parent",
    "properties",
    "icon",
    "cover",
];

/// `{ id, ...fields }`, copying only the fields the response actually has.
pub(super) fn summarize(response: &Value, fields: &[&str]) -> Value {
    let mut summary = Map::new();
    summary.insert("id".to_string(), field_or_null(response, "id"));
    for field in fields {
        if let Some(value) = response.get(*field) {
            summary.insert((*field).to_string(), value.clone());
        }
    }
    Value::Object(summary)
}

/// The named field, or `null` when the response lacks it.
pub(super) fn field_or_null(response: &Value, field: &str) -> Value {
    response.get(field).cloned().unwrap_or(Value::Null)
}

/// `{ results, next_cursor, has_more }` of a paginated listing.
pub(super) fn pagination_envelope(response: &Value) -> Map<String, Value> {
    let mut envelope = Map::new();
    envelope.insert("results".to_string(), results_of(response));
    envelope.insert(
        "next_cursor".to_string(),
        field_or_null(response, "next_cursor"),
    );
    envelope.insert(
        "has_more".to_string(),
        Value::Bool(response.get("has_more").and_then(Value::as_bool).unwrap_or(false)),
    );
    envelope
}

pub(super) fn results_of(response: &Value) -> Value {
    response
        .get("results")
        .filter(|results| results.is_array())
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()))
}

pub(super) fn result_count(response: &Value) -> usize {
    response
        .get("results")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Two-space indented JSON.
pub(super) fn pretty(value: &Value) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub(super) fn compact(value: &Value) -> Result<String, AppError> {
    Ok(serde_json::to_string(value)?)
}
