// src/tools/args.rs
//! Typed access to a tool's JSON arguments.

use super::ToolName;
use crate::error::AppError;
use crate::types::{Id, PageSize};
use serde_json::{Map, Value};

/// Result encoding requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

/// Arguments of one tool call. Every accessor reports failures against the
/// tool's name.
#[derive(Debug)]
pub(crate) struct ToolArgs {
    tool: ToolName,
    values: Map<String, Value>,
}

impl ToolArgs {
    pub(crate) fn new(tool: ToolName, args: Value) -> Result<Self, AppError> {
        let values = match args {
            Value::Null => Map::new(),
            Value::Object(values) => values,
            other => {
                return Err(AppError::invalid_arguments(
                    tool.as_str(),
                    format!("arguments must be a JSON object, got {}", json_kind(&other)),
                ))
            }
        };
        Ok(Self { tool, values })
    }

    pub(crate) fn invalid(&self, message: impl Into<String>) -> AppError {
        AppError::invalid_arguments(self.tool.as_str(), message)
    }

    /// A present, non-null argument.
    pub(crate) fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !v.is_null())
    }

    pub(crate) fn required_str(&self, key: &str) -> Result<&str, AppError> {
        self.optional_str(key)?
            .ok_or_else(|| self.invalid(format!("missing required argument `{}`", key)))
    }

    pub(crate) fn optional_str(&self, key: &str) -> Result<Option<&str>, AppError> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(self.invalid(format!(
                "`{}` must be a string, got {}",
                key,
                json_kind(other)
            ))),
        }
    }

    /// Parses an identifier given as a raw id, dashed id or Notion URL.
    pub(crate) fn id<T>(&self, key: &str) -> Result<Id<T>, AppError> {
        Ok(Id::parse(self.required_str(key)?)?)
    }

    pub(crate) fn optional_id<T>(&self, key: &str) -> Result<Option<Id<T>>, AppError> {
        match self.optional_str(key)? {
            Some(raw) => Ok(Some(Id::parse(raw)?)),
            None => Ok(None),
        }
    }

    pub(crate) fn page_size(&self) -> Result<Option<PageSize>, AppError> {
        let Some(value) = self.value("page_size") else {
            return Ok(None);
        };
        let size = value
            .as_i64()
            .ok_or_else(|| self.invalid("`page_size` must be an integer"))?;
        let size = u32::try_from(size.max(0)).unwrap_or(u32::MAX);
        Ok(Some(PageSize::new(size)?))
    }

    pub(crate) fn format(&self) -> Result<OutputFormat, AppError> {
        match self.optional_str("format")? {
            None | Some("json") => Ok(OutputFormat::Json),
            Some("markdown") => Ok(OutputFormat::Markdown),
            Some(other) => Err(self.invalid(format!(
                "`format` must be \"json\" or \"markdown\", got \"{}\"",
                other
            ))),
        }
    }

    pub(crate) fn optional_array(&self, key: &str) -> Result<Option<&Vec<Value>>, AppError> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(other) => Err(self.invalid(format!(
                "`{}` must be an array, got {}",
                key,
                json_kind(other)
            ))),
        }
    }

    pub(crate) fn optional_object(&self, key: &str) -> Result<Option<&Map<String, Value>>, AppError> {
        match self.value(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(self.invalid(format!(
                "`{}` must be an object, got {}",
                key,
                json_kind(other)
            ))),
        }
    }

    /// A list of strings, empty when absent.
    pub(crate) fn string_list(&self, key: &str) -> Result<Vec<String>, AppError> {
        let Some(items) = self.optional_array(key)? else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.invalid(format!("`{}` must contain only strings", key)))
            })
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
