mod block;
pub mod blocks;
pub mod common;
mod property_value;
mod resolved;

pub use block::Block;
pub use blocks::*;
pub use common::*;
pub use property_value::{FormulaResult, PropertyTypeValue, PropertyValue, RollupResult};
pub use resolved::{FullObject, PaginatedList, PartialObject, Resolved};

use crate::types::lenient::{null_as_default, rich_text_or_empty};
use crate::types::{DatabaseId, PageId, RichTextItem, SelectOption};
use indexmap::IndexMap;
use resolved::{object_kind, type_tag};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A Notion page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    pub id: PageId,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub archived: bool,
    /// Properties in the order the API listed them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: IndexMap<String, PropertyValue>,
}

impl Page {
    /// Rich text of the first `title`-typed property, if any.
    pub fn title_property(&self) -> Option<&[RichTextItem]> {
        self.properties
            .values()
            .find_map(|property| match &property.type_specific_value {
                PropertyTypeValue::Title(items) => Some(items.as_slice()),
                _ => None,
            })
    }
}

impl FullObject for Page {
    fn is_full(raw: &Value) -> bool {
        object_kind(raw) == Some("page") && raw.get("url").is_some()
    }

    fn from_full_value(raw: &Value) -> Result<Self, serde_json::Error> {
        Page::deserialize(raw)
    }
}

/// A Notion database
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Database {
    pub id: DatabaseId,
    #[serde(default, deserialize_with = "rich_text_or_empty")]
    pub title: Vec<RichTextItem>,
    #[serde(default, deserialize_with = "rich_text_or_empty")]
    pub description: Vec<RichTextItem>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub archived: bool,
    /// Property schema in the order the API listed it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: IndexMap<String, DatabaseProperty>,
}

impl FullObject for Database {
    fn is_full(raw: &Value) -> bool {
        object_kind(raw) == Some("database") && raw.get("title").is_some()
    }

    fn from_full_value(raw: &Value) -> Result<Self, serde_json::Error> {
        Database::deserialize(raw)
    }
}

/// Database property definition
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseProperty {
    pub id: Option<String>,
    pub name: Option<String>,
    pub property_type: DatabasePropertyType,
}

impl DatabaseProperty {
    pub fn from_api_value(raw: &Value) -> Self {
        let text = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            id: text("id"),
            name: text("name"),
            property_type: DatabasePropertyType::from_api_value(raw),
        }
    }
}

impl<'de> Deserialize<'de> for DatabaseProperty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_api_value(&raw))
    }
}

/// Database property types
#[derive(Debug, Clone, PartialEq)]
pub enum DatabasePropertyType {
    Title,
    RichText,
    Number { format: Option<String> },
    Select { options: Vec<SelectOption> },
    MultiSelect { options: Vec<SelectOption> },
    Status { options: Vec<SelectOption> },
    Date,
    Formula { expression: Option<String> },
    Relation { database_id: Option<String> },
    Rollup { function: Option<String> },
    People,
    Files,
    Checkbox,
    Url,
    Email,
    PhoneNumber,
    CreatedTime,
    CreatedBy,
    LastEditedTime,
    LastEditedBy,
    /// Any type without a dedicated variant (button, unique_id, verification, ...)
    Other { type_name: String },
}

#[derive(Debug, Default, Deserialize)]
struct OptionsConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    options: Vec<SelectOption>,
}

impl DatabasePropertyType {
    /// Read the type tag and its configuration object. Malformed
    /// configuration degrades to an empty one rather than failing.
    fn from_api_value(raw: &Value) -> Self {
        let tag = type_tag(raw).unwrap_or_default();
        let config = raw.get(tag).unwrap_or(&Value::Null);
        let config_text = |key: &str| config.get(key).and_then(Value::as_str).map(str::to_string);
        let options = || {
            OptionsConfig::deserialize(config)
                .unwrap_or_default()
                .options
        };

        match tag {
            "title" => Self::Title,
            "rich_text" => Self::RichText,
            "number" => Self::Number {
                format: config_text("format"),
            },
            "select" => Self::Select { options: options() },
            "multi_select" => Self::MultiSelect { options: options() },
            "status" => Self::Status { options: options() },
            "date" => Self::Date,
            "formula" => Self::Formula {
                expression: config_text("expression"),
            },
            "relation" => Self::Relation {
                database_id: config_text("database_id"),
            },
            "rollup" => Self::Rollup {
                function: config_text("function"),
            },
            "people" => Self::People,
            "files" => Self::Files,
            "checkbox" => Self::Checkbox,
            "url" => Self::Url,
            "email" => Self::Email,
            "phone_number" => Self::PhoneNumber,
            "created_time" => Self::CreatedTime,
            "created_by" => Self::CreatedBy,
            "last_edited_time" => Self::LastEditedTime,
            "last_edited_by" => Self::LastEditedBy,
            other => Self::Other {
                type_name: other.to_string(),
            },
        }
    }
}

impl std::fmt::Display for DatabasePropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabasePropertyType::Title => write!(f, "title"),
            DatabasePropertyType::RichText => write!(f, "rich_text"),
            DatabasePropertyType::Number { .. } => write!(f, "number"),
            DatabasePropertyType::Select { .. } => write!(f, "select"),
            DatabasePropertyType::MultiSelect { .. } => write!(f, "multi_select"),
            DatabasePropertyType::Status { .. } => write!(f, "status"),
            DatabasePropertyType::Date => write!(f, "date"),
            DatabasePropertyType::Formula { .. } => write!(f, "formula"),
            DatabasePropertyType::Relation { .. } => write!(f, "relation"),
            DatabasePropertyType::Rollup { .. } => write!(f, "rollup"),
            DatabasePropertyType::People => write!(f, "people"),
            DatabasePropertyType::Files => write!(f, "files"),
            DatabasePropertyType::Checkbox => write!(f, "checkbox"),
            DatabasePropertyType::Url => write!(f, "url"),
            DatabasePropertyType::Email => write!(f, "email"),
            DatabasePropertyType::PhoneNumber => write!(f, "phone_number"),
            DatabasePropertyType::CreatedTime => write!(f, "created_time"),
            DatabasePropertyType::CreatedBy => write!(f, "created_by"),
            DatabasePropertyType::LastEditedTime => write!(f, "last_edited_time"),
            DatabasePropertyType::LastEditedBy => write!(f, "last_edited_by"),
            DatabasePropertyType::Other { type_name } => write!(f, "{}", type_name),
        }
    }
}
