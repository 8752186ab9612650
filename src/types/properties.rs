use super::lenient::null_as_default;
use super::{Color, NotionId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Select, multi-select and status option
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub color: Color,
}

/// Date value with optional end date.
///
/// Dates stay as the ISO strings Notion returns; they are only echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// User representation (people properties, created_by, mentions)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => f.write_str(name),
            _ => f.write_str(&self.id),
        }
    }
}

/// Entry of a `files` page property
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileReference {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub file: Option<UrlValue>,
    #[serde(default)]
    pub external: Option<UrlValue>,
}

impl FileReference {
    /// Hosted URL first, then external, then a placeholder anchor.
    pub fn link_target(&self) -> &str {
        [&self.file, &self.external]
            .into_iter()
            .flatten()
            .map(|u| u.url.as_str())
            .find(|u| !u.is_empty())
            .unwrap_or("#")
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Attachment")
    }
}

/// URL value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UrlValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// Relation value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationValue {
    pub id: NotionId,
}

/// Unique ID data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueIdData {
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub prefix: Option<String>,
}

impl fmt::Display for UniqueIdData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(number) = self.number else {
            return Ok(());
        };
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => write!(f, "{}-{}", prefix, number),
            _ => write!(f, "{}", number),
        }
    }
}
