use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A Notion object as the API returned it: either fully hydrated or a
/// restricted view that only guarantees an id.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    Full(T),
    Partial(PartialObject),
}

/// The raw JSON of an object that could not be read as a full object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PartialObject {
    pub raw: Value,
}

impl PartialObject {
    pub fn id(&self) -> Option<&str> {
        self.raw.get("id").and_then(Value::as_str)
    }
}

/// Objects that can tell a full API response from a partial one.
pub trait FullObject: Sized {
    /// Structural check on the raw JSON, before any typed parsing.
    fn is_full(raw: &Value) -> bool;

    /// Typed parse of a value that passed [`FullObject::is_full`].
    fn from_full_value(raw: &Value) -> Result<Self, serde_json::Error>;
}

impl<T: FullObject> Resolved<T> {
    /// Classify a raw API object. Anything that fails to parse as `T` stays partial.
    pub fn from_value(raw: Value) -> Self {
        if !T::is_full(&raw) {
            return Resolved::Partial(PartialObject { raw });
        }
        match T::from_full_value(&raw) {
            Ok(full) => Resolved::Full(full),
            Err(e) => {
                log::debug!(
                    "Treating {} as partial: {}",
                    raw.get("id").and_then(Value::as_str).unwrap_or("object"),
                    e
                );
                Resolved::Partial(PartialObject { raw })
            }
        }
    }
}

impl<T> Resolved<T> {
    pub fn as_full(&self) -> Option<&T> {
        match self {
            Resolved::Full(full) => Some(full),
            Resolved::Partial(_) => None,
        }
    }

    pub fn is_partial(&self) -> bool {
        matches!(self, Resolved::Partial(_))
    }
}

impl<'de, T: FullObject> Deserialize<'de> for Resolved<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(raw))
    }
}

/// One page of a paginated Notion listing, in document order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaginatedList<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

impl<T> PaginatedList<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self {
            results,
            next_cursor: None,
            has_more: false,
        }
    }
}

/// `"type"` discriminator of a raw object.
pub(crate) fn type_tag(raw: &Value) -> Option<&str> {
    raw.get("type").and_then(Value::as_str)
}

pub(crate) fn object_kind(raw: &Value) -> Option<&str> {
    raw.get("object").and_then(Value::as_str)
}
