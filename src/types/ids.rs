use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatabaseMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyMarker;

pub type PageId = Id<PageMarker>;
pub type BlockId = Id<BlockMarker>;
pub type DatabaseId = Id<DatabaseMarker>;
/// An identifier whose object kind is not known (e.g. a block id that may be a page).
pub type NotionId = Id<AnyMarker>;

impl<T> Id<T> {
    /// Parse user-supplied input (raw hex, dashed UUID or Notion URL) into a normalized ID.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_notion_id(input)?;
        Ok(Self::from_raw(normalized))
    }

    /// Wrap a value exactly as the API returned it.
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _phantom: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the ID with dashes for API calls
    pub fn to_dashed(&self) -> String {
        if self.value.len() == 32 && !self.value.contains('-') {
            format!(
                "{}-{}-{}-{}-{}",
                &self.value[0..8],
                &self.value[8..12],
                &self.value[12..16],
                &self.value[16..20],
                &self.value[20..32]
            )
        } else {
            self.value.clone()
        }
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

// IDs coming back from the API are kept verbatim; rendering echoes them as-is.
impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_raw(value))
    }
}

/// Normalize various Notion ID formats into a consistent format
fn normalize_notion_id(input: &str) -> Result<String, ValidationError> {
    let input = input.trim();

    if input.starts_with("http://") || input.starts_with("https://") {
        if let Some(id) = extract_id_from_url(input) {
            return normalize_notion_id(id);
        }
        return Err(ValidationError::InvalidId(format!(
            "Could not extract ID from URL: {}",
            input
        )));
    }

    let normalized = input.replace('-', "");

    if normalized.len() != 32 {
        return Err(ValidationError::InvalidId(format!(
            "Invalid ID length: expected 32 characters, got {}",
            normalized.len()
        )));
    }

    if !normalized.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidId(
            "ID must contain only hexadecimal characters".to_string(),
        ));
    }

    Ok(normalized.to_lowercase())
}

/// Extract ID from Notion URL
fn extract_id_from_url(input: &str) -> Option<&str> {
    // Query strings (`?v=...`) and fragments never carry the object id.
    let path = input.split(['?', '#']).next().unwrap_or(input);
    let path = path.trim_end_matches('/');

    // Format: https://www.notion.so/[workspace]/[title]-[id]
    if let Some(pos) = path.rfind('-') {
        let potential_id = &path[pos + 1..];
        if potential_id.len() == 32 {
            return Some(potential_id);
        }
    }

    // Format: https://www.notion.so/[id]
    if let Some(pos) = path.rfind('/') {
        let potential_id = &path[pos + 1..];
        if potential_id.len() == 32 || (potential_id.len() == 36 && potential_id.contains('-')) {
            return Some(potential_id);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parsing() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = PageId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = PageId::parse("https://www.notion.so/Test-Page-550e8400e29b41d4a716446655440000")
            .unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");

        let id = DatabaseId::parse(
            "https://www.notion.so/team/550e8400e29b41d4a716446655440000?v=0123456789abcdef0123456789abcdef",
        )
        .unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(PageId::parse("too-short").is_err());
        assert!(PageId::parse("not-hex-chars-00000000000000000").is_err());
        assert!(PageId::parse("").is_err());
        assert!(PageId::parse("https://www.notion.so/no-id-here").is_err());
    }

    #[test]
    fn test_dashed_form_for_api_calls() {
        let id = BlockId::parse("550E8400E29B41D4A716446655440000").unwrap();
        assert_eq!(id.to_dashed(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_api_ids_are_kept_verbatim() {
        let id: BlockId = serde_json::from_str("\"block1\"").unwrap();
        assert_eq!(id.as_str(), "block1");
        assert_eq!(id.to_dashed(), "block1");
    }
}
