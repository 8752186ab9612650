use thiserror::Error;

mod colors;
mod domain_types;
mod ids;
pub(crate) mod lenient;
mod properties;
mod rich_text;

pub use colors::*;
pub use domain_types::*;
pub use ids::*;
pub use properties::*;
pub use rich_text::*;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Value out of bounds for {field}: {value}, expected {min}..={max}")]
    OutOfBounds {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid log level: {0} (expected debug, info, warn or error)")]
    InvalidLogLevel(String),
}
