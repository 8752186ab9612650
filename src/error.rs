// src/error.rs
//! Application error types with structured error handling.
//!
//! Renderers never fail; everything in here comes from configuration, tool
//! arguments or the Notion API.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded; back off and retry
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    InvalidRequestUrl,
    InvalidRequest,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Conflict with current state of the resource
    Conflict,
    InternalError,
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "invalid_request_url" => Self::InvalidRequestUrl,
            "invalid_request" => Self::InvalidRequest,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error is transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::ServiceUnavailable | Self::InternalError
        )
    }

    /// Message shown to the person who invoked the tool.
    /// `api_message` is the human-readable text Notion sent with the error.
    pub fn user_message(&self, api_message: &str) -> String {
        match self {
            Self::Unauthorized => {
                "Not authorized to access this Notion resource. Please check your API token."
                    .to_string()
            }
            Self::RestrictedResource => {
                "This Notion resource is restricted and cannot be accessed.".to_string()
            }
            Self::ObjectNotFound => {
                "The requested Notion object was not found. Please check the ID.".to_string()
            }
            Self::RateLimited => "Rate limit exceeded. Please try again later.".to_string(),
            Self::InvalidJson => "Invalid JSON was provided to Notion API.".to_string(),
            Self::InvalidRequestUrl => {
                "Invalid request URL. This is likely a bug in the tool.".to_string()
            }
            Self::InvalidRequest => format!("Invalid request to Notion API: {}", api_message),
            Self::ValidationFailed => format!("Validation error: {}", api_message),
            Self::Conflict => {
                "Conflict error: Another update to this resource was made. Please try again."
                    .to_string()
            }
            Self::InternalError => {
                "Notion API encountered an internal server error. Please try again later."
                    .to_string()
            }
            Self::ServiceUnavailable => {
                "Notion API service is currently unavailable. Please try again later.".to_string()
            }
            Self::HttpStatus(_) => "Received an unexpected response from Notion API.".to_string(),
            Self::Unknown(_) => "Unknown Notion API error".to_string(),
        }
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::InvalidRequestUrl => write!(f, "invalid_request_url"),
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionApi {
        code: NotionErrorCode,
        message: String,
        status: u16,
        request_id: Option<String>,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::InvalidArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::NotionApi { code, .. } => code.is_retryable(),
            AppError::NetworkFailure(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Whether Notion certainly did not act on the request: it was rate
    /// limited, or the connection never opened. Only then may a create or
    /// append be sent a second time.
    pub fn was_not_processed(&self) -> bool {
        match self {
            AppError::NotionApi { code, .. } => *code == NotionErrorCode::RateLimited,
            AppError::NetworkFailure(e) => e.is_connect(),
            _ => false,
        }
    }

    /// Renders the error for the person who invoked a tool, prefixed with
    /// `[context]` when a context is given.
    pub fn user_message(&self, context: Option<&str>) -> String {
        let prefix = context
            .filter(|c| !c.is_empty())
            .map(|c| format!("[{}] ", c))
            .unwrap_or_default();

        let message = match self {
            AppError::NotionApi { code, message, .. } => code.user_message(message),
            AppError::NetworkFailure(e) if e.is_timeout() => {
                "The request to Notion API timed out. Please try again.".to_string()
            }
            AppError::MalformedResponse(_) => {
                "Received an unexpected response from Notion API.".to_string()
            }
            other => format!("Error: {}", other),
        };

        format!("{}{}", prefix, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
