// src/api/parser.rs
//! Turns raw HTTP responses into JSON values or classified Notion errors.

use super::client::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use notion_client::objects::error::Error as NotionError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse any Notion API response into JSON, or into the error it reports.
pub fn parse_api_response(result: ApiResponse<String>) -> Result<Value, AppError> {
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        Err(parse_error_body(&result.data, result.status, &result.url))
    }
}

/// Reads an already-fetched JSON value as a typed object.
pub fn parse_object<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| {
        AppError::MalformedResponse(format!("Unexpected response shape: {}", e))
    })
}

fn parse_success_body(body: &str, url: &str) -> Result<Value, AppError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

fn parse_error_body(body: &str, status: reqwest::StatusCode, url: &str) -> AppError {
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        log::debug!(
            "Notion API error from {}: {} {}",
            url,
            notion_error.code,
            notion_error.message
        );
        return AppError::NotionApi {
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            status: status.as_u16(),
            request_id: notion_error.request_id,
        };
    }

    // Fallback to generic error with HTTP status code
    AppError::NotionApi {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}: {}", status, url, preview(body)),
        status: status.as_u16(),
        request_id: None,
    }
}

fn preview(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
