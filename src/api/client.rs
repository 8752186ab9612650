// src/api/client.rs
//! HTTP client wrapper for the Notion API.
//!
//! Handles authentication headers and request building. Each call is a
//! single attempt; retries live in [`super::retrying`]. Response bodies are
//! handed to the parser untouched.

use super::parser::parse_api_response;
use super::{BlockChildrenQuery, NotionRepository};
use crate::config::ToolConfig;
use crate::constants::{NOTION_API_BASE_URL, REQUEST_TIMEOUT};
use crate::error::AppError;
use crate::types::{ApiKey, BlockId, DatabaseId, NotionId, PageId};
use reqwest::{header, Client, Response};
use serde_json::{json, Value};
use url::Url;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

#[derive(Debug, Clone, Copy)]
enum Verb {
    Get,
    Post,
    Patch,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(config: &ToolConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(
                &config.api_key,
                &config.notion_version,
            )?)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey, version: &str) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_str(version).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid NOTION_VERSION: {}", e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the given URL.
    pub async fn get(&self, url: Url) -> Result<Response, AppError> {
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with JSON body to the given URL.
    pub async fn post(&self, url: Url, body: &Value) -> Result<Response, AppError> {
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }

    /// Makes a PATCH request with JSON body to the given URL.
    pub async fn patch(&self, url: Url, body: &Value) -> Result<Response, AppError> {
        log::debug!("PATCH {}", url);
        Ok(self.client.patch(url).json(body).send().await?)
    }

    /// Sends one request and parses the body.
    async fn execute(&self, verb: Verb, url: Url, body: Option<&Value>) -> Result<Value, AppError> {
        let empty = json!({});
        let body = body.unwrap_or(&empty);
        let response = match verb {
            Verb::Get => self.get(url).await?,
            Verb::Post => self.post(url, body).await?,
            Verb::Patch => self.patch(url, body).await?,
        };
        parse_api_response(extract_response_text(response).await?)
    }
}

/// Joins an endpoint path onto the API base and appends query pairs.
fn endpoint_url(path: &str, query: &[(&str, &str)]) -> Result<Url, AppError> {
    let mut url = Url::parse(&format!("{}/{}", NOTION_API_BASE_URL, path))
        .map_err(|e| AppError::MalformedResponse(format!("Invalid endpoint {}: {}", path, e)))?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

#[async_trait::async_trait]
impl NotionRepository for NotionHttpClient {
    async fn list_block_children(
        &self,
        block: &NotionId,
        query: &BlockChildrenQuery,
    ) -> Result<Value, AppError> {
        let page_size = query.page_size.map(|size| size.get().to_string());
        let mut pairs = Vec::new();
        if let Some(page_size) = page_size.as_deref() {
            pairs.push(("page_size", page_size));
        }
        if let Some(cursor) = query.start_cursor.as_deref() {
            pairs.push(("start_cursor", cursor));
        }
        let url = endpoint_url(&format!("blocks/{}/children", block.to_dashed()), &pairs)?;
        self.execute(Verb::Get, url, None).await
    }

    async fn append_block_children(
        &self,
        block: &BlockId,
        children: &[Value],
        after: Option<&BlockId>,
    ) -> Result<Value, AppError> {
        let mut body = json!({ "children": children });
        if let Some(after) = after {
            body["after"] = json!(after.to_dashed());
        }
        let url = endpoint_url(&format!("blocks/{}/children", block.to_dashed()), &[])?;
        self.execute(Verb::Patch, url, Some(&body)).await
    }

    async fn retrieve_page(
        &self,
        page: &PageId,
        filter_properties: &[String],
    ) -> Result<Value, AppError> {
        let pairs: Vec<(&str, &str)> = filter_properties
            .iter()
            .map(|property| ("filter_properties", property.as_str()))
            .collect();
        let url = endpoint_url(&format!("pages/{}", page.to_dashed()), &pairs)?;
        self.execute(Verb::Get, url, None).await
    }

    async fn create_page(&self, body: &Value) -> Result<Value, AppError> {
        self.execute(Verb::Post, endpoint_url("pages", &[])?, Some(body))
            .await
    }

    async fn update_page(&self, page: &PageId, body: &Value) -> Result<Value, AppError> {
        let url = endpoint_url(&format!("pages/{}", page.to_dashed()), &[])?;
        self.execute(Verb::Patch, url, Some(body)).await
    }

    async fn retrieve_database(&self, database: &DatabaseId) -> Result<Value, AppError> {
        let url = endpoint_url(&format!("databases/{}", database.to_dashed()), &[])?;
        self.execute(Verb::Get, url, None).await
    }

    async fn query_database(
        &self,
        database: &DatabaseId,
        body: &Value,
    ) -> Result<Value, AppError> {
        let url = endpoint_url(&format!("databases/{}/query", database.to_dashed()), &[])?;
        self.execute(Verb::Post, url, Some(body)).await
    }

    async fn create_database(&self, body: &Value) -> Result<Value, AppError> {
        self.execute(Verb::Post, endpoint_url("databases", &[])?, Some(body))
            .await
    }

    async fn update_database(
        &self,
        database: &DatabaseId,
        body: &Value,
    ) -> Result<Value, AppError> {
        let url = endpoint_url(&format!("databases/{}", database.to_dashed()), &[])?;
        self.execute(Verb::Patch, url, Some(body)).await
    }

    async fn search(&self, body: &Value) -> Result<Value, AppError> {
        self.execute(Verb::Post, endpoint_url("search", &[])?, Some(body))
            .await
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
