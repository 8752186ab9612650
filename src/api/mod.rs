// src/api/mod.rs
//! Notion API interaction: the repository trait tools depend on, its HTTP
//! implementation, and the retry layer placed over it.
//!
//! Repository methods return the raw JSON the API sent back. Tools decide
//! how much of it to type (for rendering) and how much to echo verbatim.

pub mod client;
pub mod parser;
pub mod retrying;

use crate::error::AppError;
use crate::types::{BlockId, DatabaseId, NotionId, PageId, PageSize};
use serde_json::Value;

/// Pagination parameters for listing block children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockChildrenQuery {
    pub page_size: Option<PageSize>,
    pub start_cursor: Option<String>,
}

/// The ability to read and write a Notion workspace.
///
/// Tool handlers depend on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    async fn list_block_children(
        &self,
        block: &NotionId,
        query: &BlockChildrenQuery,
    ) -> Result<Value, AppError>;

    async fn append_block_children(
        &self,
        block: &BlockId,
        children: &[Value],
        after: Option<&BlockId>,
    ) -> Result<Value, AppError>;

    async fn retrieve_page(
        &self,
        page: &PageId,
        filter_properties: &[String],
    ) -> Result<Value, AppError>;

    async fn create_page(&self, body: &Value) -> Result<Value, AppError>;

    async fn update_page(&self, page: &PageId, body: &Value) -> Result<Value, AppError>;

    async fn retrieve_database(&self, database: &DatabaseId) -> Result<Value, AppError>;

    async fn query_database(&self, database: &DatabaseId, body: &Value)
        -> Result<Value, AppError>;

    async fn create_database(&self, body: &Value) -> Result<Value, AppError>;

    async fn update_database(
        &self,
        database: &DatabaseId,
        body: &Value,
    ) -> Result<Value, AppError>;

    async fn search(&self, body: &Value) -> Result<Value, AppError>;
}

// Re-export the public interface
pub use client::NotionHttpClient;
pub use retrying::RetryingRepository;
