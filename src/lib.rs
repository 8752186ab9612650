// src/lib.rs
//! notion-mcp-tools library: Notion workspace tools for MCP hosts and the
//! Markdown renderer behind them.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ToolConfig`, `LogLevel`
//! - **Domain model**: `Block`, `Page`, `Database`, `PropertyValue`, `Resolved`, etc.
//! - **Domain types**: `NotionId`, `ApiKey`, `BlockId`, `PageSize`, `RichTextItem`, etc.
//! - **API client**: `NotionRepository`, `NotionHttpClient`, `RetryingRepository`
//! - **Formatting**: `convert_block_to_markdown`, `convert_page_to_markdown`, ...
//! - **Tools**: `call_tool`, `TOOL_CATALOG`

pub mod api;
pub mod config;
pub mod constants;
mod error;
pub mod error_recovery;
pub mod formatting;
pub mod model;
pub mod tools;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, LogLevel, ToolCommand, ToolConfig};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, Database, DatabaseProperty, DatabasePropertyType, FormulaResult,
    FullObject, Page, PaginatedList, PartialObject, PropertyTypeValue, PropertyValue, Resolved,
    RollupResult,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, Color, DatabaseId, DateValue, EquationData, FileReference, Id,
    Link, NotionId, PageId, PageSize, RichTextItem, RichTextKind, SelectOption, TextContent, User,
};

// --- API Client ---
pub use crate::api::{BlockChildrenQuery, NotionHttpClient, NotionRepository, RetryingRepository};

// --- Formatting ---
pub use crate::formatting::{
    convert_block_children_to_markdown, convert_block_to_markdown, convert_database_to_markdown,
    convert_list_databases_to_markdown, convert_page_to_markdown, escape_table_cell,
    extract_rich_text, format_property_value,
};

// --- Tools ---
pub use crate::tools::{call_tool, OutputFormat, ToolDescriptor, ToolName, TOOL_CATALOG};
