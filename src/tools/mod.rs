// src/tools/mod.rs
//! Tool layer: named operations that take JSON arguments, call the Notion
//! repository and return a text result (JSON or Markdown).

mod args;
mod blocks;
mod databases;
mod pages;
mod response;
mod search;

use crate::api::NotionRepository;
use crate::error::AppError;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use args::OutputFormat;

/// Every tool this crate exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    RetrieveBlockChildren,
    AppendBlockChildren,
    RetrievePage,
    CreatePage,
    CreateDatabaseItem,
    UpdatePageProperties,
    RetrieveDatabase,
    QueryDatabase,
    CreateDatabase,
    UpdateDatabase,
    Search,
}

impl ToolName {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::RetrieveBlockChildren => "notion-retrieve-block-children",
            ToolName::AppendBlockChildren => "notion-append-block-children",
            ToolName::RetrievePage => "notion-retrieve-page",
            ToolName::CreatePage => "notion-create-page",
            ToolName::CreateDatabaseItem => "notion-create-database-item",
            ToolName::UpdatePageProperties => "notion-update-page-properties",
            ToolName::RetrieveDatabase => "notion-retrieve-database",
            ToolName::QueryDatabase => "notion-query-database",
            ToolName::CreateDatabase => "notion-create-database",
            ToolName::UpdateDatabase => "notion-update-database",
            ToolName::Search => "notion-search",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TOOL_CATALOG
            .iter()
            .map(|descriptor| descriptor.name)
            .find(|name| name.as_str() == s)
            .ok_or_else(|| AppError::UnknownTool(s.to_string()))
    }
}

/// Name and one-line description of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: ToolName,
    pub description: &'static str,
}

pub const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: ToolName::RetrieveBlockChildren,
        description: "Retrieve all children blocks of a block",
    },
    ToolDescriptor {
        name: ToolName::AppendBlockChildren,
        description: "Append new children blocks to a parent block",
    },
    ToolDescriptor {
        name: ToolName::RetrievePage,
        description: "Retrieve a Notion page by its ID",
    },
    ToolDescriptor {
        name: ToolName::CreatePage,
        description: "Create a new standalone page in Notion with a page parent",
    },
    ToolDescriptor {
        name: ToolName::CreateDatabaseItem,
        description: "Create a new item in a Notion database",
    },
    ToolDescriptor {
        name: ToolName::UpdatePageProperties,
        description: "Update properties of an existing Notion page",
    },
    ToolDescriptor {
        name: ToolName::RetrieveDatabase,
        description: "Retrieve a Notion database schema by its ID",
    },
    ToolDescriptor {
        name: ToolName::QueryDatabase,
        description: "Query a Notion database with optional filters and sorting",
    },
    ToolDescriptor {
        name: ToolName::CreateDatabase,
        description: "Create a new database as a child of a specified parent page",
    },
    ToolDescriptor {
        name: ToolName::UpdateDatabase,
        description: "Update an existing database's title, description, or properties",
    },
    ToolDescriptor {
        name: ToolName::Search,
        description: "Search all pages and databases in a Notion workspace",
    },
];

/// Runs one tool by name against a repository.
///
/// `args` must be a JSON object (or null, meaning no arguments).
pub async fn call_tool(
    repo: &dyn NotionRepository,
    name: &str,
    args: Value,
) -> Result<String, AppError> {
    let tool: ToolName = name.parse()?;
    let args = args::ToolArgs::new(tool, args)?;
    log::info!("Calling {}", tool);

    match tool {
        ToolName::RetrieveBlockChildren => blocks::retrieve_block_children(repo, &args).await,
        ToolName::AppendBlockChildren => blocks::append_block_children(repo, &args).await,
        ToolName::RetrievePage => pages::retrieve_page(repo, &args).await,
        ToolName::CreatePage => pages::create_page(repo, &args).await,
        ToolName::CreateDatabaseItem => pages::create_database_item(repo, &args).await,
        ToolName::UpdatePageProperties => pages::update_page_properties(repo, &args).await,
        ToolName::RetrieveDatabase => databases::retrieve_database(repo, &args).await,
        ToolName::QueryDatabase => databases::query_database(repo, &args).await,
        ToolName::CreateDatabase => databases::create_database(repo, &args).await,
        ToolName::UpdateDatabase => databases::update_database(repo, &args).await,
        ToolName::Search => search::search(repo, &args).await,
    }
}
