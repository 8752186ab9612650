// src/tools/pages.rs
use super::args::{OutputFormat, ToolArgs};
use super::response::{pretty, summarize, PAGE_ITEM_SUMMARY_FIELDS, PAGE_SUMMARY_FIELDS};
use crate::api::NotionRepository;
use crate::error::AppError;
use crate::formatting::convert_page_to_markdown;
use crate::model::{FullObject, Page, Resolved};
use crate::types::{DatabaseId, PageId};
use serde_json::{json, Map, Value};

/// Fields of a full page echoed by the JSON form of `notion-retrieve-page`.
const RETRIEVED_PAGE_FIELDS: &[&str] = &[
    "created_time",
    "last_edited_time",
    "archived",
    "properties",
    "url",
    "parent",
];

pub(super) async fn retrieve_page(
    repo: &dyn NotionRepository,
    args: &ToolArgs,
) -> Result<String, AppError> {
    let page: PageId = args.id("page_id")?;
    let filter_properties = args.string_list("filter_properties")?;
    let format = args.format()?;

    let response = repo.retrieve_page(&page, &filter_properties).await?;

    match format {
        OutputFormat::Markdown => Ok(convert_page_to_markdown(&Resolved::<Page>::from_value(
            response,
        ))),
        OutputFormat::Json if Page::is_full(&response) => {
            pretty(&summarize(&response, RETRIEVED_PAGE_FIELDS))
        }
        OutputFormat::Json => pretty(&summarize(&response, &[])),
    }
}

/// Creates a standalone page under a parent page, titled `title`.
pub(super) async fn create_page(
    repo: &dyn NotionRepository,
    args: &ToolArgs,
) -> Result<String, AppError> {
    let parent: PageId = args.id("page_id")?;
    let title = args.required_str("title")?;

    let mut body = json!({
        "parent": { "page_id": parent.to_dashed() },
        "properties": {
            "title": {
                "title": [{ "text": { "content": title } }]
            }
        }
    });
    attach_children(&mut body, args)?;

    let response = repo.create_page(&body).await?;
    pretty(&summarize(&response, PAGE_SUMMARY_FIELDS))
}

pub(super) async fn create_database_item(
    repo: &dyn NotionRepository,
    args: &ToolArgs,
) -> Result<String, AppError> {
    let database: DatabaseId = args.id("database_id")?;
    let properties = non_empty_properties(
        args,
        "Properties are required when creating an item in a database",
    )?;

    let mut body = json!({
        "parent": { "database_id": database.to_dashed() },
        "properties": properties,
    });
    attach_children(&mut body, args)?;

    let response = repo.create_page(&body).await?;
    pretty(&summarize(&response, PAGE_ITEM_SUMMARY_FIELDS))
}

pub(super) async fn update_page_properties(
    repo: &dyn NotionRepository,
    args: &ToolArgs,
) -> Result<String, AppError> {
    let page: PageId = args.id("page_id")?;
    let properties = non_empty_properties(
        args,
        "At least one property must be specified for update",
    )?;

    let response = repo
        .update_page(&page, &json!({ "properties": properties }))
        .await?;
    pretty(&summarize(&response, PAGE_ITEM_SUMMARY_FIELDS))
}

fn non_empty_properties<'a>(
    args: &'a ToolArgs,
    message: &str,
) -> Result<&'a Map<String, Value>, AppError> {
    args.optional_object("properties")?
        .filter(|properties| !properties.is_empty())
        .ok_or_else(|| args.invalid(message))
}

/// Adds `children` to a create body when the caller supplied any.
fn attach_children(body: &mut Value, args: &ToolArgs) -> Result<(), AppError> {
    if let Some(children) = args.optional_array("children")? {
        if !children.is_empty() {
            body["children"] = Value::Array(children.clone());
        }
    }
    Ok(())
}
