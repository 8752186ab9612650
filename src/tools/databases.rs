// src/tools/databases.rs
use super::args::{OutputFormat, ToolArgs};
use super::response::{
    pagination_envelope, pretty, result_count, summarize, DATABASE_SUMMARY_FIELDS,
};
use crate::api::NotionRepository;
use crate::error::AppError;
use crate::formatting::convert_database_to_markdown;
use crate::model::{Database, Resolved};
use crate::types::{DatabaseId, PageId};
use serde_json::{json, Map, Value};

pub(super) async fn retrieve_database(
    repo: &dyn NotionRepository,
    args: &ToolArgs,
) -> Result<String, AppError> {
    let database: DatabaseId = args.id("database_id")?;
    let format = args.format()?;

    let response = repo.retrieve_database(&database).await?;

    match format {
        OutputFormat::Markdown => Ok(convert_database_to_markdown(
            &Resolved::<Database>::from_value(response),
        )),
        OutputFormat::Json => pretty(&response),
    }
}

/// Runs a database query, forwarding only the options the caller set.
pub(super) async fn query_database(
    repo: &dyn NotionRepository,
    args: &ToolArgs,
) -> Result<String, AppError> {
    let database: DatabaseId = args.id("database_id")?;

    let mut body = Map::new();
    if let Some(filter) = args.optional_object("filter")? {
        body.insert("filter".to_string(), Value::Object(filter.clone()));
    }
    if let Some(sorts) = args.optional_array("sorts")? {
        body.insert("sorts".to_string(), Value::Array(sorts.clone()));
    }
    if let Some(cursor) = args.optional_str("start_cursor")? {
        body.insert("start_cursor".to_string(), json!(cursor));
    }
    if let Some(page_size) = args.page_size()? {
        body.insert("page_size".to_string(), json!(page_size.get()));
    }

    let response = repo.query_database(&database, &Value::Object(body)).await?;

    let mut result = pagination_envelope(&response);
    result.insert("result_count".to_string(), json!(result_count(&response)));
    pretty(&Value::Object(result))
}

pub(super) async fn create_database(
    repo: &dyn NotionRepository,
    args: &ToolArgs,
) -> Result<String, AppError> {
    let parent: PageId = args.id("parent_page_id")?;
    let title = args.required_str("title")?;
    let properties = args
        .optional_object("properties")?
        .ok_or_else(|| args.invalid("missing required argument `properties`"))?;

    let title_properties = properties
        .values()
        .filter(|config| config.get("title").is_some())
        .count();
    if title_properties != 1 {
        return Err(args.invalid("Database must have exactly one title property"));
    }

    let mut body = json!({
        "parent": { "type": "page_id", "page_id": parent.to_dashed() },
        "title": text_rich_text(title),
        "properties": properties,
    });
    if let Some(icon) = args.optional_object("icon")? {
        body["icon"] = emoji_icon(icon);
    }
    if let Some(cover) = args.optional_object("cover")? {
        body["cover"] = Value::Object(cover.clone());
    }

    let response = repo.create_database(&body).await?;
    pretty(&summarize(&response, DATABASE_SUMMARY_FIELDS))
}

/// Updates a database's title, description or property schema. Properties set to
/// `null` are removed.
pub(super) async fn update_database(
    repo: &dyn NotionRepository,
    args: &ToolArgs,
) -> Result<String, AppError> {
    let database: DatabaseId = args.id("database_id")?;

    let mut body = Map::new();
    if let Some(title) = args.optional_str("title")? {
        body.insert("title".to_string(), text_rich_text(title));
    }
    if let Some(description) = args.optional_array("description")? {
        body.insert("description".to_string(), Value::Array(description.clone()));
    }
    if let Some(properties) = args.optional_object("properties")? {
        body.insert("properties".to_string(), Value::Object(properties.clone()));
    }
    if body.is_empty() {
        return Err(args.invalid("Provide at least one of `title`, `description` or `properties`"));
    }

    let response = repo
        .update_database(&database, &Value::Object(body))
        .await?;
    pretty(&summarize(&response, DATABASE_SUMMARY_FIELDS))
}

/// A single plain text rich-text run.
fn text_rich_text(content: &str) -> Value {
    json!([{ "type": "text", "text": { "content": content } }])
}

/// `{"emoji": "📚"}` becomes a typed emoji icon; typed icons pass through.
fn emoji_icon(icon: &Map<String, Value>) -> Value {
    let mut icon = icon.clone();
    if !icon.contains_key("type") && icon.contains_key("emoji") {
        icon.insert("type".to_string(), json!("emoji"));
    }
    Value::Object(icon)
}
