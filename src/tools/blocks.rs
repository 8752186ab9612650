// src/tools/blocks.rs
use super::args::{OutputFormat, ToolArgs};
use super::response::{compact, pagination_envelope, results_of};
use crate::api::parser::parse_object;
use crate::api::{BlockChildrenQuery, NotionRepository};
use crate::error::AppError;
use crate::formatting::convert_block_children_to_markdown;
use crate::model::{Block, PaginatedList, Resolved};
use crate::types::{BlockId, NotionId};
use serde_json::{json, Value};

/// Lists one page of a block's children, as JSON or Markdown.
pub(super) async fn retrieve_block_children(
    repo: &dyn NotionRepository,
    args: &ToolArgs,
) -> Result<String, AppError> {
    let block: NotionId = args.id("block_id")?;
    let query = BlockChildrenQuery {
        page_size: args.page_size()?,
        start_cursor: args.optional_str("start_cursor")?.map(str::to_string),
    };
    let format = args.format()?;

    let response = repo.list_block_children(&block, &query).await?;

    match format {
        OutputFormat::Markdown => {
            let list: PaginatedList<Resolved<Block>> = parse_object(response)?;
            Ok(convert_block_children_to_markdown(&list))
        }
        OutputFormat::Json => compact(&Value::Object(pagination_envelope(&response))),
    }
}

pub(super) async fn append_block_children(
    repo: &dyn NotionRepository,
    args: &ToolArgs,
) -> Result<String, AppError> {
    let block: BlockId = args.id("block_id")?;
    let children = args
        .optional_array("children")?
        .ok_or_else(|| args.invalid("missing required argument `children`"))?;
    let after: Option<BlockId> = args.optional_id("after")?;

    let response = repo
        .append_block_children(&block, children, after.as_ref())
        .await?;

    compact(&json!({ "results": results_of(&response) }))
}
