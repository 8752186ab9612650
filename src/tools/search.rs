// src/tools/search.rs
use super::args::{OutputFormat, ToolArgs};
use super::response::{pagination_envelope, pretty, result_count};
use crate::api::NotionRepository;
use crate::error::AppError;
use crate::formatting::convert_list_databases_to_markdown;
use crate::model::{Database, PaginatedList, Resolved};
use serde_json::{json, Map, Value};

/// Searches the workspace. The Markdown form renders only database hits.
pub(super) async fn search(
    repo: &dyn NotionRepository,
    args: &ToolArgs,
) -> Result<String, AppError> {
    let query = args.required_str("query")?;
    let format = args.format()?;

    let mut body = Map::new();
    body.insert("query".to_string(), json!(query));
    if let Some(filter) = args.optional_object("filter")? {
        body.insert("filter".to_string(), Value::Object(filter.clone()));
    }
    if let Some(sort) = args.optional_object("sort")? {
        body.insert("sort".to_string(), Value::Object(sort.clone()));
    }
    if let Some(cursor) = args.optional_str("start_cursor")? {
        body.insert("start_cursor".to_string(), json!(cursor));
    }
    if let Some(page_size) = args.page_size()? {
        body.insert("page_size".to_string(), json!(page_size.get()));
    }

    let response = repo.search(&Value::Object(body)).await?;

    match format {
        OutputFormat::Markdown => Ok(convert_list_databases_to_markdown(&database_hits(
            &response,
        ))),
        OutputFormat::Json => {
            let mut result = pagination_envelope(&response);
            result.insert("result_count".to_string(), json!(result_count(&response)));
            result.insert(
                "object_types".to_string(),
                Value::Object(count_object_types(&response)),
            );
            pretty(&Value::Object(result))
        }
    }
}

fn database_hits(response: &Value) -> PaginatedList<Resolved<Database>> {
    let hits: Vec<Resolved<Database>> = response
        .get("results")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|result| result.get("object").and_then(Value::as_str) == Some("database"))
        .map(|result| Resolved::from_value(result.clone()))
        .collect();
    PaginatedList::new(hits)
}

/// Result counts per `object` kind, in first-seen order.
fn count_object_types(response: &Value) -> Map<String, Value> {
    let mut counts: indexmap::IndexMap<&str, u64> = indexmap::IndexMap::new();
    for result in response
        .get("results")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
    {
        let kind = result
            .get("object")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        *counts.entry(kind).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(kind, count)| (kind.to_string(), json!(count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_types_are_counted_in_order() {
        let response = json!({
            "results": [
                {"object": "page", "id": "1"},
                {"object": "database", "id": "2"},
                {"object": "page", "id": "3"}
            ]
        });
        assert_eq!(
            Value::Object(count_object_types(&response)),
            json!({"page": 2, "database": 1})
        );
        let rendered = serde_json::to_string(&count_object_types(&response)).unwrap();
        assert_eq!(rendered, r#"{"page":2,"database":1}"#);
    }

    #[test]
    fn test_database_hits_skip_pages() {
        let response = json!({
            "results": [
                {"object": "page", "id": "1"},
                {"object": "database", "id": "2"}
            ]
        });
        let hits = database_hits(&response);
        assert_eq!(hits.results.len(), 1);
        assert!(hits.results[0].is_partial());
    }
}
