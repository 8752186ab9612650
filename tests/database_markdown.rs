// tests/database_markdown.rs
//! Database schema rendering and search-result listings.

use notion_mcp_tools::{
    convert_database_to_markdown, convert_list_databases_to_markdown, Database, PaginatedList,
    Resolved,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn text(content: &str) -> Value {
    json!({
        "type": "text",
        "text": { "content": content, "link": null },
        "annotations": {
            "bold": false, "italic": false, "strikethrough": false,
            "underline": false, "code": false, "color": "default"
        },
        "plain_text": content,
        "href": null
    })
}

fn tasks_database() -> Value {
    json!({
        "object": "database",
        "id": "d9824bdc-8445-4327-be8b-5b47500af6ce",
        "title": [text("Tasks")],
        "description": [text("Everything we ship")],
        "url": "https://www.notion.so/d9824bdc84454327be8b5b47500af6ce",
        "archived": false,
        "properties": {
            "Name": { "id": "title", "name": "Name", "type": "title", "title": {} },
            "Priority": { "id": "p", "name": "Priority", "type": "select", "select": {
                "options": [
                    { "id": "1", "name": "High", "color": "red" },
                    { "id": "2", "name": "Low", "color": "gray" }
                ]
            } },
            "Points": { "id": "n", "name": "Points", "type": "number", "number": { "format": "number" } },
            "Budget": { "id": "b", "name": "Budget", "type": "number", "number": {} },
            "Score": { "id": "f", "name": "Score", "type": "formula", "formula": { "expression": "prop(\"Points\") * 2" } },
            "Project": { "id": "r", "name": "Project", "type": "relation", "relation": { "database_id": "668d797c-76fa-4934-9b05-ad288df2d136" } },
            "Owner": { "id": "o", "name": "Owner", "type": "people", "people": {} },
            "Link": { "id": "u", "name": "Link", "type": "url", "url": {} },
            "Button": { "id": "x", "name": "Button", "type": "button", "button": {} }
        }
    })
}

fn render(raw: Value) -> String {
    convert_database_to_markdown(&Resolved::<Database>::from_value(raw))
}

#[test]
fn full_schema() {
    let expected = "# Tasks (Database)\n\n\
Everything we ship\n\n\
## Properties\n\n\
| Property Name | Type | Details |\n\
|------------|------|------|\n\
| Name | title | Database title |\n\
| Priority | select | Options: High, Low |\n\
| Points | number | Format: number |\n\
| Budget | number | Format: plain number |\n\
| Score | formula | Formula: prop(\"Points\") * 2 |\n\
| Project | relation | Related DB: 668d797c-76fa-4934-9b05-ad288df2d136 |\n\
| Owner | people | People reference |\n\
| Link | url | URL link |\n\
| Button | button |  |\n\
\n\
\n[View in Notion](https://www.notion.so/d9824bdc84454327be8b5b47500af6ce)\n";
    assert_eq!(render(tasks_database()), expected);
}

#[test]
fn details_are_escaped() {
    let raw = json!({
        "object": "database",
        "id": "d1",
        "title": [],
        "properties": {
            "Total": { "id": "f", "name": "Total", "type": "formula",
                       "formula": { "expression": "a + b | c" } }
        }
    });
    assert!(render(raw).contains("| Total | formula | Formula: a \\+ b \\| c |\n"));
}

#[test]
fn partial_database_renders_nothing() {
    insta::assert_snapshot!(render(json!({ "object": "database", "id": "d1" })), @"");
}

#[test]
fn search_listing() {
    let response = json!({
        "object": "list",
        "results": [
            tasks_database(),
            { "object": "database", "id": "restricted" }
        ],
        "next_cursor": null,
        "has_more": false
    });
    let list: PaginatedList<Resolved<Database>> = serde_json::from_value(response).unwrap();
    let markdown = convert_list_databases_to_markdown(&list);

    assert!(markdown.starts_with("# Search Results (Databases)\n\n# Tasks (Database)\n\n"));
    // The partial result contributes an empty section after the separator.
    assert!(markdown.ends_with("[View in Notion](https://www.notion.so/d9824bdc84454327be8b5b47500af6ce)\n\n\n"));
}

#[test]
fn empty_search_listing() {
    let list: PaginatedList<Resolved<Database>> = PaginatedList::new(Vec::new());
    assert_eq!(
        convert_list_databases_to_markdown(&list),
        "# Search Results (Databases)\n\n"
    );
}

#[test]
fn malformed_title_keeps_the_schema() {
    let raw = json!({
        "object": "database",
        "id": "d1",
        "title": "Tasks",
        "description": [{ "plain_text": "Backlog", "annotations": { "italic": 1 } }],
        "properties": {
            "Name": { "id": "title", "name": "Name", "type": "title", "title": {} }
        },
        "url": "https://www.notion.so/d1"
    });
    assert_eq!(
        render(raw),
        "Backlog\n\n## Properties\n\n| Property Name | Type | Details |\n|------------|------|------|\n| Name | title | Database title |\n\n\n[View in Notion](https://www.notion.so/d1)\n"
    );
}
