// tests/page_markdown.rs
//! Page summaries rendered from retrieve-page responses.

use notion_mcp_tools::{convert_page_to_markdown, Page, Resolved};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const PAGE_ID: &str = "59833787-2cf9-4fdf-8782-e53db20768a5";

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

fn page(properties: Value) -> Value {
    json!({
        "object": "page",
        "id": PAGE_ID,
        "created_time": "2024-02-10T09:00:00.000Z",
        "last_edited_time": "2024-02-11T09:00:00.000Z",
        "archived": false,
        "parent": { "type": "database_id", "database_id": "d9824bdc-8445-4327-be8b-5b47500af6ce" },
        "properties": properties,
        "url": "https://www.notion.so/Roadmap-598337872cf94fdf8782e53db20768a5"
    })
}

fn render(raw: Value) -> String {
    convert_page_to_markdown(&Resolved::<Page>::from_value(raw))
}

fn expected_tail() -> String {
    format!(
        "\n\n> This page contains child blocks. You can retrieve them using `notion-retrieve-block-children`.\n> Block ID: `{}`\n\n[View in Notion](https://www.notion.so/Roadmap-598337872cf94fdf8782e53db20768a5)\n",
        PAGE_ID
    )
}

#[test]
fn full_page_with_typical_properties() {
    let raw = page(json!({
        "Name": { "id": "title", "type": "title", "title": [text("Roadmap")] },
        "Status": { "id": "s1", "type": "status", "status": { "id": "x", "name": "In progress", "color": "blue" } },
        "Tags": { "id": "t1", "type": "multi_select", "multi_select": [
            { "id": "a", "name": "backend", "color": "red" },
            { "id": "b", "name": "infra", "color": "gray" }
        ] },
        "Estimate": { "id": "e1", "type": "number", "number": 3.5 },
        "Done": { "id": "d1", "type": "checkbox", "checkbox": false },
        "Due": { "id": "du", "type": "date", "date": { "start": "2024-03-01", "end": "2024-03-15", "time_zone": null } }
    }));

    let expected = format!(
        "# Roadmap\n\n## Properties\n\n| Property | Value |\n|------------|----|\n\
| Name | Roadmap |\n\
| Status | In progress |\n\
| Tags | backend, infra |\n\
| Estimate | 3.5 |\n\
| Done | ✗ |\n\
| Due | 2024-03-01 → 2024-03-15 |\n{}",
        expected_tail()
    );
    assert_eq!(render(raw), expected);
}

#[test]
fn cells_are_escaped() {
    let raw = page(json!({
        "Name": { "id": "title", "type": "title", "title": [text("A | B")] },
        "Notes": { "id": "n1", "type": "rich_text", "rich_text": [text("one\ntwo + three")] }
    }));
    let markdown = render(raw);
    assert!(markdown.starts_with("# A | B\n\n"));
    assert!(markdown.contains("| Name | A \\| B |\n"));
    assert!(markdown.contains("| Notes | one two \\+ three |\n"));
}

#[test]
fn untitled_page_skips_heading() {
    let raw = page(json!({
        "Name": { "id": "title", "type": "title", "title": [] }
    }));
    let markdown = render(raw);
    assert!(markdown.starts_with("## Properties\n\n"));
    assert!(markdown.contains("| Name |  |\n"));
}

#[test]
fn unknown_property_types_render_placeholder() {
    let raw = page(json!({
        "Button": { "id": "b1", "type": "button", "button": {} },
        "Verified": { "id": "v1", "type": "verification", "verification": { "state": "verified" } }
    }));
    let markdown = render(raw);
    assert!(markdown.contains("| Button | (Unsupported property type) |\n"));
    assert!(markdown.contains("| Verified | (Unsupported property type) |\n"));
}

#[test]
fn partial_page_renders_nothing() {
    let partial = json!({ "object": "page", "id": PAGE_ID });
    insta::assert_snapshot!(render(partial), @"");
}

#[test]
fn page_without_url_has_no_link() {
    let mut raw = page(json!({}));
    raw["url"] = Value::Null;
    let markdown = render(raw);
    assert!(!markdown.contains("[View in Notion]"));
    assert!(markdown.ends_with(&format!("> Block ID: `{}`\n", PAGE_ID)));
}
