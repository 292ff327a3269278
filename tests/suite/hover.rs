//! Hover tooltip tests

use std::sync::Arc;

use serde_json::json;
use tsassist_types::Position;

use crate::common::{FailingEngine, FakeEngine, PanickingEngine, assist, fake_assist};

const TEXT: &str = "function greet(name: string) {}\ngreet(\"a\");";

fn greet_engine(documentation: serde_json::Value) -> FakeEngine {
    FakeEngine::new(TEXT).with_quick_info(json!({
        "kind": "function",
        "textSpan": { "start": 32, "length": 5 },
        "displayParts": [
            { "text": "function", "kind": "keyword" },
            { "text": " ", "kind": "space" },
            { "text": "greet", "kind": "functionName" },
            { "text": "(name: string): void", "kind": "text" }
        ],
        "documentation": documentation
    }))
}

#[test]
fn no_symbol_means_no_tooltip() {
    let (_, assist) = fake_assist(FakeEngine::new(TEXT), TEXT);
    assert!(assist.hover().hover(3).is_none());
    assert!(assist.hover().hover(3).is_none());
}

#[test]
fn tooltip_is_stable_across_the_symbol_span() {
    let (_, assist) = fake_assist(greet_engine(json!([])), TEXT);
    let anchors: Vec<_> = (32..37)
        .map(|offset| {
            let tooltip = assist.hover().hover(offset).unwrap();
            (tooltip.pos, tooltip.end)
        })
        .collect();
    assert!(anchors.iter().all(|anchor| *anchor == (32, Some(37))));
    assert!(assist.hover().hover(37).is_none());
}

#[test]
fn content_is_highlighted_signature() {
    let (_, assist) = fake_assist(greet_engine(json!([])), TEXT);
    let tooltip = assist.hover().hover(33).unwrap();
    assert!(tooltip.overlap);

    let code = tooltip.content.find_by_class("cm-quickinfo-tooltip-code");
    assert_eq!(code.len(), 1);
    let html = tooltip.content.to_html();
    assert!(html.contains("<span class=\"tok-keyword\">function</span>"));
    assert!(html.contains("<span class=\"tok-function\">greet</span>"));
    assert!(tooltip.content.find_by_class("cm-tooltip-docs").is_empty());
}

#[test]
fn documentation_is_markdown_with_raw_html_escaped() {
    let docs = json!([{ "text": "Says *hello*. <img src=x onerror=alert(1)>", "kind": "text" }]);
    let (_, assist) = fake_assist(greet_engine(docs), TEXT);
    let html = assist.hover().hover(34).unwrap().content.to_html();
    assert!(html.contains("<em>hello</em>"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    assert!(!html.contains("<img"));
}

#[test]
fn hover_at_line_and_character() {
    let (_, assist) = fake_assist(greet_engine(json!([])), TEXT);
    assert!(assist.hover().hover_at(Position::new(1, 2)).is_some());
    assert!(assist.hover().hover_at(Position::new(0, 2)).is_none());
    assert!(assist.hover().hover_at(Position::new(9, 0)).is_none());
}

#[test]
fn engine_failures_mean_no_tooltip() {
    assert!(assist(Arc::new(FailingEngine), TEXT).hover().hover(33).is_none());
    assert!(assist(Arc::new(PanickingEngine), TEXT).hover().hover(33).is_none());
}
