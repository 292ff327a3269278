//! Signature-help tooltip tests

use std::sync::Arc;

use serde_json::{Value, json};
use tsassist_adapters::TooltipState;
use tsassist_types::SelectionRange;

use crate::common::{FailingEngine, FakeEngine, PanickingEngine, assist, fake_assist};

const TEXT: &str = "setTimeout(cb, 10)";

fn parts(text: &str) -> Value {
    json!([{ "text": text, "kind": "text" }])
}

fn help(argument_index: i64) -> Value {
    json!({
        "items": [{
            "isVariadic": false,
            "prefixDisplayParts": parts("setTimeout("),
            "suffixDisplayParts": parts("): number"),
            "separatorDisplayParts": parts(", "),
            "parameters": [
                { "name": "handler", "displayParts": parts("handler: TimerHandler"), "documentation": parts("Code to run."), "isOptional": false },
                { "name": "timeout", "displayParts": parts("timeout?: number"), "documentation": [], "isOptional": true }
            ],
            "documentation": parts("Schedules `handler`.")
        }],
        "applicableSpan": { "start": 11, "length": 6 },
        "selectedItemIndex": 0,
        "argumentIndex": argument_index,
        "argumentCount": 2
    })
}

fn code_html(assist: &tsassist_adapters::TypeScriptAssist, head: u32) -> String {
    let tooltip = assist.signatures().tooltip_at(head).unwrap();
    let code = tooltip.content.find_by_class("cm-tooltip-param-code");
    tsassist_types::Node::from(code[0].clone()).to_html()
}

#[test]
fn active_parameter_is_bold() {
    let engine = FakeEngine::new(TEXT)
        .with_signature_help(11, help(0))
        .with_signature_help(15, help(1));
    let (_, assist) = fake_assist(engine, TEXT);

    assert_eq!(
        code_html(&assist, 11),
        "<div class=\"cm-tooltip-param-code\">setTimeout(<b>handler: TimerHandler</b>, timeout?: number): number</div>"
    );
    assert_eq!(
        code_html(&assist, 15),
        "<div class=\"cm-tooltip-param-code\">setTimeout(handler: TimerHandler, <b>timeout?: number</b>): number</div>"
    );
}

#[test]
fn no_active_parameter_outside_argument_list() {
    let engine = FakeEngine::new(TEXT).with_signature_help(11, help(-1));
    let (_, assist) = fake_assist(engine, TEXT);
    assert!(!code_html(&assist, 11).contains("<b>"));
}

#[test]
fn tooltip_sits_above_cursor_with_docs() {
    let engine = FakeEngine::new(TEXT).with_signature_help(11, help(0));
    let (_, assist) = fake_assist(engine, TEXT);

    let tooltip = assist.signatures().tooltip_at(11).unwrap();
    assert_eq!(tooltip.pos, 11);
    assert!(tooltip.above);
    assert!(tooltip.overlap);

    let root = tooltip.content.as_element().unwrap();
    assert_eq!(root.class.as_deref(), Some("cm-tooltip-parameters"));
    let docs = tooltip.content.find_by_class("cm-tooltip-docs");
    assert_eq!(docs.len(), 2);
    let html = tooltip.content.to_html();
    assert!(html.contains("<p>Schedules <code>handler</code>.</p>"));
    assert!(html.contains("<p>Code to run.</p>"));
}

#[test]
fn selection_field_follows_cursors() {
    let engine = FakeEngine::new(TEXT).with_signature_help(11, help(0));
    let (_, assist) = fake_assist(engine, TEXT);

    let mut field = assist.signature_tooltips(&[SelectionRange::cursor(11)]);
    assert_eq!(field.state(), TooltipState::Displaying);

    // A non-empty range never queries; the cursor at 3 has no help.
    let tooltips =
        field.update(&[SelectionRange::new(11, 14), SelectionRange::cursor(3)]);
    assert!(tooltips.is_empty());
    assert_eq!(field.state(), TooltipState::Hidden);

    field.update(&[SelectionRange::cursor(11), SelectionRange::cursor(11)]);
    assert_eq!(field.tooltips().len(), 2);

    field.update(&[SelectionRange::new(0, 4)]);
    assert_eq!(field.state(), TooltipState::Idle);
}

#[test]
fn engine_failures_mean_no_tooltips() {
    for engine in [
        assist(Arc::new(FailingEngine), TEXT),
        assist(Arc::new(PanickingEngine), TEXT),
    ] {
        let field = engine.signature_tooltips(&[SelectionRange::cursor(11)]);
        assert!(field.tooltips().is_empty());
        assert_eq!(field.state(), TooltipState::Hidden);
    }
}
