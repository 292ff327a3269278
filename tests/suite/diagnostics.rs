//! Lint adapter tests

use std::sync::Arc;

use serde_json::json;
use tsassist_adapters::to_diagnostic;
use tsassist_types::{Diagnostic, EngineDiagnostic, Severity};

use crate::common::{FailingEngine, FakeEngine, PanickingEngine, assist, fake_assist, fixture};

#[test]
fn maps_engine_diagnostic_to_range() {
    let engine: EngineDiagnostic =
        fixture(json!({ "start": 5, "length": 3, "category": 1, "code": 2304, "messageText": "x" }));
    let diagnostic = to_diagnostic(&engine);
    assert_eq!(
        serde_json::to_value(&diagnostic).unwrap(),
        json!({ "from": 5, "to": 8, "severity": "error", "message": "x" })
    );
}

#[test]
fn severity_is_deterministic_per_category() {
    for category in -2..8 {
        let engine = EngineDiagnostic::new(0, 1, category, "m");
        let first = to_diagnostic(&engine).severity();
        let second = to_diagnostic(&engine).severity();
        assert_eq!(first, second);
        assert!(Severity::BY_CATEGORY.contains(&first));
    }
}

#[test]
fn chained_message_without_span() {
    let engine: EngineDiagnostic = fixture(json!({
        "category": 1,
        "code": 2345,
        "messageText": {
            "messageText": "Argument of type 'string' is not assignable to parameter of type 'number'.",
            "category": 1,
            "code": 2345,
            "next": [{ "messageText": "Type 'string' is not assignable to type 'number'.", "category": 1, "code": 2322 }]
        }
    }));
    let diagnostic = to_diagnostic(&engine);
    assert_eq!((diagnostic.from(), diagnostic.to()), (0, 0));
    assert_eq!(
        diagnostic.message(),
        "Argument of type 'string' is not assignable to parameter of type 'number'.\n  Type 'string' is not assignable to type 'number'."
    );
}

#[test]
fn forwarded_edits_are_reflected_in_lint() {
    let (engine, assist) = fake_assist(FakeEngine::new("let a = 1;"), "let a = 1;");
    assert!(assist.linter().lint().is_empty());

    assist.document_changed("let a = ???;");
    assert_eq!(
        assist.linter().lint(),
        vec![Diagnostic::new(8, 11, Severity::Error, "Expression expected.")]
    );

    assist.document_changed("let a = 2;");
    assert!(assist.linter().lint().is_empty());
    assert_eq!(engine.updates().len(), 2);
}

#[test]
fn offsets_are_utf16_units() {
    let text = "const s = \"😀\"; ???";
    let (_, assist) = fake_assist(FakeEngine::new(""), "");
    assist.document_changed(text);

    let diagnostics = assist.linter().lint();
    assert_eq!(diagnostics.len(), 1);
    // '😀' counts as two units.
    assert_eq!(diagnostics[0].from(), 16);
    assert_eq!(
        assist.session().position_at(diagnostics[0].from()),
        tsassist_types::Position::new(0, 16)
    );
}

#[test]
fn engine_failures_degrade_to_empty() {
    assert!(assist(Arc::new(FailingEngine), "").linter().lint().is_empty());
    assert!(assist(Arc::new(PanickingEngine), "").linter().lint().is_empty());
}
