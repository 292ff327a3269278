//! Document forwarding and session sharing tests

use std::sync::Arc;

use tsassist_analysis::VirtualFiles;
use tsassist_render::{Highlighter, base_theme};
use tsassist_types::{FileId, Node, Position};

use crate::common::{FILE, FailingEngine, FakeEngine, PanickingEngine, assist, fake_assist};

#[test]
fn document_changes_reach_engine_with_trailing_newline() {
    let (engine, assist) = fake_assist(FakeEngine::new(""), "");
    assist.document_changed("let a = 1;");
    assist.document_changed("let a = 12;");
    assert_eq!(engine.updates(), vec!["let a = 1;\n", "let a = 12;\n"]);
    assert_eq!(assist.session().file(), &FileId::new(FILE));
}

#[test]
fn adapters_share_one_document_mirror() {
    let (_, assist) = fake_assist(FakeEngine::new(""), "a");
    assist.document_changed("first\nsecond");
    assert_eq!(assist.session().offset_at(Position::new(1, 3)), Some(9));
    assert_eq!(assist.session().word_start(12), 6);
}

#[test]
fn failed_forwarding_is_not_fatal() {
    let failing = assist(Arc::new(FailingEngine), "");
    failing.document_changed("x");
    assert_eq!(failing.session().document_text(), "x");

    let panicking = assist(Arc::new(PanickingEngine), "");
    panicking.document_changed("y");
    assert_eq!(panicking.session().document_text(), "y");
}

#[test]
fn library_files_seed_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("lib.dom.d.ts"), "declare var window: Window;").unwrap();

    let mut files = VirtualFiles::new();
    assert_eq!(files.load_dir(dir.path(), "/").unwrap(), 1);
    assert!(files.contains(&FileId::new("/lib.dom.d.ts")));
}

#[test]
fn highlighted_text_round_trips() {
    let highlighter = Highlighter::default();
    for snippet in [
        "(method) Array<number>.map<U>(callbackfn: (value: number) => U): U[]",
        "const x: \"a\" | 'b' | `c` // trailing",
        "let ünïcode = 0b1010n;   ",
        "",
    ] {
        let node: Node = highlighter.code_to_dom(snippet).into();
        assert_eq!(node.text_content(), snippet);
    }
}

#[test]
fn theme_styles_every_tooltip_class() {
    let css = base_theme().to_css();
    for class in [
        "cm-tooltip-parameters",
        "cm-quickinfo-tooltip",
        "cm-completionInfo-right",
        "cm-quickinfo-tooltip-code",
        "cm-tooltip-param-code",
        "cm-completionInfo-right-code",
        "cm-tooltip-docs",
    ] {
        assert!(css.contains(&format!(".{class}")), "{class}");
    }
}
