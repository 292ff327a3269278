//! Snippet highlighting for engine-rendered signature text.
//!
//! Display text (`function foo(a: string): void`, `(property) Foo.bar: number`)
//! is re-parsed as a standalone TypeScript snippet with tree-sitter. Each leaf
//! token gets a [`HighlightTag`] from its node kind and its parent;
//! a [`HighlightStyle`] turns tags into CSS classes.

use std::collections::HashMap;
use std::ops::Range;

use tree_sitter::{Node as TsNode, Parser, Tree};
use tsassist_types::{Element, Node};

/// Highlight categories a snippet token can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HighlightTag {
    Keyword,
    TypeName,
    VariableName,
    PropertyName,
    FunctionName,
    String,
    Number,
    Bool,
    Null,
    Comment,
    Operator,
    Punctuation,
}

impl HighlightTag {
    pub const ALL: [HighlightTag; 12] = [
        HighlightTag::Keyword,
        HighlightTag::TypeName,
        HighlightTag::VariableName,
        HighlightTag::PropertyName,
        HighlightTag::FunctionName,
        HighlightTag::String,
        HighlightTag::Number,
        HighlightTag::Bool,
        HighlightTag::Null,
        HighlightTag::Comment,
        HighlightTag::Operator,
        HighlightTag::Punctuation,
    ];

    /// Key used for this tag in configuration files.
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::TypeName => "type_name",
            Self::VariableName => "variable_name",
            Self::PropertyName => "property_name",
            Self::FunctionName => "function_name",
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Null => "null",
            Self::Comment => "comment",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
        }
    }

    #[must_use]
    pub fn from_config_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.config_key() == key)
    }

    const fn default_class(self) -> &'static str {
        match self {
            Self::Keyword => "tok-keyword",
            Self::TypeName => "tok-typeName",
            Self::VariableName => "tok-variableName",
            Self::PropertyName => "tok-propertyName",
            Self::FunctionName => "tok-function",
            Self::String => "tok-string",
            Self::Number => "tok-number",
            Self::Bool => "tok-bool",
            Self::Null => "tok-null",
            Self::Comment => "tok-comment",
            Self::Operator => "tok-operator",
            Self::Punctuation => "tok-punctuation",
        }
    }
}

/// Tag → CSS class mapping. Tags without a class render as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStyle {
    classes: HashMap<HighlightTag, String>,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            classes: HighlightTag::ALL
                .into_iter()
                .map(|tag| (tag, tag.default_class().to_string()))
                .collect(),
        }
    }
}

impl HighlightStyle {
    /// A style that classes nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_class(mut self, tag: HighlightTag, class: impl Into<String>) -> Self {
        self.classes.insert(tag, class.into());
        self
    }

    #[must_use]
    pub fn without(mut self, tag: HighlightTag) -> Self {
        self.classes.remove(&tag);
        self
    }

    /// Default style with per-tag overrides keyed by [`HighlightTag::config_key`].
    ///
    /// Unknown keys are logged and ignored; an empty class unstyles the tag.
    pub fn from_overrides<'a>(overrides: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut style = Self::default();
        for (key, class) in overrides {
            let Some(tag) = HighlightTag::from_config_key(key) else {
                tracing::warn!(key, "Ignoring unknown highlight tag");
                continue;
            };
            style = if class.is_empty() {
                style.without(tag)
            } else {
                style.with_class(tag, class)
            };
        }
        style
    }

    #[must_use]
    pub fn class_for(&self, tag: HighlightTag) -> Option<&str> {
        self.classes.get(&tag).map(String::as_str)
    }
}

/// A tagged byte range of the snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedRange {
    pub range: Range<usize>,
    pub tag: HighlightTag,
}

/// Declarations whose `name` field is a callable.
const FUNCTION_DECLARATIONS: &[&str] = &[
    "function_declaration",
    "function_signature",
    "function_expression",
    "generator_function",
    "generator_function_declaration",
    "method_definition",
    "method_signature",
    "abstract_method_signature",
];

const PUNCTUATION: &[&str] = &["(", ")", "[", "]", "{", "}", ",", ";", ":", "."];

fn parse(code: &str) -> Option<Tree> {
    let mut parser = Parser::new();
    if let Err(e) = parser.set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()) {
        tracing::warn!(error = %e, "TypeScript grammar unavailable; snippet left plain");
        return None;
    }
    parser.parse(code, None)
}

fn is_field(parent: TsNode<'_>, field: &str, node: TsNode<'_>) -> bool {
    parent
        .child_by_field_name(field)
        .is_some_and(|child| child.id() == node.id())
}

/// Tag for nodes highlighted as one unit without descending.
fn unit_tag(node: TsNode<'_>) -> Option<HighlightTag> {
    if !node.is_named() {
        return None;
    }
    Some(match node.kind() {
        "comment" | "hash_bang_line" => HighlightTag::Comment,
        "string" | "template_string" | "regex" => HighlightTag::String,
        "number" => HighlightTag::Number,
        "true" | "false" => HighlightTag::Bool,
        "null" | "undefined" => HighlightTag::Null,
        "predefined_type" | "type_identifier" => HighlightTag::TypeName,
        "this" | "super" | "this_type" => HighlightTag::Keyword,
        _ => return None,
    })
}

fn identifier_tag(node: TsNode<'_>) -> HighlightTag {
    let Some(parent) = node.parent() else {
        return HighlightTag::VariableName;
    };
    match parent.kind() {
        kind if FUNCTION_DECLARATIONS.contains(&kind) && is_field(parent, "name", node) => {
            HighlightTag::FunctionName
        }
        "call_expression" if is_field(parent, "function", node) => HighlightTag::FunctionName,
        "variable_declarator"
            if is_field(parent, "name", node)
                && parent
                    .child_by_field_name("value")
                    .is_some_and(|v| matches!(v.kind(), "arrow_function" | "function_expression")) =>
        {
            HighlightTag::FunctionName
        }
        "new_expression" if is_field(parent, "constructor", node) => HighlightTag::TypeName,
        "nested_type_identifier" => HighlightTag::TypeName,
        _ => HighlightTag::VariableName,
    }
}

fn property_tag(node: TsNode<'_>) -> HighlightTag {
    let Some(parent) = node.parent() else {
        return HighlightTag::PropertyName;
    };
    if FUNCTION_DECLARATIONS.contains(&parent.kind()) && is_field(parent, "name", node) {
        return HighlightTag::FunctionName;
    }
    let called = parent.kind() == "member_expression"
        && is_field(parent, "property", node)
        && parent
            .parent()
            .is_some_and(|call| call.kind() == "call_expression" && is_field(call, "function", parent));
    if called {
        HighlightTag::FunctionName
    } else {
        HighlightTag::PropertyName
    }
}

fn leaf_tag(node: TsNode<'_>) -> Option<HighlightTag> {
    let kind = node.kind();
    if !node.is_named() {
        if kind.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Some(HighlightTag::Keyword);
        }
        let in_type_list = node
            .parent()
            .is_some_and(|p| matches!(p.kind(), "type_parameters" | "type_arguments"));
        if PUNCTUATION.contains(&kind) || (in_type_list && matches!(kind, "<" | ">")) {
            return Some(HighlightTag::Punctuation);
        }
        return Some(HighlightTag::Operator);
    }
    match kind {
        "identifier" => Some(identifier_tag(node)),
        "property_identifier" | "private_property_identifier" => Some(property_tag(node)),
        "shorthand_property_identifier" => Some(HighlightTag::PropertyName),
        "shorthand_property_identifier_pattern" | "statement_identifier" => {
            Some(HighlightTag::VariableName)
        }
        _ => None,
    }
}

fn collect(node: TsNode<'_>, out: &mut Vec<HighlightedRange>) {
    let range = node.byte_range();
    // Zero-width nodes are inserted by error recovery.
    if range.is_empty() {
        return;
    }
    let tag = match unit_tag(node) {
        Some(tag) => Some(tag),
        None if node.child_count() == 0 => leaf_tag(node),
        None => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                collect(child, out);
            }
            return;
        }
    };
    if let Some(tag) = tag {
        out.push(HighlightedRange { range, tag });
    }
}

/// Snippet highlighter bound to one style.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    style: HighlightStyle,
}

impl Highlighter {
    #[must_use]
    pub fn new(style: HighlightStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub fn style(&self) -> &HighlightStyle {
        &self.style
    }

    /// Tag every token of `code`, parsed as a TypeScript snippet.
    ///
    /// Display text is rarely a valid program; error recovery still yields
    /// tokens for the parts that parse. Whitespace is left untagged.
    #[must_use]
    pub fn highlight(&self, code: &str) -> Vec<HighlightedRange> {
        let mut out = Vec::new();
        if let Some(tree) = parse(code) {
            collect(tree.root_node(), &mut out);
        }
        out
    }

    /// Render `code` as a `div` of spans covering the whole snippet.
    ///
    /// Styled tokens get their class; text between them (and after the last
    /// one) becomes unclassed spans.
    #[must_use]
    pub fn code_to_dom(&self, code: &str) -> Element {
        let mut dom = Element::new("div");
        let mut last = 0;
        for highlighted in self.highlight(code) {
            let Some(class) = self.style.class_for(highlighted.tag) else {
                continue;
            };
            let Range { start, end } = highlighted.range;
            if start < last {
                continue;
            }
            if start > last {
                dom.push(Element::new("span").child(Node::text(&code[last..start])));
            }
            dom.push(
                Element::new("span")
                    .with_class(class)
                    .child(Node::text(&code[start..end])),
            );
            last = end;
        }
        if last < code.len() {
            dom.push(Element::new("span").child(Node::text(&code[last..])));
        }
        dom
    }
}
