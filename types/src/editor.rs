//! Shapes consumed by the editor's extension protocol.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dom::Node;
use crate::engine::ScriptElementKind;

/// The editor's completion-kind taxonomy.
///
/// Engine kinds without an editor counterpart pass through as
/// [`CompletionKind::Other`], carrying the engine's own label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompletionKind {
    Class,
    Constant,
    Enum,
    Function,
    Interface,
    Keyword,
    Method,
    Namespace,
    Property,
    Text,
    Type,
    Variable,
    Other(String),
}

impl CompletionKind {
    /// Map an engine kind through the fixed lookup table.
    #[must_use]
    pub fn from_engine(kind: &ScriptElementKind) -> Self {
        match kind {
            ScriptElementKind::Class => Self::Class,
            ScriptElementKind::Keyword => Self::Keyword,
            ScriptElementKind::Interface => Self::Interface,
            ScriptElementKind::Method => Self::Method,
            ScriptElementKind::Module => Self::Namespace,
            ScriptElementKind::Property => Self::Property,
            ScriptElementKind::StringLiteral => Self::Text,
            ScriptElementKind::Type => Self::Type,
            ScriptElementKind::Var => Self::Variable,
            ScriptElementKind::Const => Self::Constant,
            other => Self::Other(other.as_str().to_string()),
        }
    }

    /// Type label the editor uses for icons and styling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Class => "class",
            Self::Constant => "constant",
            Self::Enum => "enum",
            Self::Function => "function",
            Self::Interface => "interface",
            Self::Keyword => "keyword",
            Self::Method => "method",
            Self::Namespace => "namespace",
            Self::Property => "property",
            Self::Text => "text",
            Self::Type => "type",
            Self::Variable => "variable",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for CompletionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "class" => Self::Class,
            "constant" => Self::Constant,
            "enum" => Self::Enum,
            "function" => Self::Function,
            "interface" => Self::Interface,
            "keyword" => Self::Keyword,
            "method" => Self::Method,
            "namespace" => Self::Namespace,
            "property" => Self::Property,
            "text" => Self::Text,
            "type" => Self::Type,
            "variable" => Self::Variable,
            _ => Self::Other(value),
        }
    }
}

impl From<CompletionKind> for String {
    fn from(value: CompletionKind) -> Self {
        match value {
            CompletionKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CompletionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completion option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: CompletionKind,
    /// Ranking weight; higher sorts first.
    pub boost: f64,
}

impl Completion {
    #[must_use]
    pub fn new(label: impl Into<String>, kind: CompletionKind, boost: f64) -> Self {
        Self {
            label: label.into(),
            kind,
            boost,
        }
    }
}

/// Completion options for one request, anchored at the word being typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    /// Start of the word the options replace.
    pub from: u32,
    /// Cursor offset the request was made at.
    pub to: u32,
    pub options: Vec<Completion>,
    /// Pattern the typed word must keep matching for the result to stay valid.
    pub valid_for: String,
}

impl CompletionResult {
    /// Options stably sorted by descending boost.
    #[must_use]
    pub fn ranked(&self) -> Vec<&Completion> {
        let mut ranked: Vec<&Completion> = self.options.iter().collect();
        ranked.sort_by(|a, b| b.boost.partial_cmp(&a.boost).unwrap_or(Ordering::Equal));
        ranked
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Lint severity as the editor names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
    Hint,
    Info,
}

impl Severity {
    /// Engine category order: the category is an index into this list.
    pub const BY_CATEGORY: [Severity; 4] = [
        Severity::Warning,
        Severity::Error,
        Severity::Hint,
        Severity::Info,
    ];

    /// Convert from the engine's numeric category.
    ///
    /// Returns `None` for indices outside the list. Callers (boundary code)
    /// decide the fallback policy.
    #[must_use]
    pub fn from_category(category: i64) -> Option<Self> {
        usize::try_from(category)
            .ok()
            .and_then(|idx| Self::BY_CATEGORY.get(idx).copied())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Hint => "hint",
            Self::Info => "info",
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A flagged document range.
///
/// Fields are private; construction goes through [`Diagnostic::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    from: u32,
    to: u32,
    severity: Severity,
    message: String,
}

impl Diagnostic {
    /// `to` is clamped so the range is never inverted.
    #[must_use]
    pub fn new(from: u32, to: u32, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            from,
            to: to.max(from),
            severity,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn from(&self) -> u32 {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> u32 {
        self.to
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 0-indexed line/character position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// One selection range; empty when anchor and head coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub anchor: u32,
    pub head: u32,
}

impl SelectionRange {
    #[must_use]
    pub const fn new(anchor: u32, head: u32) -> Self {
        Self { anchor, head }
    }

    /// A collapsed range (plain cursor).
    #[must_use]
    pub const fn cursor(pos: u32) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.anchor == self.head
    }
}

/// A positioned tooltip and its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub pos: u32,
    /// End of the span the tooltip belongs to; `None` for point tooltips.
    pub end: Option<u32>,
    /// Prefer showing above the anchor.
    pub above: bool,
    /// Allow covering other tooltips.
    pub overlap: bool,
    pub content: Node,
}

impl Tooltip {
    #[must_use]
    pub fn at(pos: u32, content: Node) -> Self {
        Self {
            pos,
            end: None,
            above: false,
            overlap: false,
            content,
        }
    }

    #[must_use]
    pub fn spanning(mut self, end: u32) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub fn above(mut self) -> Self {
        self.above = true;
        self
    }

    #[must_use]
    pub fn overlapping(mut self) -> Self {
        self.overlap = true;
        self
    }
}
