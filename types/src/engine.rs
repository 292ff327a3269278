//! Results reported by the language-analysis engine.
//!
//! These mirror the engine's own shapes. Optional collections default to
//! empty so partial payloads still deserialize.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One tagged fragment of engine-rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPart {
    pub text: String,
    #[serde(default)]
    pub kind: String,
}

impl DisplayPart {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
        }
    }

    /// Untagged text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, "text")
    }
}

/// Concatenate the text of every part.
#[must_use]
pub fn display_parts_to_string(parts: &[DisplayPart]) -> String {
    parts.iter().map(|p| p.text.as_str()).collect()
}

/// A span of source text, as an offset plus length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: u32,
    pub length: u32,
}

impl TextSpan {
    #[must_use]
    pub const fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    #[must_use]
    pub const fn end(self) -> u32 {
        self.start.saturating_add(self.length)
    }

    #[must_use]
    pub const fn contains(self, offset: u32) -> bool {
        offset >= self.start && offset < self.end()
    }
}

/// The engine's element-kind taxonomy.
///
/// Parsing never fails: kinds this enum does not know are kept verbatim in
/// [`ScriptElementKind::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScriptElementKind {
    Keyword,
    Script,
    Module,
    Class,
    LocalClass,
    Interface,
    Type,
    Enum,
    EnumMember,
    Var,
    LocalVar,
    Let,
    Const,
    Function,
    LocalFunction,
    Method,
    Getter,
    Setter,
    Property,
    Accessor,
    Constructor,
    Parameter,
    TypeParameter,
    PrimitiveType,
    Alias,
    Label,
    Directory,
    ExternalModuleName,
    JsxAttribute,
    StringLiteral,
    Unknown(String),
}

impl ScriptElementKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Keyword => "keyword",
            Self::Script => "script",
            Self::Module => "module",
            Self::Class => "class",
            Self::LocalClass => "local class",
            Self::Interface => "interface",
            Self::Type => "type",
            Self::Enum => "enum",
            Self::EnumMember => "enum member",
            Self::Var => "var",
            Self::LocalVar => "local var",
            Self::Let => "let",
            Self::Const => "const",
            Self::Function => "function",
            Self::LocalFunction => "local function",
            Self::Method => "method",
            Self::Getter => "getter",
            Self::Setter => "setter",
            Self::Property => "property",
            Self::Accessor => "accessor",
            Self::Constructor => "constructor",
            Self::Parameter => "parameter",
            Self::TypeParameter => "type parameter",
            Self::PrimitiveType => "primitive type",
            Self::Alias => "alias",
            Self::Label => "label",
            Self::Directory => "directory",
            Self::ExternalModuleName => "external module name",
            Self::JsxAttribute => "JSX attribute",
            Self::StringLiteral => "string",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for ScriptElementKind {
    fn from(value: &str) -> Self {
        match value {
            "keyword" => Self::Keyword,
            "script" => Self::Script,
            "module" => Self::Module,
            "class" => Self::Class,
            "local class" => Self::LocalClass,
            "interface" => Self::Interface,
            "type" => Self::Type,
            "enum" => Self::Enum,
            "enum member" => Self::EnumMember,
            "var" => Self::Var,
            "local var" => Self::LocalVar,
            "let" => Self::Let,
            "const" => Self::Const,
            "function" => Self::Function,
            "local function" => Self::LocalFunction,
            "method" => Self::Method,
            "getter" => Self::Getter,
            "setter" => Self::Setter,
            "property" => Self::Property,
            "accessor" => Self::Accessor,
            "constructor" => Self::Constructor,
            "parameter" => Self::Parameter,
            "type parameter" => Self::TypeParameter,
            "primitive type" => Self::PrimitiveType,
            "alias" => Self::Alias,
            "label" => Self::Label,
            "directory" => Self::Directory,
            "external module name" => Self::ExternalModuleName,
            "JSX attribute" => Self::JsxAttribute,
            "string" => Self::StringLiteral,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ScriptElementKind {
    fn from(value: String) -> Self {
        match Self::from(value.as_str()) {
            Self::Unknown(_) => Self::Unknown(value),
            known => known,
        }
    }
}

impl From<ScriptElementKind> for String {
    fn from(value: ScriptElementKind) -> Self {
        match value {
            ScriptElementKind::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ScriptElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion list returned for one offset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionInfo {
    #[serde(default)]
    pub is_member_completion: bool,
    #[serde(default)]
    pub is_new_identifier_location: bool,
    #[serde(default)]
    pub entries: Vec<CompletionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    pub name: String,
    pub kind: ScriptElementKind,
    /// Relevance key; numerically smaller sorts first.
    pub sort_text: String,
}

impl CompletionEntry {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<ScriptElementKind>,
        sort_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            sort_text: sort_text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntryDetails {
    pub name: String,
    pub kind: ScriptElementKind,
    #[serde(default)]
    pub display_parts: Vec<DisplayPart>,
    #[serde(default)]
    pub documentation: Vec<DisplayPart>,
}

/// Type/signature summary of the symbol at an offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickInfo {
    pub kind: ScriptElementKind,
    pub text_span: TextSpan,
    #[serde(default)]
    pub display_parts: Vec<DisplayPart>,
    #[serde(default)]
    pub documentation: Vec<DisplayPart>,
}

/// Diagnostic message: either plain text or a nested chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageText {
    Text(String),
    Chain(MessageChain),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageChain {
    pub message_text: String,
    #[serde(default)]
    pub category: i64,
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub next: Vec<MessageChain>,
}

impl MessageText {
    /// Flatten into a single string.
    ///
    /// Each nested chain level starts on a new line, indented two spaces per depth.
    #[must_use]
    pub fn flatten(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Chain(chain) => {
                let mut out = String::new();
                flatten_chain(chain, 0, &mut out);
                out
            }
        }
    }
}

fn flatten_chain(chain: &MessageChain, depth: usize, out: &mut String) {
    if depth > 0 {
        out.push('\n');
        out.push_str(&"  ".repeat(depth));
    }
    out.push_str(&chain.message_text);
    for next in &chain.next {
        flatten_chain(next, depth + 1, out);
    }
}

impl From<&str> for MessageText {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineDiagnostic {
    pub start: Option<u32>,
    pub length: Option<u32>,
    /// Index into the editor severity order; see `Severity::from_category`.
    pub category: i64,
    #[serde(default)]
    pub code: u32,
    pub message_text: MessageText,
    #[serde(default)]
    pub source: Option<String>,
}

impl EngineDiagnostic {
    #[must_use]
    pub fn new(start: u32, length: u32, category: i64, message: impl Into<MessageText>) -> Self {
        Self {
            start: Some(start),
            length: Some(length),
            category,
            code: 0,
            message_text: message.into(),
            source: None,
        }
    }
}

/// Signature overloads applicable at an offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpItems {
    #[serde(default)]
    pub items: Vec<SignatureHelpItem>,
    #[serde(default)]
    pub applicable_span: TextSpan,
    pub selected_item_index: i64,
    /// Active argument; `-1` when the cursor is outside the argument list.
    pub argument_index: i64,
    #[serde(default)]
    pub argument_count: u32,
}

impl SignatureHelpItems {
    /// The overload the engine selected, if the index is in range.
    #[must_use]
    pub fn selected_item(&self) -> Option<&SignatureHelpItem> {
        usize::try_from(self.selected_item_index)
            .ok()
            .and_then(|idx| self.items.get(idx))
    }

    /// Index of the active parameter of the selected overload, if any.
    #[must_use]
    pub fn active_parameter(&self) -> Option<usize> {
        let idx = usize::try_from(self.argument_index).ok()?;
        let item = self.selected_item()?;
        (idx < item.parameters.len()).then_some(idx)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpItem {
    #[serde(default)]
    pub is_variadic: bool,
    #[serde(default)]
    pub prefix_display_parts: Vec<DisplayPart>,
    #[serde(default)]
    pub suffix_display_parts: Vec<DisplayPart>,
    #[serde(default)]
    pub separator_display_parts: Vec<DisplayPart>,
    #[serde(default)]
    pub parameters: Vec<SignatureHelpParameter>,
    #[serde(default)]
    pub documentation: Vec<DisplayPart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpParameter {
    pub name: String,
    #[serde(default)]
    pub display_parts: Vec<DisplayPart>,
    #[serde(default)]
    pub documentation: Vec<DisplayPart>,
    #[serde(default)]
    pub is_optional: bool,
}
