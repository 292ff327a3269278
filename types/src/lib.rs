//! Core value types for tsassist.
//!
//! Two vocabularies live here side by side:
//!
//! - [`engine`]: what the language-analysis engine reports (display parts,
//!   text spans, completion entries, quick info, diagnostics, signature help).
//!   Field names follow the engine's camelCase JSON so results can be
//!   deserialized straight off a host boundary.
//! - [`editor`]: what the editor extension protocol consumes (completion
//!   options, tooltips, lint diagnostics, selection ranges).
//!
//! [`dom`] holds the owned fragment tree used as tooltip content.
//!
//! This crate has no IO and no async; every layer can depend on it.

pub mod dom;
pub mod editor;
pub mod engine;

pub use dom::{Element, Node, escape_html};
pub use editor::{
    Completion, CompletionKind, CompletionResult, Diagnostic, Position, SelectionRange, Severity,
    Tooltip,
};
pub use engine::{
    CompletionEntry, CompletionEntryDetails, CompletionInfo, DisplayPart, EngineDiagnostic,
    MessageChain, MessageText, QuickInfo, ScriptElementKind, SignatureHelpItem,
    SignatureHelpItems, SignatureHelpParameter, TextSpan, display_parts_to_string,
};

use std::fmt;

/// Logical file identifier: the key of one file in the engine's virtual file set.
///
/// One editor instance is bound to exactly one `FileId` for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FileId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
