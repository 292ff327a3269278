//! Outbound query surface of the analysis engine.

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use thiserror::Error;
use tsassist_types::{
    CompletionEntryDetails, CompletionInfo, EngineDiagnostic, FileId, QuickInfo,
    SignatureHelpItems,
};

/// Names one outbound engine operation, for errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineQuery {
    Completions,
    CompletionEntryDetails,
    QuickInfo,
    SemanticDiagnostics,
    SignatureHelp,
    UpdateFile,
}

impl EngineQuery {
    /// The engine's own name for the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completions => "getCompletionsAtPosition",
            Self::CompletionEntryDetails => "getCompletionEntryDetails",
            Self::QuickInfo => "getQuickInfoAtPosition",
            Self::SemanticDiagnostics => "getSemanticDiagnostics",
            Self::SignatureHelp => "getSignatureHelpItems",
            Self::UpdateFile => "updateFile",
        }
    }
}

impl fmt::Display for EngineQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{query} failed: {message}")]
    QueryFailed { query: EngineQuery, message: String },
    #[error("file '{file}' is not part of the analysis session")]
    UnknownFile { file: FileId },
    #[error("{query} panicked: {message}")]
    Panicked { query: EngineQuery, message: String },
    #[error("analysis engine unavailable: {0}")]
    Unavailable(String),
}

impl EngineError {
    #[must_use]
    pub fn query_failed(query: EngineQuery, message: impl Into<String>) -> Self {
        Self::QueryFailed {
            query,
            message: message.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

/// A running language-analysis session over a set of virtual files.
///
/// "Nothing to show" is `Ok(None)` (or an empty list); `Err` is reserved for
/// failed queries. Implementations serialize their own queries, so every
/// method takes `&self`.
pub trait AnalysisEngine: Send + Sync {
    fn completions_at(&self, file: &FileId, offset: u32) -> EngineResult<Option<CompletionInfo>>;

    fn completion_entry_details(
        &self,
        file: &FileId,
        offset: u32,
        entry_name: &str,
    ) -> EngineResult<Option<CompletionEntryDetails>>;

    fn quick_info_at(&self, file: &FileId, offset: u32) -> EngineResult<Option<QuickInfo>>;

    fn semantic_diagnostics(&self, file: &FileId) -> EngineResult<Vec<EngineDiagnostic>>;

    fn signature_help_items(
        &self,
        file: &FileId,
        offset: u32,
    ) -> EngineResult<Option<SignatureHelpItems>>;

    /// Replace the full text of `file`.
    fn update_file(&self, file: &FileId, text: &str) -> EngineResult<()>;
}

/// Run one engine call, turning a panic inside the engine into an error.
pub(crate) fn guarded<T>(query: EngineQuery, call: impl FnOnce() -> EngineResult<T>) -> EngineResult<T> {
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(result) => result,
        Err(payload) => Err(EngineError::Panicked {
            query,
            message: panic_payload_to_string(&payload),
        }),
    }
}

fn panic_payload_to_string(payload: &Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
