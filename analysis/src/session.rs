//! Owned editing session: one engine handle bound to one logical file.
//!
//! Every adapter holds a clone of the same session. The session keeps a
//! mirror of the bound document (for offset translation), forwards document
//! changes to the engine, and hands out completion generations so a
//! superseded completion request can be recognised when it resolves.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tsassist_types::{
    CompletionEntryDetails, CompletionInfo, EngineDiagnostic, FileId, Position, QuickInfo,
    SignatureHelpItems,
};

use crate::engine::{AnalysisEngine, EngineQuery, EngineResult, guarded};
use crate::files::VirtualFiles;
use crate::line_index::{LineIndex, utf16_len, utf16_to_byte};

/// Token identifying one completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

struct Document {
    files: VirtualFiles,
    index: LineIndex,
}

#[derive(Clone)]
pub struct AnalysisSession {
    engine: Arc<dyn AnalysisEngine>,
    file: FileId,
    document: Arc<RwLock<Document>>,
    generation: Arc<AtomicU64>,
}

impl fmt::Debug for AnalysisSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisSession")
            .field("file", &self.file)
            .field("generation", &self.generation.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl AnalysisSession {
    /// Bind `engine` to `file`. The engine is assumed to already hold
    /// `initial_text`; nothing is forwarded here.
    pub fn new(engine: Arc<dyn AnalysisEngine>, file: FileId, initial_text: &str) -> Self {
        let mut files = VirtualFiles::new();
        files.insert(file.clone(), initial_text);
        Self {
            engine,
            file,
            document: Arc::new(RwLock::new(Document {
                files,
                index: LineIndex::new(initial_text),
            })),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    #[must_use]
    pub fn file(&self) -> &FileId {
        &self.file
    }

    #[must_use]
    pub fn engine(&self) -> &Arc<dyn AnalysisEngine> {
        &self.engine
    }

    /// Current text of the bound document.
    #[must_use]
    pub fn document_text(&self) -> String {
        let doc = self.document.read().unwrap_or_else(PoisonError::into_inner);
        doc.files.get(&self.file).unwrap_or_default().to_string()
    }

    /// Forward new document text to the engine.
    ///
    /// The mirror is updated first so offset translation follows the editor
    /// even if the engine rejects the update. The engine receives the text
    /// with a trailing newline.
    pub fn update_document(&self, text: &str) -> EngineResult<()> {
        {
            let mut doc = self.document.write().unwrap_or_else(PoisonError::into_inner);
            doc.files.insert(self.file.clone(), text);
            doc.index = LineIndex::new(text);
        }
        let forwarded = format!("{text}\n");
        guarded(EngineQuery::UpdateFile, || {
            self.engine.update_file(&self.file, &forwarded)
        })
    }

    /// Offset of a line/character position in the current document.
    #[must_use]
    pub fn offset_at(&self, pos: Position) -> Option<u32> {
        let doc = self.document.read().unwrap_or_else(PoisonError::into_inner);
        doc.index.offset(pos)
    }

    #[must_use]
    pub fn position_at(&self, offset: u32) -> Position {
        let doc = self.document.read().unwrap_or_else(PoisonError::into_inner);
        doc.index.position(offset)
    }

    /// Start of the identifier word ending at `offset`.
    ///
    /// Identifier characters are ASCII alphanumerics, `_` and `$`.
    #[must_use]
    pub fn word_start(&self, offset: u32) -> u32 {
        let doc = self.document.read().unwrap_or_else(PoisonError::into_inner);
        let text = doc.files.get(&self.file).unwrap_or_default();
        let end = utf16_to_byte(text, offset);
        let before = &text[..end];
        // Word characters are ASCII, so the char count is the byte count.
        let word_bytes = before
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
            .count();
        utf16_len(&before[..end - word_bytes])
    }

    /// Take a new completion generation, superseding every earlier one.
    pub fn begin_completion(&self) -> Generation {
        Generation(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `generation` is still the latest completion request.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation.load(Ordering::SeqCst) == generation.0
    }

    pub fn completions_at(&self, offset: u32) -> EngineResult<Option<CompletionInfo>> {
        guarded(EngineQuery::Completions, || {
            self.engine.completions_at(&self.file, offset)
        })
    }

    pub fn completion_entry_details(
        &self,
        offset: u32,
        entry_name: &str,
    ) -> EngineResult<Option<CompletionEntryDetails>> {
        guarded(EngineQuery::CompletionEntryDetails, || {
            self.engine
                .completion_entry_details(&self.file, offset, entry_name)
        })
    }

    pub fn quick_info_at(&self, offset: u32) -> EngineResult<Option<QuickInfo>> {
        guarded(EngineQuery::QuickInfo, || {
            self.engine.quick_info_at(&self.file, offset)
        })
    }

    pub fn semantic_diagnostics(&self) -> EngineResult<Vec<EngineDiagnostic>> {
        guarded(EngineQuery::SemanticDiagnostics, || {
            self.engine.semantic_diagnostics(&self.file)
        })
    }

    pub fn signature_help_items(&self, offset: u32) -> EngineResult<Option<SignatureHelpItems>> {
        guarded(EngineQuery::SignatureHelp, || {
            self.engine.signature_help_items(&self.file, offset)
        })
    }
}
