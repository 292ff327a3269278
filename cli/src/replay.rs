//! Engine that answers from a recorded session instead of analysing code.
//!
//! A recording is a JSON object. Offsets key the per-position answers:
//!
//! ```json
//! {
//!   "document": "console.lo",
//!   "completions": { "10": { "entries": [{ "name": "log", "kind": "method", "sortText": "11" }] } },
//!   "completionDetails": [{ "offset": 10, "entryName": "log", "details": { ... } }],
//!   "quickInfo": { "8": { ... } },
//!   "diagnostics": [{ "start": 0, "length": 7, "category": 1, "messageText": "..." }],
//!   "signatureHelp": { "12": { ... } },
//!   "failures": { "getQuickInfoAtPosition": "engine crashed" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use serde::Deserialize;
use tsassist_analysis::{AnalysisEngine, EngineError, EngineQuery, EngineResult};
use tsassist_types::{
    CompletionEntryDetails, CompletionInfo, EngineDiagnostic, FileId, QuickInfo,
    SignatureHelpItems,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub completions: BTreeMap<u32, CompletionInfo>,
    #[serde(default)]
    pub completion_details: Vec<RecordedDetails>,
    #[serde(default)]
    pub quick_info: BTreeMap<u32, QuickInfo>,
    #[serde(default)]
    pub diagnostics: Vec<EngineDiagnostic>,
    #[serde(default)]
    pub signature_help: BTreeMap<u32, SignatureHelpItems>,
    /// Failure message per engine operation name.
    #[serde(default)]
    pub failures: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedDetails {
    pub offset: u32,
    pub entry_name: String,
    pub details: CompletionEntryDetails,
}

impl Recording {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read recording {}", path.display()))?;
        let recording =
            Self::parse(&text).with_context(|| format!("invalid recording {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            completions = recording.completions.len(),
            quick_info = recording.quick_info.len(),
            diagnostics = recording.diagnostics.len(),
            signature_help = recording.signature_help.len(),
            failures = recording.failures.len(),
            "Loaded recording"
        );
        Ok(recording)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug)]
pub struct ReplayEngine {
    file: FileId,
    recording: Recording,
    document: Mutex<String>,
}

impl ReplayEngine {
    #[must_use]
    pub fn new(file: FileId, recording: Recording) -> Self {
        let document = Mutex::new(recording.document.clone());
        Self {
            file,
            recording,
            document,
        }
    }

    /// Text last forwarded through `update_file`.
    #[must_use]
    pub fn document(&self) -> String {
        self.document
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn check(&self, file: &FileId, query: EngineQuery) -> EngineResult<()> {
        if *file != self.file {
            return Err(EngineError::UnknownFile { file: file.clone() });
        }
        match self.recording.failures.get(query.as_str()) {
            Some(message) => {
                tracing::debug!(query = query.as_str(), "Replaying recorded failure");
                Err(EngineError::query_failed(query, message.clone()))
            }
            None => Ok(()),
        }
    }
}

impl AnalysisEngine for ReplayEngine {
    fn completions_at(&self, file: &FileId, offset: u32) -> EngineResult<Option<CompletionInfo>> {
        self.check(file, EngineQuery::Completions)?;
        Ok(self.recording.completions.get(&offset).cloned())
    }

    fn completion_entry_details(
        &self,
        file: &FileId,
        offset: u32,
        entry_name: &str,
    ) -> EngineResult<Option<CompletionEntryDetails>> {
        self.check(file, EngineQuery::CompletionEntryDetails)?;
        Ok(self
            .recording
            .completion_details
            .iter()
            .find(|d| d.offset == offset && d.entry_name == entry_name)
            .map(|d| d.details.clone()))
    }

    fn quick_info_at(&self, file: &FileId, offset: u32) -> EngineResult<Option<QuickInfo>> {
        self.check(file, EngineQuery::QuickInfo)?;
        Ok(self.recording.quick_info.get(&offset).cloned())
    }

    fn semantic_diagnostics(&self, file: &FileId) -> EngineResult<Vec<EngineDiagnostic>> {
        self.check(file, EngineQuery::SemanticDiagnostics)?;
        Ok(self.recording.diagnostics.clone())
    }

    fn signature_help_items(
        &self,
        file: &FileId,
        offset: u32,
    ) -> EngineResult<Option<SignatureHelpItems>> {
        self.check(file, EngineQuery::SignatureHelp)?;
        Ok(self.recording.signature_help.get(&offset).cloned())
    }

    fn update_file(&self, file: &FileId, text: &str) -> EngineResult<()> {
        self.check(file, EngineQuery::UpdateFile)?;
        *self.document.lock().unwrap_or_else(PoisonError::into_inner) = text.to_string();
        Ok(())
    }
}
