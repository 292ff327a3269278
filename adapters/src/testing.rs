//! Scripted engine shared by the adapter unit tests.

use std::sync::{Arc, Mutex};

use tsassist_analysis::{AnalysisEngine, AnalysisSession, EngineError, EngineQuery, EngineResult};
use tsassist_types::{
    CompletionEntryDetails, CompletionInfo, EngineDiagnostic, FileId, QuickInfo,
    SignatureHelpItems,
};

/// Answers every query with a fixed value, or fails all of them.
#[derive(Default)]
pub(crate) struct ScriptedEngine {
    pub completions: Option<CompletionInfo>,
    pub details: Option<CompletionEntryDetails>,
    pub quick_info: Option<QuickInfo>,
    pub diagnostics: Vec<EngineDiagnostic>,
    pub signature_help: Option<SignatureHelpItems>,
    pub fail: bool,
    pub updates: Mutex<Vec<String>>,
    pub queried_offsets: Mutex<Vec<u32>>,
}

impl ScriptedEngine {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn into_session(self, text: &str) -> (Arc<Self>, AnalysisSession) {
        let engine = Arc::new(self);
        let session = AnalysisSession::new(engine.clone(), FileId::new("file:///index.ts"), text);
        (engine, session)
    }

    fn check(&self, query: EngineQuery, offset: Option<u32>) -> EngineResult<()> {
        if let Some(offset) = offset {
            self.queried_offsets.lock().unwrap().push(offset);
        }
        if self.fail {
            Err(EngineError::query_failed(query, "scripted failure"))
        } else {
            Ok(())
        }
    }
}

impl AnalysisEngine for ScriptedEngine {
    fn completions_at(&self, _: &FileId, offset: u32) -> EngineResult<Option<CompletionInfo>> {
        self.check(EngineQuery::Completions, Some(offset))?;
        Ok(self.completions.clone())
    }

    fn completion_entry_details(
        &self,
        _: &FileId,
        offset: u32,
        _: &str,
    ) -> EngineResult<Option<CompletionEntryDetails>> {
        self.check(EngineQuery::CompletionEntryDetails, Some(offset))?;
        Ok(self.details.clone())
    }

    fn quick_info_at(&self, _: &FileId, offset: u32) -> EngineResult<Option<QuickInfo>> {
        self.check(EngineQuery::QuickInfo, Some(offset))?;
        Ok(self.quick_info.clone())
    }

    fn semantic_diagnostics(&self, _: &FileId) -> EngineResult<Vec<EngineDiagnostic>> {
        self.check(EngineQuery::SemanticDiagnostics, None)?;
        Ok(self.diagnostics.clone())
    }

    fn signature_help_items(
        &self,
        _: &FileId,
        offset: u32,
    ) -> EngineResult<Option<SignatureHelpItems>> {
        self.check(EngineQuery::SignatureHelp, Some(offset))?;
        Ok(self.signature_help.clone())
    }

    fn update_file(&self, _: &FileId, text: &str) -> EngineResult<()> {
        self.check(EngineQuery::UpdateFile, None)?;
        self.updates.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
