//! Shared test utilities and fixtures
//!
//! In-memory engines standing in for the language-analysis engine.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tsassist_adapters::TypeScriptAssist;
use tsassist_analysis::{AnalysisEngine, EngineError, EngineQuery, EngineResult};
use tsassist_config::AssistConfig;
use tsassist_types::{
    CompletionEntryDetails, CompletionInfo, EngineDiagnostic, FileId, QuickInfo,
    SignatureHelpItems,
};

pub const FILE: &str = "file:///index.ts";

/// Marker the fake engine reports as a syntax error wherever it appears.
pub const ERROR_MARKER: &str = "???";

/// Deserialize an engine payload from a `json!` fixture.
pub fn fixture<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("valid engine fixture")
}

/// Scriptable engine.
///
/// Completions, details and signature help are keyed by exact offset. Quick
/// info answers anywhere inside its text span. Diagnostics are computed from
/// the last text forwarded through `update_file`: one error per
/// [`ERROR_MARKER`].
#[derive(Default)]
pub struct FakeEngine {
    completions: Vec<(u32, CompletionInfo)>,
    details: Vec<(u32, String, CompletionEntryDetails)>,
    quick_info: Vec<QuickInfo>,
    signature_help: Vec<(u32, SignatureHelpItems)>,
    document: Mutex<String>,
    updates: Mutex<Vec<String>>,
}

impl FakeEngine {
    pub fn new(document: &str) -> Self {
        Self {
            document: Mutex::new(document.to_string()),
            ..Self::default()
        }
    }

    pub fn with_completions(mut self, offset: u32, info: Value) -> Self {
        self.completions.push((offset, fixture(info)));
        self
    }

    pub fn with_details(mut self, offset: u32, name: &str, details: Value) -> Self {
        self.details.push((offset, name.to_string(), fixture(details)));
        self
    }

    pub fn with_quick_info(mut self, info: Value) -> Self {
        self.quick_info.push(fixture(info));
        self
    }

    pub fn with_signature_help(mut self, offset: u32, items: Value) -> Self {
        self.signature_help.push((offset, fixture(items)));
        self
    }

    pub fn updates(&self) -> Vec<String> {
        self.updates.lock().unwrap().clone()
    }
}

impl AnalysisEngine for FakeEngine {
    fn completions_at(&self, _: &FileId, offset: u32) -> EngineResult<Option<CompletionInfo>> {
        Ok(self
            .completions
            .iter()
            .find(|(at, _)| *at == offset)
            .map(|(_, info)| info.clone()))
    }

    fn completion_entry_details(
        &self,
        _: &FileId,
        offset: u32,
        entry_name: &str,
    ) -> EngineResult<Option<CompletionEntryDetails>> {
        Ok(self
            .details
            .iter()
            .find(|(at, name, _)| *at == offset && name == entry_name)
            .map(|(_, _, details)| details.clone()))
    }

    fn quick_info_at(&self, _: &FileId, offset: u32) -> EngineResult<Option<QuickInfo>> {
        Ok(self
            .quick_info
            .iter()
            .find(|info| info.text_span.contains(offset))
            .cloned())
    }

    fn semantic_diagnostics(&self, _: &FileId) -> EngineResult<Vec<EngineDiagnostic>> {
        let document = self.document.lock().unwrap();
        Ok(document
            .match_indices(ERROR_MARKER)
            .map(|(byte, _)| {
                let start = document[..byte].encode_utf16().count() as u32;
                EngineDiagnostic::new(start, 3, 1, "Expression expected.")
            })
            .collect())
    }

    fn signature_help_items(
        &self,
        _: &FileId,
        offset: u32,
    ) -> EngineResult<Option<SignatureHelpItems>> {
        Ok(self
            .signature_help
            .iter()
            .find(|(at, _)| *at == offset)
            .map(|(_, items)| items.clone()))
    }

    fn update_file(&self, _: &FileId, text: &str) -> EngineResult<()> {
        *self.document.lock().unwrap() = text.to_string();
        self.updates.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Every query fails.
pub struct FailingEngine;

impl FailingEngine {
    fn fail<T>(query: EngineQuery) -> EngineResult<T> {
        Err(EngineError::query_failed(query, "engine offline"))
    }
}

impl AnalysisEngine for FailingEngine {
    fn completions_at(&self, _: &FileId, _: u32) -> EngineResult<Option<CompletionInfo>> {
        Self::fail(EngineQuery::Completions)
    }

    fn completion_entry_details(
        &self,
        _: &FileId,
        _: u32,
        _: &str,
    ) -> EngineResult<Option<CompletionEntryDetails>> {
        Self::fail(EngineQuery::CompletionEntryDetails)
    }

    fn quick_info_at(&self, _: &FileId, _: u32) -> EngineResult<Option<QuickInfo>> {
        Self::fail(EngineQuery::QuickInfo)
    }

    fn semantic_diagnostics(&self, _: &FileId) -> EngineResult<Vec<EngineDiagnostic>> {
        Self::fail(EngineQuery::SemanticDiagnostics)
    }

    fn signature_help_items(&self, _: &FileId, _: u32) -> EngineResult<Option<SignatureHelpItems>> {
        Self::fail(EngineQuery::SignatureHelp)
    }

    fn update_file(&self, _: &FileId, _: &str) -> EngineResult<()> {
        Self::fail(EngineQuery::UpdateFile)
    }
}

/// Every query panics.
pub struct PanickingEngine;

impl AnalysisEngine for PanickingEngine {
    fn completions_at(&self, _: &FileId, _: u32) -> EngineResult<Option<CompletionInfo>> {
        panic!("completions exploded")
    }

    fn completion_entry_details(
        &self,
        _: &FileId,
        _: u32,
        _: &str,
    ) -> EngineResult<Option<CompletionEntryDetails>> {
        panic!("details exploded")
    }

    fn quick_info_at(&self, _: &FileId, _: u32) -> EngineResult<Option<QuickInfo>> {
        panic!("quick info exploded")
    }

    fn semantic_diagnostics(&self, _: &FileId) -> EngineResult<Vec<EngineDiagnostic>> {
        panic!("diagnostics exploded")
    }

    fn signature_help_items(&self, _: &FileId, _: u32) -> EngineResult<Option<SignatureHelpItems>> {
        panic!("signature help exploded")
    }

    fn update_file(&self, _: &FileId, _: &str) -> EngineResult<()> {
        panic!("update exploded")
    }
}

/// Adapters over `engine` with default configuration.
pub fn assist(engine: Arc<dyn AnalysisEngine>, text: &str) -> TypeScriptAssist {
    TypeScriptAssist::with_engine(engine, text, &AssistConfig::default())
}

/// [`assist`] over a [`FakeEngine`], keeping a handle to the engine.
pub fn fake_assist(engine: FakeEngine, text: &str) -> (Arc<FakeEngine>, TypeScriptAssist) {
    let engine = Arc::new(engine);
    let assist = assist(engine.clone(), text);
    (engine, assist)
}
