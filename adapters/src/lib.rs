//! Editor extension adapters over the language-analysis engine.
//!
//! Each adapter turns one editor event into engine queries and maps the
//! answer onto the editor's shapes:
//!
//! - [`CompletionAdapter`]: cursor offset → completion options (deferred),
//!   plus a detail panel per entry.
//! - [`HoverAdapter`]: pointer offset → quick-info tooltip.
//! - [`DiagnosticAdapter`]: re-lint → diagnostics for the whole file.
//! - [`SignatureHelpAdapter`]: selection → signature tooltips.
//!
//! All adapters share one [`AnalysisSession`]. Engine failures never escape
//! an adapter; they are logged and degrade to "nothing to show".

pub mod completion;
pub mod hover;
pub mod lint;
pub mod signature;

#[cfg(test)]
mod testing;

use std::sync::Arc;

pub use completion::{CompletionAdapter, CompletionFut, boost_for};
pub use hover::HoverAdapter;
pub use lint::{DiagnosticAdapter, to_diagnostic};
pub use signature::{SignatureHelpAdapter, SignatureTooltips, TooltipState};

use tsassist_analysis::{AnalysisEngine, AnalysisSession};
use tsassist_config::AssistConfig;
use tsassist_render::{HighlightStyle, Highlighter, Theme, base_theme};
use tsassist_types::{FileId, SelectionRange};

/// All four adapters over one session, configured together.
#[derive(Debug, Clone)]
pub struct TypeScriptAssist {
    session: AnalysisSession,
    completion: CompletionAdapter,
    hover: HoverAdapter,
    linter: DiagnosticAdapter,
    signatures: SignatureHelpAdapter,
    theme: Theme,
}

impl TypeScriptAssist {
    #[must_use]
    pub fn new(session: AnalysisSession, config: &AssistConfig) -> Self {
        let highlighter = Highlighter::new(HighlightStyle::from_overrides(
            config.highlight_overrides(),
        ));
        Self {
            completion: CompletionAdapter::new(
                session.clone(),
                highlighter.clone(),
                config.completion(),
            ),
            hover: HoverAdapter::new(session.clone(), highlighter),
            linter: DiagnosticAdapter::new(session.clone()),
            signatures: SignatureHelpAdapter::new(session.clone()),
            theme: base_theme(),
            session,
        }
    }

    /// Bind `engine` to the configured document file and build the adapters.
    #[must_use]
    pub fn with_engine(
        engine: Arc<dyn AnalysisEngine>,
        initial_text: &str,
        config: &AssistConfig,
    ) -> Self {
        let file = FileId::new(config.document_file());
        Self::new(AnalysisSession::new(engine, file, initial_text), config)
    }

    #[must_use]
    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    #[must_use]
    pub fn completion(&self) -> &CompletionAdapter {
        &self.completion
    }

    #[must_use]
    pub fn hover(&self) -> &HoverAdapter {
        &self.hover
    }

    #[must_use]
    pub fn linter(&self) -> &DiagnosticAdapter {
        &self.linter
    }

    #[must_use]
    pub fn signatures(&self) -> &SignatureHelpAdapter {
        &self.signatures
    }

    /// Signature tooltip field seeded with the current selection.
    #[must_use]
    pub fn signature_tooltips(&self, selection: &[SelectionRange]) -> SignatureTooltips {
        SignatureTooltips::create(self.signatures.clone(), selection)
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Forward a document change to the engine.
    ///
    /// Must run before any query that should observe `text`.
    pub fn document_changed(&self, text: &str) {
        if let Err(error) = self.session.update_document(text) {
            tracing::warn!(
                file = %self.session.file(),
                %error,
                "Unable to forward document change"
            );
        }
    }
}
