//! Semantic diagnostics as editor lint ranges.

use tsassist_analysis::AnalysisSession;
use tsassist_types::{Diagnostic, EngineDiagnostic, Severity};

#[derive(Debug, Clone)]
pub struct DiagnosticAdapter {
    session: AnalysisSession,
}

impl DiagnosticAdapter {
    #[must_use]
    pub fn new(session: AnalysisSession) -> Self {
        Self { session }
    }

    /// Diagnostics for the whole bound file. Engine failures yield none.
    #[must_use]
    pub fn lint(&self) -> Vec<Diagnostic> {
        match self.session.semantic_diagnostics() {
            Ok(diagnostics) => diagnostics.iter().map(to_diagnostic).collect(),
            Err(error) => {
                tracing::warn!(
                    file = %self.session.file(),
                    %error,
                    "Unable to get diagnostics"
                );
                Vec::new()
            }
        }
    }
}

/// Map one engine diagnostic onto an editor range.
///
/// A missing start or length counts as zero; an unknown category is `info`.
#[must_use]
pub fn to_diagnostic(diagnostic: &EngineDiagnostic) -> Diagnostic {
    let from = diagnostic.start.unwrap_or(0);
    let to = from.saturating_add(diagnostic.length.unwrap_or(0));
    let severity = Severity::from_category(diagnostic.category).unwrap_or_else(|| {
        tracing::debug!(
            category = diagnostic.category,
            code = diagnostic.code,
            "Unknown diagnostic category; reporting as info"
        );
        Severity::Info
    });
    Diagnostic::new(from, to, severity, diagnostic.message_text.flatten())
}
