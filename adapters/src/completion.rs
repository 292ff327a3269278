//! Completion source and detail panel.

use std::future::Future;
use std::pin::Pin;

use tsassist_analysis::AnalysisSession;
use tsassist_config::CompletionConfig;
use tsassist_render::{Highlighter, docs_node};
use tsassist_types::{
    Completion, CompletionEntry, CompletionKind, CompletionResult, Element, Node,
    display_parts_to_string,
};

/// Deferred completion result.
pub type CompletionFut<'a> = Pin<Box<dyn Future<Output = Option<CompletionResult>> + Send + 'a>>;

/// Pattern the typed word must keep matching for a result to be reused.
pub const VALID_FOR: &str = r"^[\w$]*$";

/// Class of the highlighted signature in the detail panel.
pub const INFO_CODE_CLASS: &str = "cm-completionInfo-right-code";

/// Relevance weight for an engine sort key: its reciprocal, capped at
/// `max_boost`.
///
/// Zero and keys small enough to overflow the reciprocal map to `max_boost`.
/// Keys that are not positive finite numbers get a neutral `0.0`.
#[must_use]
pub fn boost_for(sort_text: &str, max_boost: f64) -> f64 {
    match sort_text.trim().parse::<f64>() {
        Ok(key) if key == 0.0 => max_boost,
        Ok(key) if key.is_finite() && key > 0.0 => (1.0 / key).min(max_boost),
        _ => {
            tracing::debug!(sort_text, "Unusable completion sort key; using neutral boost");
            0.0
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompletionAdapter {
    session: AnalysisSession,
    highlighter: Highlighter,
    config: CompletionConfig,
}

impl CompletionAdapter {
    #[must_use]
    pub fn new(session: AnalysisSession, highlighter: Highlighter, config: CompletionConfig) -> Self {
        Self {
            session,
            highlighter,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Whether typing `ch` should start completion explicitly.
    #[must_use]
    pub fn triggers_completion(&self, ch: char) -> bool {
        self.config.trigger_characters.contains(&ch)
    }

    /// Completion options at `offset`.
    ///
    /// The request takes a new generation immediately, superseding any
    /// earlier request still pending; a superseded request resolves to
    /// `None`.
    pub fn complete(&self, offset: u32) -> CompletionFut<'_> {
        let generation = self.session.begin_completion();
        Box::pin(async move {
            let result = self.query(offset);
            if !self.session.is_current(generation) {
                tracing::trace!(
                    offset,
                    generation = generation.value(),
                    "Dropping superseded completion"
                );
                return None;
            }
            result
        })
    }

    fn query(&self, offset: u32) -> Option<CompletionResult> {
        let info = match self.session.completions_at(offset) {
            Ok(Some(info)) => info,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(
                    file = %self.session.file(),
                    offset,
                    %error,
                    "Unable to get completions"
                );
                return None;
            }
        };

        let max_boost = self.config.max_boost();
        let options = info
            .entries
            .iter()
            .map(|entry| to_completion(entry, max_boost))
            .collect();

        Some(CompletionResult {
            from: self.session.word_start(offset),
            to: offset,
            options,
            valid_for: VALID_FOR.to_string(),
        })
    }

    /// Detail panel for one entry: highlighted signature, then docs.
    ///
    /// `offset` is the offset the completion was requested at.
    #[must_use]
    pub fn info(&self, offset: u32, entry_name: &str) -> Option<Node> {
        let details = match self.session.completion_entry_details(offset, entry_name) {
            Ok(Some(details)) => details,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(
                    file = %self.session.file(),
                    offset,
                    entry = entry_name,
                    %error,
                    "Unable to get completion details"
                );
                return None;
            }
        };

        let mut code = self
            .highlighter
            .code_to_dom(&display_parts_to_string(&details.display_parts));
        code.set_class(INFO_CODE_CLASS);

        let mut panel = Element::new("div").child(code);
        if let Some(docs) = docs_node(&details.documentation) {
            panel.push(docs);
        }
        Some(panel.into())
    }
}

fn to_completion(entry: &CompletionEntry, max_boost: f64) -> Completion {
    Completion::new(
        entry.name.clone(),
        CompletionKind::from_engine(&entry.kind),
        boost_for(&entry.sort_text, max_boost),
    )
}
