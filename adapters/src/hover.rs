//! Hover tooltips from quick info.

use tsassist_analysis::AnalysisSession;
use tsassist_render::{Highlighter, docs_node};
use tsassist_types::{Element, Position, Tooltip, display_parts_to_string};

pub const TOOLTIP_CLASS: &str = "cm-quickinfo-tooltip";
pub const CODE_CLASS: &str = "cm-quickinfo-tooltip-code";

#[derive(Debug, Clone)]
pub struct HoverAdapter {
    session: AnalysisSession,
    highlighter: Highlighter,
}

impl HoverAdapter {
    #[must_use]
    pub fn new(session: AnalysisSession, highlighter: Highlighter) -> Self {
        Self {
            session,
            highlighter,
        }
    }

    /// Tooltip for the symbol at `offset`, anchored to the symbol's span.
    #[must_use]
    pub fn hover(&self, offset: u32) -> Option<Tooltip> {
        let quick_info = match self.session.quick_info_at(offset) {
            Ok(Some(info)) => info,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(
                    file = %self.session.file(),
                    offset,
                    %error,
                    "Unable to get quick info"
                );
                return None;
            }
        };

        let mut code = self
            .highlighter
            .code_to_dom(&display_parts_to_string(&quick_info.display_parts));
        code.set_class(CODE_CLASS);

        let mut dom = Element::new("div").with_class(TOOLTIP_CLASS).child(code);
        if let Some(docs) = docs_node(&quick_info.documentation) {
            dom.push(docs);
        }

        let span = quick_info.text_span;
        Some(
            Tooltip::at(span.start, dom.into())
                .spanning(span.end())
                .overlapping(),
        )
    }

    /// [`hover`](Self::hover) at a line/character position.
    ///
    /// Positions past the last line yield no tooltip.
    #[must_use]
    pub fn hover_at(&self, pos: Position) -> Option<Tooltip> {
        let offset = self.session.offset_at(pos)?;
        self.hover(offset)
    }
}
