//! Signature-help tooltips over the cursor.
//!
//! Recomputed from scratch on every selection change: each empty range
//! queries signature help at its head and contributes at most one tooltip.
//! Nothing is cached across positions.

use tsassist_analysis::AnalysisSession;
use tsassist_render::docs_node;
use tsassist_types::{
    Element, Node, SelectionRange, SignatureHelpItem, SignatureHelpItems, Tooltip,
    display_parts_to_string,
};

pub const TOOLTIP_CLASS: &str = "cm-tooltip-parameters";
pub const CODE_CLASS: &str = "cm-tooltip-param-code";

#[derive(Debug, Clone)]
pub struct SignatureHelpAdapter {
    session: AnalysisSession,
}

impl SignatureHelpAdapter {
    #[must_use]
    pub fn new(session: AnalysisSession) -> Self {
        Self { session }
    }

    /// One tooltip per empty range that has signature help.
    #[must_use]
    pub fn tooltips(&self, selection: &[SelectionRange]) -> Vec<Tooltip> {
        selection
            .iter()
            .filter(|range| range.is_empty())
            .filter_map(|range| self.tooltip_at(range.head))
            .collect()
    }

    /// Signature tooltip for a cursor at `head`.
    #[must_use]
    pub fn tooltip_at(&self, head: u32) -> Option<Tooltip> {
        let items = match self.session.signature_help_items(head) {
            Ok(Some(items)) => items,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(
                    file = %self.session.file(),
                    offset = head,
                    %error,
                    "Unable to get signature help"
                );
                return None;
            }
        };

        let Some(item) = items.selected_item() else {
            if !items.items.is_empty() {
                tracing::debug!(
                    selected = items.selected_item_index,
                    overloads = items.items.len(),
                    "Selected signature out of range"
                );
            }
            return None;
        };

        Some(
            Tooltip::at(head, render_signature(&items, item))
                .above()
                .overlapping(),
        )
    }
}

fn render_signature(items: &SignatureHelpItems, item: &SignatureHelpItem) -> Node {
    let active = items.active_parameter();
    let separator = display_parts_to_string(&item.separator_display_parts);

    let mut code = Element::new("div").with_class(CODE_CLASS);
    code.push(Node::text(display_parts_to_string(&item.prefix_display_parts)));
    for (i, param) in item.parameters.iter().enumerate() {
        if i > 0 {
            code.push(Node::text(separator.clone()));
        }
        let text = display_parts_to_string(&param.display_parts);
        if active == Some(i) {
            code.push(Element::new("b").child(Node::text(text)));
        } else {
            code.push(Node::text(text));
        }
    }
    code.push(Node::text(display_parts_to_string(&item.suffix_display_parts)));

    let mut dom = Element::new("div").with_class(TOOLTIP_CLASS).child(code);
    if let Some(docs) = docs_node(&item.documentation) {
        dom.push(docs);
    }
    for param in &item.parameters {
        if let Some(docs) = docs_node(&param.documentation) {
            dom.push(docs);
        }
    }
    dom.into()
}

/// Lifecycle of a tooltip set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipState {
    /// Nothing queried: no empty range in the selection.
    Idle,
    /// Transitional: held only while `update` runs its synchronous queries,
    /// so callers never observe it.
    Querying,
    Displaying,
    /// Queried, but no range produced a tooltip.
    Hidden,
}

/// Current signature tooltips for an editor state.
#[derive(Debug, Clone)]
pub struct SignatureTooltips {
    adapter: SignatureHelpAdapter,
    tooltips: Vec<Tooltip>,
    state: TooltipState,
}

impl SignatureTooltips {
    #[must_use]
    pub fn create(adapter: SignatureHelpAdapter, selection: &[SelectionRange]) -> Self {
        let mut field = Self {
            adapter,
            tooltips: Vec::new(),
            state: TooltipState::Idle,
        };
        field.update(selection);
        field
    }

    /// Recompute for a new selection. Previous tooltips are discarded.
    pub fn update(&mut self, selection: &[SelectionRange]) -> &[Tooltip] {
        self.tooltips.clear();
        if !selection.iter().any(|range| range.is_empty()) {
            self.state = TooltipState::Idle;
            return &self.tooltips;
        }

        self.state = TooltipState::Querying;
        self.tooltips = self.adapter.tooltips(selection);
        self.state = if self.tooltips.is_empty() {
            TooltipState::Hidden
        } else {
            TooltipState::Displaying
        };
        &self.tooltips
    }

    #[must_use]
    pub fn tooltips(&self) -> &[Tooltip] {
        &self.tooltips
    }

    #[must_use]
    pub fn state(&self) -> TooltipState {
        self.state
    }
}
