//! Rendering of engine results into tooltip content.
//!
//! - [`highlight`]: re-tokenizes signature text as a TypeScript snippet and
//!   emits classed spans.
//! - [`markdown`]: documentation display parts → HTML via `pulldown-cmark`.
//! - [`theme`]: the base editor theme the tooltip classes rely on.

pub mod highlight;
pub mod markdown;
pub mod theme;

pub use highlight::{HighlightStyle, HighlightTag, HighlightedRange, Highlighter};
pub use markdown::{docs_node, render_markdown};
pub use theme::{Theme, ThemeRule, base_theme};

/// Class of every documentation block below a signature.
pub const DOCS_CLASS: &str = "cm-tooltip-docs";
