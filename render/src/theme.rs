//! Base editor theme for the assist tooltips.
//!
//! The class names here are the ones the adapters put on their DOM output.

use std::fmt::Write as _;

use serde::Serialize;

/// Palette and font constants shared by the rules.
mod colors {
    pub const BORDER: &str = "#454545";
    pub const MATCHED_TEXT: &str = "#2aaaff";
    pub const SELECTED_BG: &str = "#04395e";
    pub const LINK: &str = "#3794ff";

    pub const MONOSPACE: &str =
        r#"Menlo, Monaco, Consolas, "Andale Mono", "Ubuntu Mono", "Courier New", monospace"#;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeRule {
    pub selector: String,
    /// `(property, value)` pairs in declaration order.
    pub declarations: Vec<(String, String)>,
}

impl ThemeRule {
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    #[must_use]
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    /// Value of the first declaration of `property`.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub rules: Vec<ThemeRule>,
}

impl Theme {
    #[must_use]
    pub fn rule(&self, selector: &str) -> Option<&ThemeRule> {
        self.rules.iter().find(|r| r.selector == selector)
    }

    /// Serialize as a CSS stylesheet, one rule block per selector.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            let _ = writeln!(css, "{} {{", rule.selector);
            for (property, value) in &rule.declarations {
                let _ = writeln!(css, "  {property}: {value};");
            }
            css.push_str("}\n");
        }
        css
    }
}

#[must_use]
pub fn base_theme() -> Theme {
    Theme {
        rules: vec![
            ThemeRule::new(".cm-tooltip")
                .declare("max-width", "700px")
                .declare("max-height", "250px")
                .declare("border", format!("1px solid {}", colors::BORDER)),
            ThemeRule::new(".cm-tooltip-parameters, .cm-quickinfo-tooltip, .cm-completionInfo-right")
                .declare("overflow-y", "scroll"),
            ThemeRule::new(
                ".cm-quickinfo-tooltip-code, .cm-tooltip-param-code, .cm-completionInfo-right-code",
            )
            .declare("white-space", "pre-wrap")
            .declare("padding", "8px")
            .declare("font-family", colors::MONOSPACE),
            ThemeRule::new(".cm-tooltip-docs")
                .declare("padding", "8px")
                .declare("border-top", format!("1px solid {}", colors::BORDER)),
            ThemeRule::new(".cm-tooltip-docs p:first-child").declare("margin-top", "0"),
            ThemeRule::new(".cm-tooltip-docs p:last-child").declare("margin-bottom", "0"),
            ThemeRule::new(".cm-tooltip.cm-tooltip-autocomplete > ul")
                .declare("font-family", colors::MONOSPACE),
            ThemeRule::new(".cm-completionMatchedText")
                .declare("text-decoration", "none")
                .declare("color", colors::MATCHED_TEXT),
            ThemeRule::new(".cm-tooltip-autocomplete > ul > li[aria-selected]")
                .declare("background", colors::SELECTED_BG)
                .declare("color", "unset"),
            ThemeRule::new("a")
                .declare("color", colors::LINK)
                .declare("text-decoration", "inherit"),
            ThemeRule::new(".cm-tooltip-hover").declare("z-index", "150"),
            ThemeRule::new(".cm-completionInfo-right").declare("padding", "0"),
        ],
    }
}
