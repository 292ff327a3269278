//! Configuration for the TypeScript assist adapters.
//!
//! Loaded from `$TSASSIST_CONFIG`, or `~/.tsassist/config.toml` when the
//! variable is unset. Every section is optional; a missing file is not an
//! error.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TSASSIST_CONFIG";

/// Logical file the adapters bind to when `[document] file` is unset.
pub const DEFAULT_DOCUMENT_FILE: &str = "file:///index.ts";

/// Editor boost ceiling, used for a sort key of exactly zero.
pub const DEFAULT_MAX_BOOST: f64 = 99.0;

// Default value function for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

fn default_document_file() -> String {
    DEFAULT_DOCUMENT_FILE.to_string()
}

fn default_trigger_characters() -> Vec<char> {
    vec!['.']
}

const fn default_max_boost() -> f64 {
    DEFAULT_MAX_BOOST
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AssistConfig {
    pub document: Option<DocumentConfig>,
    pub completion: Option<CompletionConfig>,
    /// Highlight tag → CSS class overrides, keyed by tag name
    /// (`keyword`, `type_name`, ...). An empty class unstyles the tag.
    pub highlight: Option<BTreeMap<String, String>>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_document_file")]
    pub file: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            file: default_document_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompletionConfig {
    /// Whether the host should open completion while an identifier is typed.
    #[serde(default = "default_true")]
    pub activate_on_typing: bool,
    /// Characters that start completion explicitly (member access).
    #[serde(default = "default_trigger_characters")]
    pub trigger_characters: Vec<char>,
    #[serde(default = "default_max_boost")]
    pub max_boost: f64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            activate_on_typing: true,
            trigger_characters: default_trigger_characters(),
            max_boost: DEFAULT_MAX_BOOST,
        }
    }
}

impl CompletionConfig {
    /// Configured boost ceiling, or the default when it is not a positive
    /// finite number.
    #[must_use]
    pub fn max_boost(&self) -> f64 {
        if self.max_boost.is_finite() && self.max_boost > 0.0 {
            self.max_boost
        } else {
            tracing::warn!(
                max_boost = self.max_boost,
                "Invalid completion max_boost; using default"
            );
            DEFAULT_MAX_BOOST
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"tsassist_adapters=debug"`.
    pub filter: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Replace `${VAR}` with the variable's value (empty when unset).
///
/// An unclosed `${` is kept literally.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(open) = rest.find("${") {
        let after = &rest[open + 2..];
        let Some(close) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..open]);
        let var = &after[..close];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

impl AssistConfig {
    /// Load from the default location. `Ok(None)` when no config file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    /// Load and parse a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Parse TOML text, expanding `${VAR}` references in string values.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env();
        Ok(config)
    }

    fn expand_env(&mut self) {
        if let Some(document) = &mut self.document {
            document.file = expand_env_vars(&document.file);
        }
        if let Some(highlight) = &mut self.highlight {
            for class in highlight.values_mut() {
                *class = expand_env_vars(class);
            }
        }
        if let Some(filter) = self.logging.as_mut().and_then(|l| l.filter.as_mut()) {
            *filter = expand_env_vars(filter);
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// File the adapters bind to.
    #[must_use]
    pub fn document_file(&self) -> &str {
        self.document
            .as_ref()
            .map_or(DEFAULT_DOCUMENT_FILE, |d| d.file.as_str())
    }

    #[must_use]
    pub fn completion(&self) -> CompletionConfig {
        self.completion.clone().unwrap_or_default()
    }

    /// Highlight overrides as `(tag, class)` pairs, sorted by tag.
    pub fn highlight_overrides(&self) -> impl Iterator<Item = (&str, &str)> {
        self.highlight
            .iter()
            .flatten()
            .map(|(tag, class)| (tag.as_str(), class.as_str()))
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.logging.as_ref()?.filter.as_deref()
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".tsassist").join("config.toml"))
}
