//! Inline value options

use crate::hir::SymbolFilter;
use crate::host::extension_of;

/// How the occurrences of a collected symbol are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OccurrenceStrategy {
    /// Scan every line for the symbol's name. Never fails, but over- and under-matches.
    #[default]
    Pattern,
    /// Ask the host's reference provider. Authoritative, needs the provider.
    References,
}

/// How the pattern strategy decides that a line mentions a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchPolicy {
    /// Any substring match, so `x` also matches inside `max`.
    #[default]
    Substring,
    /// Only matches not flanked by identifier characters.
    WholeWord,
}

/// Text layout of a rendered hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HintStyle {
    /// `name: type = value`, or `name = value` when no type is known.
    #[default]
    Typed,
    /// `name = value`.
    Untyped,
}

/// Options for computing inline values
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InlineValueOptions {
    /// Occurrence resolution strategy
    pub strategy: OccurrenceStrategy,
    /// Which document symbols are annotated
    pub symbol_filter: SymbolFilter,
    /// Name matching used by the pattern strategy
    pub match_policy: MatchPolicy,
    /// Hint text layout
    pub hint_style: HintStyle,
    /// File extensions (without the dot) the engine runs for; empty means all
    pub file_extensions: Vec<String>,
}

impl Default for InlineValueOptions {
    fn default() -> Self {
        Self {
            strategy: OccurrenceStrategy::default(),
            symbol_filter: SymbolFilter::default(),
            match_policy: MatchPolicy::default(),
            hint_style: HintStyle::default(),
            file_extensions: vec!["py".to_string()],
        }
    }
}

impl InlineValueOptions {
    /// Whether the document at `path` should get inline values.
    pub fn accepts_path(&self, path: &str) -> bool {
        if self.file_extensions.is_empty() {
            return true;
        }
        extension_of(path).is_some_and(|ext| {
            self.file_extensions
                .iter()
                .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
    }

    /// Parse options from a JSON settings object. Missing keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
