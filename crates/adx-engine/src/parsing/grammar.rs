use std::fmt;

use super::blocks::Markers;
use super::tokens::{FieldPatterns, TokenVocabulary};

/// Which comment shape a language uses for documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocstringKind {
    Block,
    Line,
}

impl fmt::Display for DocstringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block => f.write_str("block"),
            Self::Line => f.write_str("line"),
        }
    }
}

/// Configuration errors. Any of these aborts a run before extraction starts.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error(
        "{kind} docstrings need {} marker tokens, found {found} in {format:?}",
        expected_tokens(.kind)
    )]
    MarkerCount {
        kind: DocstringKind,
        format: String,
        found: usize,
    },
    #[error("invalid {field} pattern: {source}")]
    InvalidPattern {
        field: &'static str,
        source: regex::Error,
    },
    #[error("{field} pattern {pattern:?} has no named capture `{capture}`")]
    MissingCapture {
        field: &'static str,
        pattern: String,
        capture: &'static str,
    },
}

fn expected_tokens(kind: &DocstringKind) -> &'static str {
    match kind {
        DocstringKind::Block => "2 (begin end) or 3 (begin middle end)",
        DocstringKind::Line => "exactly 1 (begin)",
    }
}

/// Everything the engine needs to read one language: block markers plus the
/// token vocabulary used inside blocks.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub markers: Markers,
    pub vocabulary: TokenVocabulary,
}

impl Grammar {
    pub fn new(markers: Markers, vocabulary: TokenVocabulary) -> Self {
        Self {
            markers,
            vocabulary,
        }
    }

    /// Builds a grammar from raw configuration values, validating all of them.
    ///
    /// `None` patterns fall back to the `@param` / `@return` defaults.
    pub fn from_parts(
        kind: DocstringKind,
        format: &str,
        parameter_pattern: Option<&str>,
        return_pattern: Option<&str>,
    ) -> Result<Self, GrammarError> {
        let markers = Markers::from_format(kind, format)?;
        let fields = FieldPatterns::new(parameter_pattern, return_pattern)?;
        Ok(Self::new(markers, TokenVocabulary::with_fields(fields)))
    }
}
