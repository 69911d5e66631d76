use crate::parsing::grammar::{DocstringKind, GrammarError};

/// Marker configuration for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markers {
    /// Delimited comments such as `/** ... */`.
    Block {
        begin: String,
        /// Optional per-line prefix such as `*`.
        middle: Option<String>,
        end: String,
    },
    /// Runs of prefixed lines such as `//` or `///`.
    Line { begin: String },
}

impl Markers {
    /// Builds markers from a whitespace-separated format string.
    ///
    /// Block docstrings take `begin end` or `begin middle end`; line
    /// docstrings take exactly one `begin` token.
    pub fn from_format(kind: DocstringKind, format: &str) -> Result<Self, GrammarError> {
        let tokens: Vec<&str> = format.split_whitespace().collect();
        match (kind, tokens.as_slice()) {
            (DocstringKind::Block, [begin, end]) => Ok(Self::Block {
                begin: begin.to_string(),
                middle: None,
                end: end.to_string(),
            }),
            (DocstringKind::Block, [begin, middle, end]) => Ok(Self::Block {
                begin: begin.to_string(),
                middle: Some(middle.to_string()),
                end: end.to_string(),
            }),
            (DocstringKind::Line, [begin]) => Ok(Self::Line {
                begin: begin.to_string(),
            }),
            _ => Err(GrammarError::MarkerCount {
                kind,
                format: format.to_string(),
                found: tokens.len(),
            }),
        }
    }

    pub fn kind(&self) -> DocstringKind {
        match self {
            Self::Block { .. } => DocstringKind::Block,
            Self::Line { .. } => DocstringKind::Line,
        }
    }

    pub fn begin(&self) -> &str {
        match self {
            Self::Block { begin, .. } | Self::Line { begin } => begin,
        }
    }
}
