//! # Token Classification
//!
//! Decides what a single content line of a block means.
//!
//! - **`vocabulary`**: `TokenVocabulary` (declaration prefixes, class-level tags,
//!   field patterns), injected rather than global so several languages can be
//!   configured side by side
//! - **`classify`**: `TokenClassifier` turning a line into a `LineToken`
//!
//! Classification is context-free. Whether a token actually applies (for
//! example a `Method:` line with no open class) is decided by the assembler.

pub mod classify;
pub mod vocabulary;

pub use classify::{ClassField, LineToken, MethodField, TokenClassifier};
pub use vocabulary::{DeclarationKind, FieldPatterns, TokenVocabulary};
