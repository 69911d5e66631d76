pub mod combine;
pub mod io;
pub mod models;
pub mod normalize;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use combine::{combine, combine_all, combine_documents};
pub use io::*;
pub use models::*;
pub use normalize::{DEFAULT_NAMESPACE_SEPARATOR, GLOBAL_NAMESPACE, normalize, split_name};
pub use parsing::grammar::{DocstringKind, Grammar, GrammarError};
pub use parsing::{ParsedSource, extract_classes, parse_source};
