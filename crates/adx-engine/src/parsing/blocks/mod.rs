//! # Block Extraction
//!
//! Carves raw source lines into documentation blocks.
//!
//! ## Modes
//!
//! - **Block** (`begin [middle] end`): a block opens on a `begin` line, collects
//!   content lines (stripping `middle` when present) and is emitted on an `end`
//!   line. Blocks left open at end of input are dropped.
//! - **Line** (`begin`): a block is a run of consecutive lines starting with
//!   `begin`. A non-matching line ends the run.
//!
//! ## Modules
//!
//! - **`markers`**: `Markers` and its construction from a configured format string
//! - **`extract`**: `BlockExtractor` state machine producing `Block`s
//!
//! ## Key Invariants
//!
//! - Blocks never nest: a `begin` inside an open block is ordinary content
//! - Content lines are trimmed and have their markers stripped
//! - Output order equals input order

pub mod extract;
pub mod markers;

pub use extract::{Block, BlockExtractor, extract_blocks};
pub use markers::Markers;
