pub mod blocks;
pub mod builder;
pub mod grammar;
pub mod tokens;

use crate::models::Class;

use blocks::{Block, extract_blocks};
use builder::ClassBuilder;
use grammar::Grammar;
use tokens::TokenClassifier;

#[derive(Debug)]
pub struct ParsedSource {
    pub blocks: Vec<Block>,
    pub classes: Vec<Class>,
}

/// Extracts every documentation block from `content` and assembles the classes
/// they declare, in input order.
pub fn parse_source(content: &str, grammar: &Grammar) -> ParsedSource {
    let blocks = extract_blocks(content.split('\n'), &grammar.markers);
    let mut builder = ClassBuilder::new(TokenClassifier::new(&grammar.vocabulary));

    for block in &blocks {
        builder.push_block(&block.lines);
    }

    ParsedSource {
        classes: builder.finish(),
        blocks,
    }
}

/// Convenience: classes only.
pub fn extract_classes(content: &str, grammar: &Grammar) -> Vec<Class> {
    parse_source(content, grammar).classes
}
