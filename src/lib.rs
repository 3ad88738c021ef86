mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;

pub use block::{Block, BlockKind, SpanKind, TextSpan};
pub use config::Config;
pub use error::ConvertError;
pub use node::Node;
pub use parser::extract_title;

/// Parse markdown text into a vector of classified blocks.
pub fn parse(markdown: &str) -> Result<Vec<Block>, ConvertError> {
    parser::parse(markdown)
}

/// Tokenize one run of inline text into typed spans.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    inline::tokenize(text)
}

/// Build the document tree for markdown text: one fragment per block
/// under a root `<div>`.
pub fn document_tree(markdown: &str) -> Result<Node, ConvertError> {
    html::blocks_to_tree(&parse(markdown)?)
}

/// Convert markdown to an HTML string.
pub fn convert(markdown: &str) -> Result<String, ConvertError> {
    document_tree(markdown)?.to_html()
}
