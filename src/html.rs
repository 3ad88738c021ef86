use crate::block::{Block, BlockKind};
use crate::error::ConvertError;
use crate::inline;
use crate::node::Node;

/// Build the document tree: one fragment per block, in block order,
/// under a root `<div>`.
pub fn blocks_to_tree(blocks: &[Block]) -> Result<Node, ConvertError> {
    let mut fragments = Vec::with_capacity(blocks.len());
    for block in blocks {
        fragments.push(block_to_node(block)?);
    }
    Ok(Node::parent("div", fragments))
}

fn block_to_node(block: &Block) -> Result<Node, ConvertError> {
    match block.kind {
        BlockKind::Heading(level) => heading_node(&block.text, level),
        BlockKind::Paragraph => paragraph_node(&block.text),
        BlockKind::CodeFence => Ok(code_node(&block.text)),
        BlockKind::Quote => quote_node(&block.text),
        BlockKind::UnorderedList => unordered_list_node(&block.text),
        BlockKind::OrderedList => ordered_list_node(&block.text),
    }
}

fn inline_children(text: &str) -> Result<Vec<Node>, ConvertError> {
    Ok(inline::tokenize(text)?.iter().map(Node::from_span).collect())
}

fn heading_node(text: &str, level: u8) -> Result<Node, ConvertError> {
    // Classification guarantees the `#… ` prefix, all ASCII.
    let content = &text[level as usize + 1..];
    Ok(Node::parent(&format!("h{level}"), inline_children(content)?))
}

fn paragraph_node(text: &str) -> Result<Node, ConvertError> {
    let content = text.lines().collect::<Vec<_>>().join(" ");
    Ok(Node::parent("p", inline_children(&content)?))
}

/// Fence markers are stripped; the content goes in verbatim as one
/// plain leaf, with no inline tokenization.
fn code_node(text: &str) -> Node {
    let inner = text.strip_prefix("```").unwrap_or(text);
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    let inner = inner.strip_prefix('\n').unwrap_or(inner);
    Node::parent("pre", vec![Node::parent("code", vec![Node::text(inner)])])
}

fn quote_node(text: &str) -> Result<Node, ConvertError> {
    let content = text
        .lines()
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join(" ");
    Ok(Node::parent("blockquote", inline_children(&content)?))
}

fn unordered_list_node(text: &str) -> Result<Node, ConvertError> {
    let mut items = Vec::new();
    for line in text.lines() {
        let content = line.strip_prefix("- ").unwrap_or(line);
        items.push(Node::parent("li", inline_children(content)?));
    }
    Ok(Node::parent("ul", items))
}

fn ordered_list_node(text: &str) -> Result<Node, ConvertError> {
    let mut items = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let marker = format!("{}. ", i + 1);
        let content = line.strip_prefix(&marker).unwrap_or(line);
        items.push(Node::parent("li", inline_children(content)?));
    }
    Ok(Node::parent("ol", items))
}
