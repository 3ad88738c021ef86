use crate::block::{Block, BlockKind};
use crate::error::ConvertError;

/// Split a document into block-level units on blank-line boundaries.
/// Whitespace-only pieces are dropped; order is preserved.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .trim_matches('\n')
        .split("\n\n")
        .filter(|piece| !piece.trim().is_empty())
        .collect()
}

/// Split a document and classify every resulting block.
pub fn parse(markdown: &str) -> Result<Vec<Block>, ConvertError> {
    split_blocks(markdown)
        .into_iter()
        .map(|text| {
            Ok(Block {
                text: text.to_string(),
                kind: classify(text)?,
            })
        })
        .collect()
}

/// Determine the structural kind of a single block. First match wins;
/// a multi-line quote or list block downgrades to a paragraph as soon
/// as one line breaks the per-line rule.
pub fn classify(block: &str) -> Result<BlockKind, ConvertError> {
    if block.is_empty() {
        return Err(ConvertError::EmptyBlock);
    }
    if let Some(level) = heading_level(block) {
        return Ok(BlockKind::Heading(level));
    }
    if block.starts_with("```") && block.ends_with("```") {
        return Ok(BlockKind::CodeFence);
    }
    if block.starts_with('>') {
        return Ok(if block.lines().all(|line| line.starts_with('>')) {
            BlockKind::Quote
        } else {
            BlockKind::Paragraph
        });
    }
    if block.starts_with("- ") {
        return Ok(if block.lines().all(|line| line.starts_with("- ")) {
            BlockKind::UnorderedList
        } else {
            BlockKind::Paragraph
        });
    }
    if block.starts_with("1. ") {
        // Only lines after the first are checked against the running
        // counter; the outer `1. ` prefix check covers the first line.
        let numbered = block
            .lines()
            .enumerate()
            .skip(1)
            .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)));
        return Ok(if numbered {
            BlockKind::OrderedList
        } else {
            BlockKind::Paragraph
        });
    }
    Ok(BlockKind::Paragraph)
}

/// 1 to 6 leading `#`, exactly one space, then at least one more
/// character. Seven or more `#` is not a heading.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let mut rest = block[hashes..].chars();
    if rest.next() == Some(' ') && rest.next().is_some() {
        Some(hashes as u8)
    } else {
        None
    }
}

/// First h1 text of the document, used by the CLI as the page title.
pub fn extract_title(markdown: &str) -> Option<String> {
    split_blocks(markdown)
        .into_iter()
        .find(|block| matches!(classify(block), Ok(BlockKind::Heading(1))))
        .map(|block| block[2..].trim().to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn split_normal_document() {
        let document = "# Heading\n\nA paragraph\nwith two lines\n\n- a list\n- of items";
        assert_eq!(
            split_blocks(document),
            vec![
                "# Heading",
                "A paragraph\nwith two lines",
                "- a list\n- of items"
            ]
        );
    }

    #[test]
    fn split_collapses_extra_blank_lines() {
        let document = "\n\n# Heading\n\n\n\nBody\n\n   \n\nEnd\n\n";
        assert_eq!(split_blocks(document), vec!["# Heading", "Body", "End"]);
    }

    #[test]
    fn split_single_block() {
        assert_eq!(split_blocks("just one paragraph"), vec!["just one paragraph"]);
    }

    #[test]
    fn split_whitespace_only_document() {
        assert_eq!(split_blocks("\n\n   \n\n"), Vec::<&str>::new());
    }

    #[test]
    fn classify_empty_block_fails() {
        assert_eq!(classify(""), Err(ConvertError::EmptyBlock));
    }

    #[rstest]
    #[case("# This is a heading", BlockKind::Heading(1))]
    #[case("## This is a heading", BlockKind::Heading(2))]
    #[case("### This is a heading", BlockKind::Heading(3))]
    #[case("#### This is a heading", BlockKind::Heading(4))]
    #[case("##### This is a heading", BlockKind::Heading(5))]
    #[case("###### This is a heading", BlockKind::Heading(6))]
    #[case("####### Too many hashes", BlockKind::Paragraph)]
    #[case("#No space", BlockKind::Paragraph)]
    #[case("# ", BlockKind::Paragraph)]
    #[case("```\nlet x = 1;\n```", BlockKind::CodeFence)]
    #[case("> a quote", BlockKind::Quote)]
    #[case("> a quote\n> with two lines", BlockKind::Quote)]
    #[case("> a quote\nand a stray line", BlockKind::Paragraph)]
    #[case("- one item", BlockKind::UnorderedList)]
    #[case("- one item\n- another", BlockKind::UnorderedList)]
    #[case("- one item\nnot an item", BlockKind::Paragraph)]
    #[case("1. first", BlockKind::OrderedList)]
    #[case("1. first\n2. second\n3. third", BlockKind::OrderedList)]
    #[case("1. first\n3. skipped", BlockKind::Paragraph)]
    #[case("1. first\nnot numbered", BlockKind::Paragraph)]
    #[case("This is a paragraph", BlockKind::Paragraph)]
    fn classify_kinds(#[case] block: &str, #[case] expected: BlockKind) {
        assert_eq!(classify(block), Ok(expected));
    }

    #[test]
    fn parse_classifies_every_block() {
        let blocks = parse("# H\n\nBody").unwrap();
        assert_eq!(
            blocks,
            vec![
                Block {
                    text: "# H".to_string(),
                    kind: BlockKind::Heading(1)
                },
                Block {
                    text: "Body".to_string(),
                    kind: BlockKind::Paragraph
                },
            ]
        );
    }

    #[test]
    fn title_from_first_h1() {
        assert_eq!(
            extract_title("Intro text\n\n# The Title\n\nBody"),
            Some("The Title".to_string())
        );
        assert_eq!(extract_title("No headings here"), None);
    }
}
