/// Inline text span kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed run of inline text. `target` carries the URL for links and
/// images and is unused otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    pub target: Option<String>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    /// A link or image span pointing at `target`.
    pub fn linked(text: impl Into<String>, kind: SpanKind, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            target: Some(target.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

/// Block-level structural kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading(u8),
    Paragraph,
    CodeFence,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A block-level unit of the document. `text` keeps internal newlines
/// for multi-line blocks (quotes, lists).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub text: String,
    pub kind: BlockKind,
}
