use crate::block::{SpanKind, TextSpan};
use crate::error::ConvertError;

/// An HTML element. A `Leaf` owns a text value and no children; a
/// `Parent` owns ordered children and no direct text. `tag`, `value`
/// and `children` stay `Option` so the renderer can tell an absent
/// field (an error) apart from an empty one (valid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Vec<(String, String)>,
    },
    Parent {
        tag: Option<String>,
        children: Option<Vec<Node>>,
        attrs: Vec<(String, String)>,
    },
}

impl Node {
    /// A bare text run, rendered without any surrounding tag.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    pub fn leaf_with_attrs(
        tag: &str,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        Node::Leaf {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs,
        }
    }

    pub fn parent(tag: &str, children: Vec<Node>) -> Self {
        Node::Parent {
            tag: Some(tag.to_string()),
            children: Some(children),
            attrs: Vec::new(),
        }
    }

    /// The leaf element for one inline span. The match is exhaustive
    /// over `SpanKind`, so an unhandled kind cannot reach the renderer.
    pub fn from_span(span: &TextSpan) -> Self {
        let target = || span.target.clone().unwrap_or_default();
        match span.kind {
            SpanKind::Plain => Node::text(span.text.clone()),
            SpanKind::Bold => Node::leaf("b", span.text.clone()),
            SpanKind::Italic => Node::leaf("i", span.text.clone()),
            SpanKind::Code => Node::leaf("code", span.text.clone()),
            SpanKind::Link => Node::leaf_with_attrs(
                "a",
                span.text.clone(),
                vec![("href".to_string(), target())],
            ),
            SpanKind::Image => Node::leaf_with_attrs(
                "img",
                "",
                vec![
                    ("src".to_string(), target()),
                    ("alt".to_string(), span.text.clone()),
                ],
            ),
        }
    }

    /// Serialize this node and its subtree to HTML.
    pub fn to_html(&self) -> Result<String, ConvertError> {
        match self {
            Node::Leaf { tag, value, attrs } => {
                let value = value.as_ref().ok_or(ConvertError::MissingValue)?;
                match tag {
                    None => Ok(value.clone()),
                    Some(tag) => Ok(format!("<{tag}{}>{value}</{tag}>", attr_string(attrs))),
                }
            }
            Node::Parent {
                tag,
                children,
                attrs,
            } => {
                let tag = tag.as_ref().ok_or(ConvertError::MissingTag)?;
                let children = children.as_ref().ok_or(ConvertError::MissingChildren)?;
                let mut body = String::new();
                for child in children {
                    body.push_str(&child.to_html()?);
                }
                Ok(format!("<{tag}{}>{body}</{tag}>", attr_string(attrs)))
            }
        }
    }
}

/// Render `name="value"` pairs in insertion order, with a single
/// leading space when any attributes exist. Values are assumed
/// pre-sanitized by whoever supplied the URLs and alt text.
fn attr_string(attrs: &[(String, String)]) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = attrs
        .iter()
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect();
    format!(" {}", pairs.join(" "))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bare_text_renders_unwrapped() {
        assert_eq!(Node::text("hello").to_html().unwrap(), "hello");
    }

    #[test]
    fn empty_value_is_valid() {
        assert_eq!(Node::leaf("br", "").to_html().unwrap(), "<br></br>");
    }

    #[test]
    fn tagged_leaf() {
        assert_eq!(Node::leaf("b", "bold").to_html().unwrap(), "<b>bold</b>");
    }

    #[test]
    fn leaf_with_attrs_gets_one_leading_space() {
        let node = Node::leaf_with_attrs(
            "a",
            "click",
            vec![("href".to_string(), "https://x".to_string())],
        );
        assert_eq!(node.to_html().unwrap(), "<a href=\"https://x\">click</a>");
    }

    #[test]
    fn attrs_keep_insertion_order() {
        let node = Node::leaf_with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), "a.png".to_string()),
                ("alt".to_string(), "pic".to_string()),
            ],
        );
        assert_eq!(node.to_html().unwrap(), "<img src=\"a.png\" alt=\"pic\"></img>");
    }

    #[test]
    fn missing_value_fails() {
        let node = Node::Leaf {
            tag: Some("p".to_string()),
            value: None,
            attrs: Vec::new(),
        };
        assert_eq!(node.to_html(), Err(ConvertError::MissingValue));
    }

    #[test]
    fn missing_tag_fails() {
        let node = Node::Parent {
            tag: None,
            children: Some(vec![]),
            attrs: Vec::new(),
        };
        assert_eq!(node.to_html(), Err(ConvertError::MissingTag));
    }

    #[test]
    fn missing_children_fails() {
        let node = Node::Parent {
            tag: Some("div".to_string()),
            children: None,
            attrs: Vec::new(),
        };
        assert_eq!(node.to_html(), Err(ConvertError::MissingChildren));
    }

    #[test]
    fn empty_children_render_empty_body() {
        assert_eq!(Node::parent("div", vec![]).to_html().unwrap(), "<div></div>");
    }

    #[test]
    fn parent_concatenates_children_in_order() {
        let node = Node::parent(
            "p",
            vec![
                Node::text("plain "),
                Node::leaf("b", "bold"),
                Node::text(" tail"),
            ],
        );
        assert_eq!(node.to_html().unwrap(), "<p>plain <b>bold</b> tail</p>");
    }

    #[test]
    fn nested_parents() {
        let node = Node::parent(
            "pre",
            vec![Node::parent("code", vec![Node::text("let x = 1;\n")])],
        );
        assert_eq!(node.to_html().unwrap(), "<pre><code>let x = 1;\n</code></pre>");
    }

    #[test]
    fn span_conversion_covers_every_kind() {
        assert_eq!(
            Node::from_span(&TextSpan::plain("t")),
            Node::text("t")
        );
        assert_eq!(
            Node::from_span(&TextSpan::new("t", SpanKind::Bold)),
            Node::leaf("b", "t")
        );
        assert_eq!(
            Node::from_span(&TextSpan::new("t", SpanKind::Italic)),
            Node::leaf("i", "t")
        );
        assert_eq!(
            Node::from_span(&TextSpan::new("t", SpanKind::Code)),
            Node::leaf("code", "t")
        );
        assert_eq!(
            Node::from_span(&TextSpan::linked("t", SpanKind::Link, "u")),
            Node::leaf_with_attrs("a", "t", vec![("href".to_string(), "u".to_string())])
        );
        assert_eq!(
            Node::from_span(&TextSpan::linked("t", SpanKind::Image, "u")),
            Node::leaf_with_attrs(
                "img",
                "",
                vec![
                    ("src".to_string(), "u".to_string()),
                    ("alt".to_string(), "t".to_string()),
                ]
            )
        );
    }
}
