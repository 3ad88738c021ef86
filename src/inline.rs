use std::sync::OnceLock;

use regex::Regex;

use crate::block::{SpanKind, TextSpan};
use crate::error::ConvertError;

static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
static LINK_REGEX: OnceLock<Regex> = OnceLock::new();

fn image_regex() -> &'static Regex {
    IMAGE_REGEX
        .get_or_init(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("invalid image regex"))
}

fn link_regex() -> &'static Regex {
    LINK_REGEX
        .get_or_init(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("invalid link regex"))
}

/// Extract `![label](url)` occurrences in order of appearance.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    image_regex()
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Extract `[label](url)` occurrences in order of appearance. A `[`
/// directly preceded by `!` belongs to an image reference, not a link,
/// so those matches are skipped.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    link_regex()
        .captures_iter(text)
        .filter(|caps| match caps.get(0) {
            Some(m) => m.start() == 0 || text.as_bytes()[m.start() - 1] != b'!',
            None => false,
        })
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Split every Plain span on a literal delimiter, typing odd-indexed
/// pieces as `kind`. An even piece count means an opening delimiter was
/// never closed. Empty pieces are dropped; non-Plain spans pass through
/// untouched.
pub fn split_by_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, ConvertError> {
    let mut out = Vec::new();
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(ConvertError::UnclosedDelimiter(delimiter));
        }
        for (i, piece) in pieces.iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(TextSpan::new(*piece, piece_kind));
        }
    }
    Ok(out)
}

/// Split every Plain span around link or image occurrences, emitting a
/// typed span per occurrence and Plain spans for the text between them.
/// Non-Plain spans pass through untouched.
pub fn split_by_markup(spans: Vec<TextSpan>, kind: SpanKind) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let found = match kind {
            SpanKind::Image => extract_images(&span.text),
            SpanKind::Link => extract_links(&span.text),
            _ => Vec::new(),
        };
        if found.is_empty() {
            if !span.text.is_empty() {
                out.push(span);
            }
            continue;
        }
        let mut rest = span.text.as_str();
        for (label, url) in &found {
            let needle = match kind {
                SpanKind::Image => format!("![{label}]({url})"),
                _ => format!("[{label}]({url})"),
            };
            let Some((before, after)) = rest.split_once(&needle) else {
                break;
            };
            if !before.is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(TextSpan::linked(label.as_str(), kind, url.as_str()));
            rest = after;
        }
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    out
}

/// Run the full inline pipeline over one run of text: bold, italic and
/// code delimiters first, then image and link extraction. Each stage
/// re-scans Plain spans only, so already-typed content is never split
/// again.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, ConvertError> {
    let mut spans = vec![TextSpan::plain(text)];
    spans = split_by_delimiter(spans, "**", SpanKind::Bold)?;
    spans = split_by_delimiter(spans, "_", SpanKind::Italic)?;
    spans = split_by_delimiter(spans, "`", SpanKind::Code)?;
    spans = split_by_markup(spans, SpanKind::Image);
    spans = split_by_markup(spans, SpanKind::Link);
    Ok(spans)
}
