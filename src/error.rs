use thiserror::Error;

/// Errors surfaced while converting Markdown to HTML. Nothing is caught
/// or recovered inside the pipeline; a bad document fails the whole
/// conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("cannot classify an empty block")]
    EmptyBlock,
    #[error("unclosed `{0}` delimiter: formatted section was not closed")]
    UnclosedDelimiter(&'static str),
    #[error("leaf node has no value")]
    MissingValue,
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node has no children")]
    MissingChildren,
}
