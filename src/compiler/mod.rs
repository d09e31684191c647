//! Compilation of mustache sources into Hogan.js code objects.
//!
//! The pipeline mirrors the one of Hogan.js itself: `scanner` turns the
//! source into a flat token list and removes standalone tag lines, `parser`
//! nests sections, `codegen` writes the JavaScript code object.

mod codegen;
mod hogan;
mod interface;
mod parser;
mod scanner;

pub use hogan::HoganCompiler;
pub use interface::TemplateCompiler;

use thiserror::Error;

/// Reasons a template source is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("unclosed tag starting at offset {offset}")]
    UnclosedTag { offset: usize },

    #[error("unclosed set delimiter tag starting at offset {offset}")]
    UnclosedDelimiterChange { offset: usize },

    #[error("invalid delimiters '{0}'")]
    InvalidDelimiters(String),

    #[error("unsupported tag type '{0}'")]
    UnsupportedTag(char),

    #[error("closing tag without opener: /{0}")]
    ClosingWithoutOpener(String),

    #[error("nesting error: {opened} vs. {closed}")]
    NestingError { opened: String, closed: String },

    #[error("missing closing tag: {0}")]
    MissingClosingTag(String),
}
