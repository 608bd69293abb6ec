//! Parse error types.
//!
//! Every error carries the byte offset and 1-indexed position of the
//! construct that failed. Closing-tag mismatches also carry the position of
//! the opening tag, so the message can point at both ends.

use std::fmt;

use thiserror::Error;
use weft_lexer_core::LineCol;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Input ended inside a tag, attribute, text run, or comment.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A specific byte was required.
    #[error(
        "expected `{}`, found `{}`",
        .expected.escape_ascii(),
        .found.escape_ascii()
    )]
    UnexpectedByte { expected: u8, found: u8 },

    /// A specific byte sequence was required.
    #[error("expected `{expected}`")]
    UnexpectedLiteral { expected: String },

    /// First byte of a tag name was a digit, `-` or `.`.
    #[error("tag name must start with [a-z], found `{}`", .found.escape_ascii())]
    InvalidTagNameStart { found: u8 },

    /// A byte that cannot appear in a tag name.
    #[error("expected tag name in lowercase, found `{}`", .found.escape_ascii())]
    InvalidTagName { found: u8 },

    /// `<>` or `</` with no name in between.
    #[error("empty tag name")]
    EmptyTagName,

    /// Garbage where an attribute, `/`, or `>` was expected.
    #[error("invalid attribute in tag <{tag}>")]
    InvalidAttribute { tag: String },

    /// `/` not followed by `>`.
    #[error("expected `>` after `/` to close the tag")]
    UnclosedSelfClose,

    /// Closing tag does not match the opening one.
    #[error("expected closing tag </{name}>")]
    MismatchedClose { name: String },
}

/// A positional parse error.
///
/// Displays as `"<line>:<col> <message>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset the position was computed from.
    pub offset: u32,
    pub at: LineCol,
    /// Opening tag position, for errors detected at the closing end.
    pub opened_at: Option<LineCol>,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, offset: u32, at: LineCol) -> Self {
        ParseError {
            kind,
            offset,
            at,
            opened_at: None,
        }
    }

    #[must_use]
    pub fn with_opened_at(mut self, opened_at: LineCol) -> Self {
        self.opened_at = Some(opened_at);
        self
    }

    pub fn is_eof(&self) -> bool {
        self.kind == ParseErrorKind::UnexpectedEof
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.at, self.kind)?;
        if let Some(opened) = self.opened_at {
            write!(f, " (opened at {opened})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
