//! Fallible byte cursor for the tag parser.
//!
//! Wraps the raw [`weft_lexer_core::Cursor`] with peek/consume/expect
//! primitives that report end-of-input and mismatches as [`ParseError`]s.
//!
//! The source is bytes. Text copied out of it is decoded as UTF-8 with
//! invalid sequences replaced by U+FFFD, so the grammar never fails on
//! encoding.

use std::borrow::Cow;

use weft_lexer_core::{LineCol, SourceBuffer};

use crate::error::{ParseError, ParseErrorKind};

/// Cursor over one loaded source buffer.
///
/// One cursor per parse; it is never shared between parses.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    inner: weft_lexer_core::Cursor<'a>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `buf`.
    pub fn new(buf: &'a SourceBuffer) -> Self {
        Cursor {
            inner: buf.cursor(),
        }
    }

    /// The next unread byte, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.inner.is_eof() {
            None
        } else {
            Some(self.inner.current())
        }
    }

    /// Return the next byte and advance past it.
    #[inline]
    pub fn consume(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.inner.advance();
        Some(b)
    }

    /// Consume exactly `expected`.
    pub fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        match self.peek() {
            Some(b) if b == expected => {
                self.inner.advance();
                Ok(())
            }
            Some(found) => Err(self.error_here(ParseErrorKind::UnexpectedByte { expected, found })),
            None => Err(self.eof()),
        }
    }

    /// Consume exactly the bytes of `literal`.
    ///
    /// On failure the error points at where the match started, not at the
    /// byte that failed.
    pub fn expect_literal(&mut self, literal: &str) -> Result<(), ParseError> {
        let start = self.pos();
        if self.eat_literal(literal) {
            Ok(())
        } else {
            Err(self.error_at(
                ParseErrorKind::UnexpectedLiteral {
                    expected: literal.to_owned(),
                },
                start,
            ))
        }
    }

    /// Consume the longest matching prefix of `literal`.
    ///
    /// Returns `true` if the whole literal matched. On `false` the cursor
    /// is left on the first byte that did not match.
    pub fn eat_literal(&mut self, literal: &str) -> bool {
        for &b in literal.as_bytes() {
            if self.peek() != Some(b) {
                return false;
            }
            self.inner.advance();
        }
        true
    }

    /// Skip whitespace (space, tab, CR, LF).
    #[inline]
    pub fn skip_whitespace(&mut self) {
        self.inner.eat_whitespace();
    }

    /// Consume every byte up to (not including) `terminator`.
    ///
    /// Reaching end of input before `terminator` is an error.
    pub fn text_until(&mut self, terminator: u8) -> Result<Cow<'a, str>, ParseError> {
        let start = self.pos();
        self.inner.eat_until(terminator);
        if self.inner.is_eof() {
            return Err(self.eof());
        }
        Ok(self.slice_from(start))
    }

    /// Source text between two offsets.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> Cow<'a, str> {
        String::from_utf8_lossy(self.inner.slice(start, end))
    }

    /// Source text from `start` to the cursor.
    #[inline]
    pub fn slice_from(&self, start: u32) -> Cow<'a, str> {
        self.slice(start, self.pos())
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.inner.pos()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.inner.is_eof()
    }

    /// 1-indexed line and column of `offset`. O(offset).
    pub fn position(&self, offset: u32) -> LineCol {
        self.inner.line_col(offset)
    }

    #[cold]
    pub fn error_at(&self, kind: ParseErrorKind, offset: u32) -> ParseError {
        ParseError::new(kind, offset, self.position(offset))
    }

    #[cold]
    pub fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(kind, self.pos())
    }

    #[cold]
    pub fn eof(&self) -> ParseError {
        self.error_here(ParseErrorKind::UnexpectedEof)
    }
}
