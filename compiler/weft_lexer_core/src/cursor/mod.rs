//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached the source length. A NUL at `pos < source_len` is an
//! interior null and is treated as ordinary content.

use std::fmt;

/// Whitespace as the markup grammar defines it: space, tab, CR, LF.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// A 1-indexed line/column pair.
///
/// Columns count bytes from the start of the line, not characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub const fn new(line: u32, col: u32) -> Self {
        LineCol { line, col }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Byte cursor over a sentinel-terminated source buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so saving a position for a later diagnostic is
/// just a copy of the struct.
///
/// # Invariant
///
/// `src` must be sentinel-terminated: the byte at `source_len` is `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes plus the sentinel.
    src: &'a [u8],
    /// Current read position (byte index into `src`).
    pos: u32,
    /// Length of actual source content (excludes the sentinel).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < src.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(
            src[source_len as usize] == 0,
            "sentinel byte must be 0x00"
        );
        Self {
            src,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.src[self.pos as usize]
    }

    /// Advance the cursor by one byte. Does nothing at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source bytes in `start..end`.
    ///
    /// An out-of-range span yields an empty slice.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.src.get(start as usize..end as usize).unwrap_or_default()
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte, stopping at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past whitespace (space, tab, CR, LF).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Advance until `byte` is found or EOF is reached.
    ///
    /// Returns the number of bytes consumed. The cursor is left on the
    /// found byte, or at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> u32 {
        let start = self.pos;
        let remaining = &self.src[self.pos as usize..self.source_len as usize];
        match memchr::memchr(byte, remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
        self.pos - start
    }

    /// Compute the 1-indexed line and column of `offset`.
    ///
    /// Scans every byte before `offset`, so this is O(offset). Only call it
    /// when building a diagnostic.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "counts are bounded by source_len which fits in u32"
    )]
    pub fn line_col(&self, offset: u32) -> LineCol {
        let end = offset.min(self.source_len) as usize;
        let before = &self.src[..end];
        let line = memchr::memchr_iter(b'\n', before).count() as u32 + 1;
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |nl| nl + 1);
        LineCol::new(line, (end - line_start) as u32 + 1)
    }
}
