//! Sentinel-terminated source buffer.
//!
//! The buffer keeps a `0x00` sentinel byte after the source content, so the
//! cursor can read the byte at the current position without a bounds check
//! on the source length and treat the sentinel as EOF.
//!
//! Sources are raw bytes. Nothing here assumes UTF-8; decoding happens only
//! when the parser copies text out into the tree.

use crate::Cursor;

/// Owned, sentinel-terminated copy of one source file.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00]
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Source bytes followed by the sentinel.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes the sentinel).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `source_len`; anything
    /// past that point reads as EOF.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let source = source.as_ref();
        let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);

        let mut buf = Vec::with_capacity(source_len as usize + 1);
        buf.extend_from_slice(&source[..source_len as usize]);
        buf.push(0);

        Self { buf, source_len }
    }

    /// Returns the source bytes (without the sentinel).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
