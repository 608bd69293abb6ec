//! Weft Parse - byte-level parser for Weft markup.
//!
//! Turns source text into a [`Tag`] tree rooted at a synthetic `"*"` node.
//! There is no error recovery: the first grammar violation aborts the parse
//! and is returned as a positional [`ParseError`].
//!
//! ```text
//! <page title="Home">
//!   <!-- header -->
//!   <core.css>body { margin: 0 }</core.css>
//!   <include src="nav.weft"/>
//! </page>
//! ```

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use grammar::parse_tag;
pub use weft_ir::Tag;
pub use weft_lexer_core::{LineCol, SourceBuffer};

use tracing::debug;

/// Parse a whole document.
///
/// Whitespace between top-level tags is skipped; every top-level tag
/// becomes a child of the returned root. The source need not be UTF-8:
/// invalid sequences in text and attribute values decode to U+FFFD.
pub fn parse_document(source: impl AsRef<[u8]>) -> Result<Tag, ParseError> {
    let buf = SourceBuffer::new(source);
    parse_buffer(&buf)
}

/// Parse a whole document from an already loaded buffer.
pub fn parse_buffer(buf: &SourceBuffer) -> Result<Tag, ParseError> {
    let mut cursor = Cursor::new(buf);
    let mut root = Tag::root();
    loop {
        cursor.skip_whitespace();
        if cursor.is_eof() {
            break;
        }
        root.children.push(parse_tag(&mut cursor, false)?);
    }
    debug!(bytes = buf.len(), top_level = root.children.len(), "parsed document");
    Ok(root)
}
