//! Weft Lexer Core - byte-level scanning primitives for Weft markup.
//!
//! This crate has no knowledge of the tag grammar. It provides:
//! - [`SourceBuffer`]: owned, sentinel-terminated copy of a source file
//! - [`Cursor`]: `Copy` byte cursor over a [`SourceBuffer`]
//! - [`LineCol`]: 1-indexed diagnostic position

mod cursor;
mod source_buffer;

pub use cursor::{is_whitespace, Cursor, LineCol};
pub use source_buffer::SourceBuffer;
