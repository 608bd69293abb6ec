//! Tag grammar.
//!
//! ```text
//! document   = (ws* tag)*
//! tag        = "<" name (ws+ attr)* (">" body "</" name ">" | "/>")
//!            | "<!--" comment-body "-->"
//! name       = lower (lower | digit | "-" | ".")*
//! attr       = attr-name ws* "=" ws* '"' text '"'
//! attr-name  = '"' text '"' | lower (alpha | digit | "-")*
//! body       = (ws | text-run | tag)*
//! ```
//!
//! One call to [`parse_tag`] runs a small state machine over a single tag
//! and recurses for nested tags in the body.

use tracing::trace;
use weft_ir::Tag;
use weft_lexer_core::is_whitespace;
use weft_stack::ensure_sufficient_stack;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Reading the tag name right after `<`.
    Name,
    /// Between the name and `>` or `/>`.
    Attributes,
    /// Inside `<!-- ... -->`.
    Comment,
    /// Children of an open tag, up to `</`.
    Body,
    /// Self-closing `/>` or the `>` of `-->` is next.
    NonTagClosure,
}

#[inline]
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'.'
}

#[inline]
fn is_attribute_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Parse one tag.
///
/// With `opening_consumed` the leading `<` has already been read, which is
/// how the body loop hands off to nested tags after peeking past `<`.
pub fn parse_tag(cursor: &mut Cursor<'_>, opening_consumed: bool) -> Result<Tag, ParseError> {
    ensure_sufficient_stack(|| parse_tag_inner(cursor, opening_consumed))
}

fn parse_tag_inner(cursor: &mut Cursor<'_>, opening_consumed: bool) -> Result<Tag, ParseError> {
    if !opening_consumed {
        cursor.expect(b'<')?;
    }
    // Offset 0 has no `<` before it to have been consumed.
    let Some(start) = cursor.pos().checked_sub(1) else {
        return Err(match cursor.peek() {
            Some(found) => cursor.error_here(ParseErrorKind::UnexpectedByte {
                expected: b'<',
                found,
            }),
            None => cursor.eof(),
        });
    };
    let name_start = cursor.pos();

    let mut tag = Tag::element(String::new(), start);
    let mut name_len = 0u32;
    let mut comment_start = 0u32;
    let mut mode = Mode::Name;

    loop {
        let Some(b) = cursor.peek() else {
            return Err(cursor.eof());
        };

        match mode {
            Mode::Name => {
                cursor.consume();
                if b == b'!' && name_len == 0 {
                    cursor.expect_literal("--")?;
                    tag.kind = Tag::COMMENT.to_owned();
                    comment_start = cursor.pos();
                    mode = Mode::Comment;
                } else if is_name_byte(b) {
                    if name_len == 0 && !b.is_ascii_lowercase() {
                        return Err(cursor.error_at(
                            ParseErrorKind::InvalidTagNameStart { found: b },
                            cursor.pos() - 1,
                        ));
                    }
                    name_len += 1;
                } else {
                    let next = match b {
                        b'/' | b'>' if name_len == 0 => {
                            return Err(cursor.error_at(ParseErrorKind::EmptyTagName, start));
                        }
                        b'/' => Mode::NonTagClosure,
                        b'>' => Mode::Body,
                        _ if is_whitespace(b) && name_len > 0 => Mode::Attributes,
                        _ => {
                            return Err(cursor.error_at(
                                ParseErrorKind::InvalidTagName { found: b },
                                cursor.pos() - 1,
                            ));
                        }
                    };
                    tag.kind = cursor.slice(name_start, name_start + name_len).into_owned();
                    mode = next;
                    if mode == Mode::NonTagClosure {
                        break;
                    }
                }
            }

            Mode::Comment => {
                if b == b'>' {
                    if let Some(text) = cursor.slice_from(comment_start).strip_suffix("--") {
                        tag.text = text.to_owned();
                        mode = Mode::NonTagClosure;
                        break;
                    }
                }
                cursor.consume();
            }

            Mode::Attributes => {
                if b == b'"' || b.is_ascii_lowercase() {
                    let (key, value) = parse_attribute(cursor)?;
                    tag.attributes.insert(key, value);
                } else if is_whitespace(b) {
                    cursor.consume();
                } else if b == b'/' {
                    cursor.consume();
                    mode = Mode::NonTagClosure;
                    break;
                } else if b == b'>' {
                    cursor.consume();
                    mode = Mode::Body;
                } else {
                    return Err(cursor.error_at(
                        ParseErrorKind::InvalidAttribute {
                            tag: tag.kind.clone(),
                        },
                        start,
                    ));
                }
            }

            Mode::Body => {
                if is_whitespace(b) {
                    cursor.consume();
                } else if b != b'<' {
                    let text_start = cursor.pos();
                    let text = cursor.text_until(b'<')?;
                    tag.children.push(Tag::text_node(text, text_start));
                } else {
                    cursor.consume();
                    if cursor.peek() == Some(b'/') {
                        break;
                    }
                    tag.children.push(parse_tag(cursor, true)?);
                }
            }

            Mode::NonTagClosure => break,
        }
    }

    if mode == Mode::NonTagClosure {
        if cursor.peek() != Some(b'>') {
            return Err(cursor.error_here(ParseErrorKind::UnclosedSelfClose));
        }
        cursor.consume();
    } else {
        let closing = format!("/{}>", tag.kind);
        if !cursor.eat_literal(&closing) {
            let opened_at = cursor.position(start);
            return Err(cursor
                .error_here(ParseErrorKind::MismatchedClose {
                    name: tag.kind.clone(),
                })
                .with_opened_at(opened_at));
        }
    }

    if tag.kind == Tag::CORE_CSS && !tag.children.is_empty() {
        tag.text = std::mem::take(&mut tag.children[0].text);
        tag.children.clear();
    }

    trace!(kind = %tag.kind, start, children = tag.children.len(), "parsed tag");
    Ok(tag)
}

/// Parse `name = "value"`, starting at the first byte of the name.
fn parse_attribute(cursor: &mut Cursor<'_>) -> Result<(String, String), ParseError> {
    let key = if cursor.peek() == Some(b'"') {
        parse_quoted_string(cursor)?
    } else {
        parse_unquoted_attribute_name(cursor)
    };
    cursor.skip_whitespace();
    cursor.expect(b'=')?;
    cursor.skip_whitespace();
    let value = parse_quoted_string(cursor)?;
    Ok((key, value))
}

/// Double-quoted string. No escapes: the content is every byte up to the
/// next `"`.
fn parse_quoted_string(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    cursor.expect(b'"')?;
    let text = cursor.text_until(b'"')?.into_owned();
    cursor.expect(b'"')?;
    Ok(text)
}

/// Unquoted attribute name. The caller has checked the first byte is `a-z`.
fn parse_unquoted_attribute_name(cursor: &mut Cursor<'_>) -> String {
    let start = cursor.pos();
    while let Some(b) = cursor.peek() {
        if !is_attribute_name_byte(b) {
            break;
        }
        cursor.consume();
    }
    cursor.slice_from(start).into_owned()
}
