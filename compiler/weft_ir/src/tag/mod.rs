//! Tag nodes.

use rustc_hash::FxHashMap;

/// Attribute table of a tag. Keys are unique; order is not significant.
pub type Attributes = FxHashMap<String, String>;

/// A parsed node: element, text run, or comment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tag {
    /// `"*"` for the document root, `"text"` for text runs, `"comment"` for
    /// comment blocks, otherwise the lowercase dotted tag name.
    pub kind: String,
    pub attributes: Attributes,
    /// Payload of text and comment nodes, and the folded body of `core.css`.
    pub text: String,
    pub children: Vec<Tag>,
    /// Byte offset of the opening `<` (or first text byte) in the source.
    pub start: u32,
}

impl Tag {
    /// Kind of the synthetic document root.
    pub const ROOT: &'static str = "*";
    /// Kind of literal text runs.
    pub const TEXT: &'static str = "text";
    /// Kind of `<!-- -->` blocks.
    pub const COMMENT: &'static str = "comment";
    /// Tag whose single text child is folded into its own `text`.
    pub const CORE_CSS: &'static str = "core.css";

    fn new(kind: String, text: String, start: u32) -> Self {
        Tag {
            kind,
            attributes: Attributes::default(),
            text,
            children: Vec::new(),
            start,
        }
    }

    /// Create the synthetic document root.
    pub fn root() -> Self {
        Self::new(Self::ROOT.to_owned(), String::new(), 0)
    }

    /// Create a text node starting at `start`.
    pub fn text_node(text: impl Into<String>, start: u32) -> Self {
        Self::new(Self::TEXT.to_owned(), text.into(), start)
    }

    /// Create an element with no attributes or children.
    pub fn element(kind: impl Into<String>, start: u32) -> Self {
        Self::new(kind.into(), String::new(), start)
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.kind == Self::ROOT
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        self.kind == Self::TEXT
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        self.kind == Self::COMMENT
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Direct children of the given kind, in document order.
    pub fn children_with_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// Pre-order walk over every node below `self` (excluding `self`).
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.descendants().count()
    }
}

/// Frees the subtree with an explicit work list; stack use does not grow
/// with nesting depth.
impl Drop for Tag {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut tag) = pending.pop() {
            pending.append(&mut tag.children);
        }
    }
}

/// Pre-order iterator returned by [`Tag::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Tag>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Tag;

    fn next(&mut self) -> Option<&'a Tag> {
        let tag = self.stack.pop()?;
        self.stack.extend(tag.children.iter().rev());
        Some(tag)
    }
}
