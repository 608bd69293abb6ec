//! Weft IR - the parsed tag tree.
//!
//! A parsed file is a single [`Tag`] of kind `"*"` that owns the top-level
//! tags as children. Every node exclusively owns its children, so the tree
//! has no back-references and no cycles.

mod tag;

pub use tag::{Attributes, Descendants, Tag};
