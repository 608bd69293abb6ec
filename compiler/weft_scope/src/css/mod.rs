//! Render-wide CSS class allocator and rule accumulator.

/// Generates unique class names and collects the rules written for them.
///
/// One allocator serves a whole render, including every included file, so
/// the counter alone guarantees uniqueness. Rules are appended in call order
/// and never deduplicated.
#[derive(Clone, Debug, Default)]
pub struct CssAllocator {
    sequence: u32,
    css: String,
}

impl CssAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next class name: `p1`, `p2`, ...
    pub fn next_class(&mut self) -> String {
        self.sequence += 1;
        format!("p{}", self.sequence)
    }

    /// Number of classes allocated so far.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Append `node_kind.class<modifier> {body}`.
    ///
    /// `modifier` is pasted verbatim after the class, so it carries its own
    /// punctuation (`":hover"`, `" > li"`, or empty).
    pub fn add_rule(&mut self, node_kind: &str, class: &str, modifier: &str, body: &str) {
        self.css.push_str(node_kind);
        self.css.push('.');
        self.css.push_str(class);
        self.css.push_str(modifier);
        self.css.push_str(" {");
        self.css.push_str(body);
        self.css.push_str("}\n");
    }

    /// Append the same rule as [`add_rule`](Self::add_rule) wrapped in
    /// `@media (<query>){ ... }`.
    pub fn add_media_rule(
        &mut self,
        query: &str,
        node_kind: &str,
        class: &str,
        modifier: &str,
        body: &str,
    ) {
        self.css.push_str("@media (");
        self.css.push_str(query);
        self.css.push_str("){");
        self.add_rule(node_kind, class, modifier, body);
        self.css.push('}');
    }

    /// Rules accumulated so far.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Drain the accumulated rules, leaving the counter untouched.
    pub fn take_css(&mut self) -> String {
        std::mem::take(&mut self.css)
    }
}
