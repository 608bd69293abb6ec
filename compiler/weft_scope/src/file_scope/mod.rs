//! Per-file render context.

use std::path::{Component, Path, PathBuf};
use std::rc::Rc;

use crate::{CssAllocator, GlobalScope, LocalScope, Options};

/// Identity of the file being rendered plus the render-wide shared state.
///
/// A child file scope (see [`FileScope::child`]) changes only the path;
/// `options`, `global` and `css` are the same instances as the parent's.
#[derive(Debug)]
pub struct FileScope {
    path: PathBuf,
    options: Rc<Options>,
    global: LocalScope<GlobalScope>,
    css: LocalScope<CssAllocator>,
}

impl FileScope {
    /// Start a new render rooted at `path`, with a fresh include cache and
    /// CSS allocator.
    pub fn new(path: impl Into<PathBuf>, options: Rc<Options>) -> Self {
        FileScope {
            path: path.into(),
            options,
            global: LocalScope::new(GlobalScope::new()),
            css: LocalScope::new(CssAllocator::new()),
        }
    }

    /// Context for an included file within the same render.
    pub fn child(&self, path: impl Into<PathBuf>) -> Self {
        FileScope {
            path: path.into(),
            options: Rc::clone(&self.options),
            global: self.global.clone(),
            css: self.css.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &Rc<Options> {
        &self.options
    }

    pub fn global(&self) -> &LocalScope<GlobalScope> {
        &self.global
    }

    pub fn css(&self) -> &LocalScope<CssAllocator> {
        &self.css
    }

    /// Resolve `path` against the directory containing this file.
    ///
    /// The result is lexically cleaned (`.` dropped, `..` folded into its
    /// parent) so different spellings of one file share an include cache
    /// entry. A leading `/` does not escape the directory: `"/x"` resolves
    /// the same as `"x"`.
    pub fn resolve_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        let relative = path
            .as_ref()
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)));
        clean(dir.components().chain(relative))
    }

    /// Allocate the next render-wide unique class name.
    pub fn next_class(&self) -> String {
        self.css.borrow_mut().next_class()
    }

    pub fn add_css(&self, node_kind: &str, class: &str, modifier: &str, body: &str) {
        self.css
            .borrow_mut()
            .add_rule(node_kind, class, modifier, body);
    }

    pub fn add_media_css(
        &self,
        query: &str,
        node_kind: &str,
        class: &str,
        modifier: &str,
        body: &str,
    ) {
        self.css
            .borrow_mut()
            .add_media_rule(query, node_kind, class, modifier, body);
    }

    /// Drain the stylesheet accumulated so far by every file in this render.
    pub fn take_css(&self) -> String {
        self.css.borrow_mut().take_css()
    }
}

/// Lexically clean `path` the way [`FileScope::resolve_relative`] cleans
/// its results, so callers can key the include cache consistently.
pub fn normalize(path: &Path) -> PathBuf {
    clean(path.components())
}

fn clean<'a>(components: impl Iterator<Item = Component<'a>>) -> PathBuf {
    let mut out = PathBuf::new();
    for component in components {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
