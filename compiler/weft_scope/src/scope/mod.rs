//! Lexical scopes for rendering.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use rustc_hash::FxHashMap;
use weft_ir::Tag;

use crate::{
    FileScope, GlobalScope, IncludeError, LocalScope, Options, ParsedInclude, SourceLoader,
};

/// A binding environment plus the file it renders.
///
/// Child scopes copy the binding table, so definitions made in a child are
/// never visible to its parent or siblings. Bound tags are shared, not
/// cloned.
#[derive(Clone, Debug)]
pub struct Scope {
    bindings: FxHashMap<String, Rc<Tag>>,
    file: Rc<FileScope>,
}

impl Scope {
    /// Root scope of a new render of `path`.
    pub fn new(path: impl Into<PathBuf>, options: Rc<Options>) -> Self {
        Self::with_file(FileScope::new(path, options))
    }

    /// Empty scope over an existing file context.
    pub fn with_file(file: FileScope) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            file: Rc::new(file),
        }
    }

    /// Copy of this scope's bindings over the same file.
    pub fn child(&self) -> Self {
        self.clone()
    }

    /// Copy of this scope's bindings over a new file in the same render.
    pub fn file_child(&self, path: impl Into<PathBuf>) -> Self {
        Scope {
            bindings: self.bindings.clone(),
            file: Rc::new(self.file.child(path)),
        }
    }

    /// Bind `name`, replacing any earlier binding in this scope.
    pub fn define(&mut self, name: impl Into<String>, tag: Rc<Tag>) {
        self.bindings.insert(name.into(), tag);
    }

    pub fn lookup(&self, name: &str) -> Option<&Rc<Tag>> {
        self.bindings.get(name)
    }

    pub fn file(&self) -> &FileScope {
        &self.file
    }

    pub fn global(&self) -> &LocalScope<GlobalScope> {
        self.file.global()
    }

    /// Resolve `relative` against the current file, fetch its tree through
    /// the render's include cache, and return it with a scope for rendering
    /// it.
    ///
    /// The returned scope is a [`file_child`](Self::file_child) of `self`.
    pub fn include(
        &self,
        relative: impl AsRef<Path>,
        loader: &dyn SourceLoader,
    ) -> Result<(Rc<ParsedInclude>, Scope), IncludeError> {
        let path = self.file.resolve_relative(relative);
        let parsed = self.global().borrow_mut().include(&path, loader)?;
        let scope = self.file_child(path);
        Ok((parsed, scope))
    }
}

#[cfg(test)]
mod tests;
