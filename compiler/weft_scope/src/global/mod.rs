//! Per-render include cache.

use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;
use weft_ir::Tag;
use weft_parse::{parse_document, ParseError};

/// Reads source files for includes.
///
/// Returns the raw bytes; no encoding is assumed. The scope layer never
/// resolves fallbacks between source and build trees, so the loader is
/// handed the final path.
pub trait SourceLoader {
    fn load(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Loads sources straight from the filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

impl<F> SourceLoader for F
where
    F: Fn(&Path) -> io::Result<Vec<u8>>,
{
    fn load(&self, path: &Path) -> io::Result<Vec<u8>> {
        self(path)
    }
}

/// An included file after parsing.
#[derive(Debug)]
pub struct ParsedInclude {
    pub tree: Rc<Tag>,
    pub path: PathBuf,
}

/// Failure to load or parse an included file.
#[derive(Debug, Error)]
pub enum IncludeError {
    #[error("{}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl IncludeError {
    /// The file that failed.
    pub fn path(&self) -> &Path {
        match self {
            IncludeError::Load { path, .. } | IncludeError::Parse { path, .. } => path,
        }
    }
}

/// Include cache for one top-level render.
///
/// Each resolved path is loaded and parsed at most once; later lookups
/// return the same tree. Entries are never invalidated, and a failed load
/// or parse stores nothing.
#[derive(Debug, Default)]
pub struct GlobalScope {
    includes: FxHashMap<PathBuf, Rc<ParsedInclude>>,
}

impl GlobalScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached parse of `path`, loading and parsing it on a miss.
    pub fn include(
        &mut self,
        path: &Path,
        loader: &dyn SourceLoader,
    ) -> Result<Rc<ParsedInclude>, IncludeError> {
        if let Some(cached) = self.includes.get(path) {
            debug!(path = %path.display(), "include cache hit");
            return Ok(Rc::clone(cached));
        }

        debug!(path = %path.display(), "include cache miss");
        let source = loader.load(path).map_err(|source| IncludeError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = parse_document(&source).map_err(|source| IncludeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = Rc::new(ParsedInclude {
            tree: Rc::new(tree),
            path: path.to_path_buf(),
        });
        self.includes.insert(path.to_path_buf(), Rc::clone(&parsed));
        Ok(parsed)
    }

    /// Cached entry for `path`, without loading.
    pub fn get(&self, path: &Path) -> Option<Rc<ParsedInclude>> {
        self.includes.get(path).cloned()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.includes.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.includes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
    }

    /// Paths parsed so far, sorted.
    pub fn cached_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.includes.keys().map(PathBuf::as_path).collect();
        paths.sort_unstable();
        paths
    }
}

#[cfg(test)]
mod tests;
