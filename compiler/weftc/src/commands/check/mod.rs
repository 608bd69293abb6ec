//! The `check` and `includes` commands: parse a file and everything it
//! includes.
//!
//! An include is any tag of kind `include` with a `src` attribute. Paths
//! resolve against the including file and go through one render's include
//! cache, so each file is read and parsed once no matter how often it is
//! referenced.

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rustc_hash::FxHashSet;
use tracing::debug;
use weft_ir::Tag;
use weft_scope::{normalize, FsLoader, IncludeError, Options, Scope, SourceLoader};
use weft_stack::ensure_sufficient_stack;

use super::options::parse_options;

const INCLUDE: &str = "include";
const SRC: &str = "src";

/// Why a walk stopped.
#[derive(Debug)]
pub enum CheckError {
    /// A file could not be read or parsed.
    Include(IncludeError),
    /// A file includes one of its own ancestors. `chain` runs from the
    /// first file on the cycle back to itself.
    Cycle { chain: Vec<PathBuf> },
}

impl CheckError {
    /// The file the error is reported against.
    pub fn path(&self) -> &Path {
        match self {
            CheckError::Include(err) => err.path(),
            CheckError::Cycle { chain } => chain.first().map_or(Path::new(""), PathBuf::as_path),
        }
    }
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Include(IncludeError::Parse { path, source }) => {
                write!(f, "{}:{source}", path.display())
            }
            CheckError::Include(err @ IncludeError::Load { .. }) => write!(f, "{err}"),
            CheckError::Cycle { chain } => {
                write!(f, "{}: include cycle: ", self.path().display())?;
                for (i, path) in chain.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" -> ")?;
                    }
                    write!(f, "{}", path.display())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Include(err) => Some(err),
            CheckError::Cycle { .. } => None,
        }
    }
}

impl From<IncludeError> for CheckError {
    fn from(err: IncludeError) -> Self {
        CheckError::Include(err)
    }
}

/// Outcome of a successful walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkReport {
    /// Nodes across every distinct file, excluding synthetic roots.
    pub tags: usize,
    /// Every file read, the root included, sorted.
    pub files: Vec<PathBuf>,
}

impl WalkReport {
    /// Distinct files pulled in besides the root.
    pub fn includes(&self) -> usize {
        self.files.len().saturating_sub(1)
    }
}

/// Parse `path` and every file it transitively includes.
///
/// Stops at the first load or parse failure, or at the first include that
/// names a file already being walked.
pub fn walk_includes(
    path: &Path,
    options: Rc<Options>,
    loader: &dyn SourceLoader,
) -> Result<WalkReport, CheckError> {
    let path = normalize(path);
    let scope = Scope::new(path.clone(), options);
    let root = scope.global().borrow_mut().include(&path, loader)?;

    let mut walker = Walker {
        loader,
        active: vec![path],
        done: FxHashSet::default(),
        tags: 0,
    };
    walker.walk(&root.tree, &scope)?;

    let files = scope
        .global()
        .borrow()
        .cached_paths()
        .into_iter()
        .map(Path::to_path_buf)
        .collect();
    Ok(WalkReport {
        tags: walker.tags,
        files,
    })
}

struct Walker<'a> {
    loader: &'a dyn SourceLoader,
    /// Files currently being walked, outermost first.
    active: Vec<PathBuf>,
    /// Files whose whole include subtree has been walked.
    done: FxHashSet<PathBuf>,
    tags: usize,
}

impl Walker<'_> {
    fn walk(&mut self, tree: &Tag, scope: &Scope) -> Result<(), CheckError> {
        ensure_sufficient_stack(|| {
            self.tags += tree.node_count() - 1;

            for tag in tree.descendants().filter(|tag| tag.kind == INCLUDE) {
                let Some(src) = tag.attribute(SRC) else {
                    continue;
                };
                let resolved = scope.file().resolve_relative(src);

                if let Some(at) = self.active.iter().position(|p| *p == resolved) {
                    let mut chain = self.active[at..].to_vec();
                    chain.push(resolved);
                    return Err(CheckError::Cycle { chain });
                }
                if self.done.contains(&resolved) {
                    continue;
                }

                debug!(
                    from = %scope.file().path().display(),
                    to = %resolved.display(),
                    "walking include"
                );
                let (parsed, child) = scope.include(src, self.loader)?;
                self.active.push(resolved);
                self.walk(&parsed.tree, &child)?;
                if let Some(finished) = self.active.pop() {
                    self.done.insert(finished);
                }
            }
            Ok(())
        })
    }
}

/// Parse options and walk `path` on disk, exiting on failure.
fn walk_or_exit(path: &str, args: &[String]) -> WalkReport {
    let options = match parse_options(args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match walk_includes(Path::new(path), Rc::new(options), &FsLoader) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Check that a file and everything it includes parse.
pub fn check_file(path: &str, args: &[String]) {
    let report = walk_or_exit(path, args);
    println!(
        "OK: {path} ({} tags, {} includes)",
        report.tags,
        report.includes()
    );
}

/// List every file a walk of `path` reads.
pub fn includes_file(path: &str, args: &[String]) {
    let report = walk_or_exit(path, args);
    for file in &report.files {
        println!("{}", file.display());
    }
}

#[cfg(test)]
mod tests;
