#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use std::cell::Cell;

/// In-memory loader that counts how often it is asked for a file.
#[derive(Default)]
struct MemoryLoader {
    files: FxHashMap<PathBuf, Vec<u8>>,
    loads: Cell<usize>,
}

impl MemoryLoader {
    fn with(mut self, path: &str, source: impl AsRef<[u8]>) -> Self {
        self.files.insert(PathBuf::from(path), source.as_ref().to_vec());
        self
    }
}

impl SourceLoader for MemoryLoader {
    fn load(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.loads.set(self.loads.get() + 1);
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

#[test]
fn test_include_parses_once() {
    let loader =
        MemoryLoader::default().with("parts/nav.weft", "<nav><a href=\"/\">Home</a></nav>");
    let mut global = GlobalScope::new();

    let first = global.include(Path::new("parts/nav.weft"), &loader).unwrap();
    let second = global.include(Path::new("parts/nav.weft"), &loader).unwrap();

    assert_eq!(loader.loads.get(), 1);
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(first.tree, second.tree);
    assert_eq!(first.path, PathBuf::from("parts/nav.weft"));
    assert_eq!(first.tree.children[0].kind, "nav");
}

#[test]
fn test_distinct_paths_are_cached_separately() {
    let loader = MemoryLoader::default()
        .with("a.weft", "<a/>")
        .with("b.weft", "<b/>");
    let mut global = GlobalScope::new();

    global.include(Path::new("b.weft"), &loader).unwrap();
    global.include(Path::new("a.weft"), &loader).unwrap();
    global.include(Path::new("b.weft"), &loader).unwrap();

    assert_eq!(loader.loads.get(), 2);
    assert_eq!(global.len(), 2);
    assert_eq!(
        global.cached_paths(),
        vec![Path::new("a.weft"), Path::new("b.weft")]
    );
}

#[test]
fn test_missing_file_is_not_cached() {
    let loader = MemoryLoader::default();
    let mut global = GlobalScope::new();

    let err = global.include(Path::new("gone.weft"), &loader).unwrap_err();
    assert!(matches!(err, IncludeError::Load { .. }));
    assert_eq!(err.path(), Path::new("gone.weft"));
    assert!(global.is_empty());

    // A second attempt goes back to the loader.
    global.include(Path::new("gone.weft"), &loader).unwrap_err();
    assert_eq!(loader.loads.get(), 2);
}

#[test]
fn test_parse_failure_is_not_cached() {
    let loader = MemoryLoader::default().with("bad.weft", "<a></b>");
    let mut global = GlobalScope::new();

    let err = global.include(Path::new("bad.weft"), &loader).unwrap_err();
    assert_eq!(
        err.to_string(),
        "bad.weft: 1:6 expected closing tag </a> (opened at 1:1)"
    );
    assert!(!global.contains(Path::new("bad.weft")));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_get_does_not_load() {
    let loader = MemoryLoader::default().with("a.weft", "<a/>");
    let mut global = GlobalScope::new();
    assert!(global.get(Path::new("a.weft")).is_none());
    assert_eq!(loader.loads.get(), 0);

    global.include(Path::new("a.weft"), &loader).unwrap();
    assert!(global.get(Path::new("a.weft")).is_some());
    assert_eq!(loader.loads.get(), 1);
}

#[test]
fn test_closure_loader() {
    let loader = |_: &Path| -> io::Result<Vec<u8>> { Ok(b"<x/>".to_vec()) };
    let mut global = GlobalScope::new();
    let parsed = global.include(Path::new("any.weft"), &loader).unwrap();
    assert_eq!(parsed.tree.children[0].kind, "x");
}

#[test]
fn test_non_utf8_include_parses() {
    let loader = MemoryLoader::default().with("latin1.weft", b"<p>caf\xe9</p>");
    let mut global = GlobalScope::new();
    let parsed = global.include(Path::new("latin1.weft"), &loader).unwrap();
    assert_eq!(parsed.tree.children[0].children[0].text, "caf\u{fffd}");
}

#[test]
fn test_fs_loader_reads_raw_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.weft");
    std::fs::write(&path, b"<p>caf\xe9</p>").unwrap();

    let mut global = GlobalScope::new();
    let parsed = global.include(&path, &FsLoader).unwrap();
    assert_eq!(parsed.tree.children[0].children[0].text, "caf\u{fffd}");
}

#[test]
fn test_cached_deep_tree_is_released_with_the_render() {
    let depth = 60_000;
    let source = format!("{}{}", "<a>".repeat(depth), "</a>".repeat(depth));
    let loader = MemoryLoader::default().with("deep.weft", source);
    let mut global = GlobalScope::new();
    let parsed = global.include(Path::new("deep.weft"), &loader).unwrap();
    assert_eq!(parsed.tree.node_count(), depth + 1);
    drop(parsed);
    drop(global);
}
