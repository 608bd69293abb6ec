#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::io;

fn root(path: &str) -> Scope {
    Scope::new(path, Rc::new(Options::default()))
}

fn tag(kind: &str) -> Rc<Tag> {
    Rc::new(Tag::element(kind, 0))
}

#[test]
fn test_child_does_not_leak_into_parent() {
    let mut parent = root("index.weft");
    parent.define("x", tag("a"));

    let mut child = parent.child();
    child.define("y", tag("b"));
    child.define("x", tag("c"));

    assert!(parent.lookup("y").is_none());
    assert_eq!(parent.lookup("x").unwrap().kind, "a");
    assert_eq!(child.lookup("x").unwrap().kind, "c");
    assert_eq!(child.lookup("y").unwrap().kind, "b");
}

#[test]
fn test_siblings_are_isolated() {
    let parent = root("index.weft");
    let mut left = parent.child();
    let right = parent.child();
    left.define("only_left", tag("a"));
    assert!(right.lookup("only_left").is_none());
}

#[test]
fn test_child_keeps_file() {
    let parent = root("site/index.weft");
    let child = parent.child();
    assert_eq!(child.file().path(), Path::new("site/index.weft"));
    assert!(child.file().css().ptr_eq(parent.file().css()));
}

#[test]
fn test_file_child_copies_bindings() {
    let mut parent = root("index.weft");
    parent.define("x", tag("a"));

    let mut child = parent.file_child("nav.weft");
    assert_eq!(child.file().path(), Path::new("nav.weft"));
    assert_eq!(child.lookup("x").unwrap().kind, "a");

    child.define("z", tag("b"));
    assert!(parent.lookup("z").is_none());
}

#[test]
fn test_class_names_unique_across_includes() {
    let root = root("index.weft");
    let first = root.file().next_class();

    let include = root.file_child("parts/nav.weft");
    let second = include.file().next_class();
    let third = include.file().next_class();

    let fourth = root.file().next_class();

    assert_eq!(
        vec![first, second, third, fourth],
        vec!["p1", "p2", "p3", "p4"]
    );
    assert!(root.file().css().ptr_eq(include.file().css()));
    assert!(root.global().ptr_eq(include.global()));
}

struct CountingLoader {
    loads: Cell<usize>,
}

impl SourceLoader for CountingLoader {
    fn load(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.loads.set(self.loads.get() + 1);
        match path.to_str() {
            Some("site/parts/nav.weft") => Ok(b"<nav>menu</nav>".to_vec()),
            _ => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        }
    }
}

#[test]
fn test_include_resolves_and_caches() {
    let loader = CountingLoader { loads: Cell::new(0) };
    let root = root("site/index.weft");

    let (first, nav_scope) = root.include("parts/nav.weft", &loader).unwrap();
    assert_eq!(nav_scope.file().path(), Path::new("site/parts/nav.weft"));
    assert_eq!(first.path, PathBuf::from("site/parts/nav.weft"));

    // Same file, spelled differently, from inside the include.
    let (second, _) = nav_scope.include("../parts/./nav.weft", &loader).unwrap();

    assert_eq!(loader.loads.get(), 1);
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(first.tree.children[0].children[0].text, "menu");
}

#[test]
fn test_include_failure_propagates() {
    let loader = CountingLoader { loads: Cell::new(0) };
    let root = root("site/index.weft");

    let err = root.include("missing.weft", &loader).unwrap_err();
    assert_eq!(err.path(), Path::new("site/missing.weft"));
    assert!(root.global().borrow().is_empty());
}

#[test]
fn test_separate_renders_do_not_share_state() {
    let loader = CountingLoader { loads: Cell::new(0) };
    let a = root("site/index.weft");
    let b = root("site/index.weft");

    a.include("parts/nav.weft", &loader).unwrap();
    b.include("parts/nav.weft", &loader).unwrap();

    assert_eq!(loader.loads.get(), 2);
    assert_eq!(b.file().next_class(), "p1");
}
