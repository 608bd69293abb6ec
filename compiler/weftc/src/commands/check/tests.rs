#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

/// A site on disk: `files` are `(relative path, contents)`.
fn site(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (path, contents) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, contents).unwrap();
    }
    dir
}

fn walk(dir: &TempDir, root: &str) -> Result<WalkReport, CheckError> {
    walk_includes(
        &dir.path().join(root),
        Rc::new(Options::default()),
        &FsLoader,
    )
}

#[test]
fn test_single_file() {
    let dir = site(&[("index.weft", "<page><h1>Hi</h1></page>")]);
    let report = walk(&dir, "index.weft").unwrap();
    assert_eq!(report.tags, 3);
    assert_eq!(report.includes(), 0);
    assert_eq!(report.files, vec![dir.path().join("index.weft")]);
}

#[test]
fn test_nested_includes_resolve_relative_to_includer() {
    let dir = site(&[
        (
            "index.weft",
            "<page><include src=\"parts/nav.weft\"/><main/></page>",
        ),
        ("parts/nav.weft", "<nav><include src=\"../shared/logo.weft\"/></nav>"),
        ("shared/logo.weft", "<img src=\"logo.png\"/>"),
    ]);

    let report = walk(&dir, "index.weft").unwrap();

    assert_eq!(report.includes(), 2);
    assert_eq!(
        report.files,
        vec![
            dir.path().join("index.weft"),
            dir.path().join("parts/nav.weft"),
            dir.path().join("shared/logo.weft"),
        ]
    );
    // page, include, main + nav, include + img
    assert_eq!(report.tags, 6);
}

#[test]
fn test_repeated_include_is_walked_once() {
    let dir = site(&[
        (
            "index.weft",
            "<page><include src=\"card.weft\"/><include src=\"./card.weft\"/></page>",
        ),
        ("card.weft", "<div>card</div>"),
    ]);

    let report = walk(&dir, "index.weft").unwrap();
    assert_eq!(report.includes(), 1);
    // page, include, include + div, text
    assert_eq!(report.tags, 5);
}

#[test]
fn test_include_without_src_is_ignored() {
    let dir = site(&[("index.weft", "<include name=\"x\"/>")]);
    let report = walk(&dir, "index.weft").unwrap();
    assert_eq!(report.includes(), 0);
}

#[test]
fn test_missing_include() {
    let dir = site(&[("index.weft", "<include src=\"gone.weft\"/>")]);
    let err = walk(&dir, "index.weft").unwrap_err();
    assert!(matches!(err, CheckError::Include(IncludeError::Load { .. })));
    assert_eq!(err.path(), dir.path().join("gone.weft"));
}

#[test]
fn test_parse_error_in_include_reports_its_file() {
    let dir = site(&[
        ("index.weft", "<page>\n<include src=\"bad.weft\"/>\n</page>"),
        ("bad.weft", "<ul>\n  <li>one</li>\n</ol>"),
    ]);

    let err = walk(&dir, "index.weft").unwrap_err();
    let bad = dir.path().join("bad.weft");
    assert_eq!(
        err.to_string(),
        format!(
            "{}:3:2 expected closing tag </ul> (opened at 1:1)",
            bad.display()
        )
    );
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_cycle_is_reported() {
    let dir = site(&[
        ("a.weft", "<include src=\"b.weft\"/>"),
        ("b.weft", "<include src=\"a.weft\"/>"),
    ]);

    let err = walk(&dir, "a.weft").unwrap_err();
    let a = dir.path().join("a.weft");
    let b = dir.path().join("b.weft");
    let CheckError::Cycle { chain } = &err else {
        panic!("expected a cycle, got {err:?}");
    };
    assert_eq!(chain, &vec![a.clone(), b.clone(), a.clone()]);
    assert_eq!(
        err.to_string(),
        format!(
            "{a}: include cycle: {a} -> {b} -> {a}",
            a = a.display(),
            b = b.display()
        )
    );
}

#[test]
fn test_self_include_is_a_cycle() {
    let dir = site(&[("loop.weft", "<div><include src=\"loop.weft\"/></div>")]);
    let err = walk(&dir, "loop.weft").unwrap_err();
    assert!(matches!(err, CheckError::Cycle { ref chain } if chain.len() == 2));
}

#[test]
fn test_diamond_is_not_a_cycle() {
    let dir = site(&[
        (
            "index.weft",
            "<page><include src=\"left.weft\"/><include src=\"right.weft\"/></page>",
        ),
        ("left.weft", "<include src=\"base.weft\"/>"),
        ("right.weft", "<include src=\"base.weft\"/>"),
        ("base.weft", "<base/>"),
    ]);

    let report = walk(&dir, "index.weft").unwrap();
    assert_eq!(report.includes(), 3);
}

#[test]
fn test_latin1_include_is_walked() {
    let dir = site(&[("index.weft", "<page><include src=\"legacy.weft\"/></page>")]);
    fs::write(dir.path().join("legacy.weft"), b"<p>caf\xe9</p>").unwrap();

    let report = walk(&dir, "index.weft").unwrap();
    assert_eq!(report.includes(), 1);
    // page, include + p, text
    assert_eq!(report.tags, 4);
}
