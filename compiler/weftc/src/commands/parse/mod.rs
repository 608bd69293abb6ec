//! The `parse` command: dump a file's tag tree.

use weft_ir::Tag;
use weft_parse::parse_document;
use weft_stack::ensure_sufficient_stack;

use super::read_file;

/// Parse a file and print its tree, or its first error.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let tree = match parse_document(&content) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{path}:{err}");
            std::process::exit(1);
        }
    };

    println!("Parse result for '{path}':");
    println!("  Top-level tags: {}", tree.children.len());
    println!("  Nodes: {}", tree.node_count() - 1);
    println!();
    print!("{}", render_tree(&tree));
}

/// Indented dump of every node below `root`, one per line.
///
/// Elements print as `kind name="value" ...` with attributes sorted by
/// name; text, comments and folded `core.css` bodies print their payload
/// Rust-escaped in quotes.
pub fn render_tree(root: &Tag) -> String {
    let mut out = String::new();
    for child in &root.children {
        write_tag(&mut out, child, 0);
    }
    out
}

fn write_tag(out: &mut String, tag: &Tag, depth: usize) {
    ensure_sufficient_stack(|| {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&tag.kind);

        let mut attributes: Vec<_> = tag.attributes.iter().collect();
        attributes.sort_unstable();
        for (name, value) in attributes {
            out.push_str(&format!(" {name}={value:?}"));
        }
        if !tag.text.is_empty() {
            out.push_str(&format!(" {:?}", tag.text));
        }
        out.push('\n');

        for child in &tag.children {
            write_tag(out, child, depth + 1);
        }
    });
}
