//! Command handlers for the Weft CLI.
//!
//! Each submodule implements one command. The `*_file` entry points print
//! and exit like a CLI should; the functions they wrap return values and
//! are what the tests exercise.

mod check;
mod options;
mod parse;

pub use check::{check_file, includes_file, walk_includes, CheckError, WalkReport};
pub use options::{parse_options, OptionsError};
pub use parse::{parse_file, render_tree};

/// Text printed by `weftc help`.
pub const USAGE: &str = "\
Weft markup compiler

Usage: weftc <command> [options]

Commands:
  parse <file.weft>      Parse a file and print its tag tree
  check <file.weft>      Parse a file and everything it includes
  includes <file.weft>   List every file a check reads
  help                   Show this help message
  version                Show version information

Render options (validated, then passed through to the renderer;
check and includes do not act on them):
  --source=<dir>      Root of the markup sources
  --dest=<dir>        Root of the build output
  --ext=<ext>         Markup file extension (default: .weft)
  --auto-dir=<name>   Directory for generated assets (default: _)
  --placeholders      Ask the renderer for placeholder images
  --clean             Ask the renderer to clear old build output

Set RUST_LOG (e.g. RUST_LOG=debug) to trace parsing and include loading.
";

/// Read a source file's bytes, or report why not and exit.
fn read_file(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests;
