//! Command-line parsing for [`Options`].

use std::path::PathBuf;

use thiserror::Error;
use weft_scope::Options;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    Unknown(String),
    #[error("option '{0}' needs a value")]
    MissingValue(&'static str),
}

/// Build [`Options`] from `--flag` / `--flag=value` arguments.
///
/// Recognised: `--source=<dir>`, `--dest=<dir>`, `--ext=<ext>`,
/// `--auto-dir=<name>`, `--placeholders`, `--clean`. An extension given
/// without its leading dot gets one.
pub fn parse_options(args: &[String]) -> Result<Options, OptionsError> {
    let mut options = Options::default();

    for arg in args {
        if let Some(dir) = arg.strip_prefix("--source=") {
            options.source = PathBuf::from(non_empty("--source", dir)?);
        } else if let Some(dir) = arg.strip_prefix("--dest=") {
            options.destination = PathBuf::from(non_empty("--dest", dir)?);
        } else if let Some(ext) = arg.strip_prefix("--ext=") {
            let ext = non_empty("--ext", ext)?;
            options.extension = if ext.starts_with('.') {
                ext.to_owned()
            } else {
                format!(".{ext}")
            };
        } else if let Some(dir) = arg.strip_prefix("--auto-dir=") {
            options.auto_generated_dir = non_empty("--auto-dir", dir)?.to_owned();
        } else if arg == "--placeholders" {
            options.use_placeholder_images = true;
        } else if arg == "--clean" {
            options.clean = true;
        } else {
            return Err(OptionsError::Unknown(arg.clone()));
        }
    }

    Ok(options)
}

fn non_empty<'a>(flag: &'static str, value: &'a str) -> Result<&'a str, OptionsError> {
    if value.is_empty() {
        Err(OptionsError::MissingValue(flag))
    } else {
        Ok(value)
    }
}
