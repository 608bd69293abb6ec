//! Process options threaded through every file scope.

use std::path::PathBuf;

/// Build and serve settings.
///
/// The scope layer carries these by reference and never reads them; they
/// exist for the renderer and the serving layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Root of the markup sources.
    pub source: PathBuf,
    /// Root of the build output, checked before `source` when serving.
    pub destination: PathBuf,
    /// Extension of markup sources, including the dot.
    pub extension: String,
    /// Directory (under `destination`) for generated assets such as
    /// resized images.
    pub auto_generated_dir: String,
    /// Serve grey placeholder images for missing image files.
    pub use_placeholder_images: bool,
    /// Remove previous build output before building.
    pub clean: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            source: PathBuf::from("."),
            destination: PathBuf::from("."),
            extension: ".weft".to_owned(),
            auto_generated_dir: "_".to_owned(),
            use_placeholder_images: false,
            clean: false,
        }
    }
}
