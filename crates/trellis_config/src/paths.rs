//! Resolution of configured directory names into absolute paths.

use std::path::{Path, PathBuf};

use crate::types::ProjectConfig;

/// Absolute directory paths for one project, resolved against its root.
///
/// The resolution core consumes these directly; nothing downstream of this
/// type reads the configuration again.
#[derive(Clone, Debug)]
pub struct ProjectPaths {
    /// The project root directory.
    pub root: PathBuf,
    /// Absolute path to the layout documents directory.
    pub layouts_dir: PathBuf,
    /// Absolute path to the style documents directory.
    pub styles_dir: PathBuf,
    /// Absolute path to the generated output directory.
    pub output_dir: PathBuf,
    /// Absolute path to the build cache directory.
    pub cache_dir: PathBuf,
}

impl ProjectPaths {
    /// Resolves the configured directory names against a project root.
    pub fn resolve(root: &Path, config: &ProjectConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            layouts_dir: root.join(&config.dirs.layouts),
            styles_dir: root.join(&config.dirs.styles),
            output_dir: root.join(&config.dirs.output),
            cache_dir: root.join(&config.dirs.cache),
        }
    }
}
