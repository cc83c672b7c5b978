//! Filesystem access to layout and style documents.
//!
//! Documents are UTF-8 JSON files, one tree per file, looked up by a bare
//! identifier (the file stem). The store is the explicit context object the
//! resolvers read through; nothing else in the pipeline touches the layout
//! or style directories.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use trellis_ir::LayoutNode;

use crate::error::ResolveError;

/// Extension used by layout and style documents on disk.
const DOC_EXT: &str = "json";

/// Read access to a project's layout and style directories.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    layouts_dir: PathBuf,
    styles_dir: PathBuf,
}

impl DocumentStore {
    /// Creates a store over the given directories.
    pub fn new(layouts_dir: impl Into<PathBuf>, styles_dir: impl Into<PathBuf>) -> Self {
        Self {
            layouts_dir: layouts_dir.into(),
            styles_dir: styles_dir.into(),
        }
    }

    /// The layout documents directory.
    pub fn layouts_dir(&self) -> &Path {
        &self.layouts_dir
    }

    /// The style documents directory.
    pub fn styles_dir(&self) -> &Path {
        &self.styles_dir
    }

    /// Locates a layout document by name.
    ///
    /// Looks in `base_dir` first (the directory of the including file), then
    /// falls back to the layouts root.
    pub fn layout_path(&self, base_dir: &Path, name: &str) -> Option<PathBuf> {
        let local = base_dir.join(format!("{name}.{DOC_EXT}"));
        if local.is_file() {
            return Some(local);
        }
        let root = self.layouts_dir.join(format!("{name}.{DOC_EXT}"));
        root.is_file().then_some(root)
    }

    /// Loads and parses a layout document by name.
    ///
    /// Returns the normalized tree and the path it was read from. Missing
    /// or malformed layout documents are hard errors.
    pub fn load_layout(
        &self,
        base_dir: &Path,
        name: &str,
    ) -> Result<(LayoutNode, PathBuf), ResolveError> {
        let path = self
            .layout_path(base_dir, name)
            .ok_or_else(|| ResolveError::LayoutNotFound {
                name: name.to_string(),
            })?;
        let content = std::fs::read_to_string(&path).map_err(|e| ResolveError::Io {
            path: path.clone(),
            source: e,
        })?;
        let mut node: LayoutNode =
            serde_json::from_str(&content).map_err(|e| ResolveError::LayoutParse {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        node.normalize_children();
        Ok((node, path))
    }

    /// Loads and parses a style document by name.
    ///
    /// The caller decides severity: the style resolver downgrades these
    /// errors to warnings.
    pub fn load_style(&self, name: &str) -> Result<LayoutNode, ResolveError> {
        let path = self.styles_dir.join(format!("{name}.{DOC_EXT}"));
        if !path.is_file() {
            return Err(ResolveError::StyleNotFound {
                name: name.to_string(),
            });
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ResolveError::Io {
            path: path.clone(),
            source: e,
        })?;
        let mut node: LayoutNode =
            serde_json::from_str(&content).map_err(|e| ResolveError::StyleParse {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        node.normalize_children();
        Ok(node)
    }

    /// Lists top-level layout documents as name → path.
    pub fn list_layouts(&self) -> BTreeMap<String, PathBuf> {
        list_documents(&self.layouts_dir)
    }

    /// Lists style documents as name → path.
    pub fn list_styles(&self) -> BTreeMap<String, PathBuf> {
        list_documents(&self.styles_dir)
    }
}

/// Scans a directory for `.json` documents. A missing directory is an
/// empty project, not an error.
fn list_documents(dir: &Path) -> BTreeMap<String, PathBuf> {
    let mut docs = BTreeMap::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return docs;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(DOC_EXT) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            docs.insert(stem.to_string(), path);
        }
    }
    docs
}
