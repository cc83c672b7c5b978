//! One consistent view of source-file mtimes for a build pass.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Source-file mtimes captured once at the start of a build pass.
///
/// Every staleness decision in a pass reads from the same snapshot, so
/// documents rebuilt early in the pass cannot change what later documents
/// compare against. Names are relative to their tree root, without the
/// `.json` extension, using `/` as the separator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MtimeSnapshot {
    /// Mtime per layout document, keyed by document name.
    pub layouts: BTreeMap<String, i64>,
    /// Mtime per style document, keyed by style name.
    pub styles: BTreeMap<String, i64>,
}

impl MtimeSnapshot {
    /// Scans the layout tree (recursively) and the style directory (flat),
    /// capturing the mtime of every `.json` file found.
    ///
    /// A missing directory contributes an empty map.
    pub fn scan(layouts_dir: &Path, styles_dir: &Path) -> Self {
        let mut layouts = BTreeMap::new();
        scan_tree(layouts_dir, "", &mut layouts);
        let mut styles = BTreeMap::new();
        scan_flat(styles_dir, &mut styles);
        Self { layouts, styles }
    }

    /// The snapshotted mtime of a layout document, if it exists on disk.
    pub fn layout_mtime(&self, name: &str) -> Option<i64> {
        self.layouts.get(name).copied()
    }

    /// The snapshotted mtime of a style document, if it exists on disk.
    pub fn style_mtime(&self, name: &str) -> Option<i64> {
        self.styles.get(name).copied()
    }
}

/// Reads a file's mtime as seconds since the Unix epoch.
pub fn file_mtime(path: &Path) -> Option<i64> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    let secs = match modified.duration_since(std::time::UNIX_EPOCH) {
        Ok(since) => since.as_secs() as i64,
        // Pre-epoch mtimes count backwards.
        Err(err) => -(err.duration().as_secs() as i64),
    };
    Some(secs)
}

fn scan_tree(dir: &Path, prefix: &str, out: &mut BTreeMap<String, i64>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_dir() {
            let child_prefix = if prefix.is_empty() {
                format!("{file_name}/")
            } else {
                format!("{prefix}{file_name}/")
            };
            scan_tree(&path, &child_prefix, out);
        } else if let Some(stem) = file_name.strip_suffix(".json") {
            if let Some(mtime) = file_mtime(&path) {
                out.insert(format!("{prefix}{stem}"), mtime);
            }
        }
    }
}

fn scan_flat(dir: &Path, out: &mut BTreeMap<String, i64>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(stem) = file_name.strip_suffix(".json") {
            if !path.is_dir() {
                if let Some(mtime) = file_mtime(&path) {
                    out.insert(stem.to_string(), mtime);
                }
            }
        }
    }
}
