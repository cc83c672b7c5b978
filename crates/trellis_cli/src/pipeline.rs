//! Shared pipeline helpers for CLI commands.
//!
//! Project root discovery, diagnostic rendering, and the variable count
//! used by verbose output.

use std::path::{Path, PathBuf};

use trellis_diagnostics::DiagnosticSink;
use trellis_ir::{keys, DataDecl, LayoutNode};

use crate::GlobalArgs;

/// Walks up from `start` looking for the nearest directory containing
/// `trellis.toml`.
///
/// Returns the directory containing `trellis.toml`, or an error if none is
/// found.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join("trellis.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find trellis.toml in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root directory from global CLI args.
///
/// If `--config` is specified, uses that path (file → parent dir, dir →
/// itself). Otherwise walks up from the current directory looking for
/// `trellis.toml`.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(p.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")))
        } else {
            Ok(p)
        }
    } else {
        find_project_root(&std::env::current_dir()?)
    }
}

/// Renders all diagnostics from a sink to stderr.
///
/// Returns the number of diagnostics rendered.
pub fn render_diagnostics(sink: &DiagnosticSink) -> usize {
    let diagnostics = sink.diagnostics();
    for diag in &diagnostics {
        eprintln!("{diag}");
    }
    diagnostics.len()
}

/// Counts the variable declarations a resolved tree carries, across both
/// `data` and `shared_data`, recursively.
pub fn count_variables(tree: &LayoutNode) -> usize {
    let mut count = 0;
    for key in [keys::DATA, keys::SHARED_DATA] {
        if let Some(value) = tree.get(key) {
            count += DataDecl::vec_from_value(value).len();
        }
    }
    for child in tree.children() {
        count += count_variables(child);
    }
    count
}
