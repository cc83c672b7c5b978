//! `trellis build` — the incremental build command.
//!
//! Loads the project configuration, decides which documents are stale
//! against one mtime snapshot, resolves and emits each stale document, and
//! persists the updated cache maps once at the end. A failing document is
//! reported and skipped; the rest of the pass continues.

use std::path::Path;

use trellis_cache::{stale_documents, CacheState, MtimeSnapshot};
use trellis_common::hash::ContentHash;
use trellis_config::{load_config, ProjectPaths};
use trellis_diagnostics::DiagnosticSink;
use trellis_resolve::{resolve_document, DocumentStore};

use crate::emit::{Emitter, JsonEmitter};
use crate::pipeline::{count_variables, render_diagnostics, resolve_project_root};
use crate::{BuildArgs, GlobalArgs};

/// Runs the `trellis build` command. Returns the process exit code.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let root = resolve_project_root(global)?;
    let config = load_config(&root)?;
    let paths = ProjectPaths::resolve(&root, &config);

    let outcome = build_project(&paths, args.force, global)?;

    if !global.quiet {
        eprintln!(
            "build finished: {} built, {} up to date, {} failed",
            outcome.built, outcome.skipped, outcome.failed
        );
    }
    Ok(if outcome.failed > 0 { 1 } else { 0 })
}

/// Counts from one build pass.
pub struct BuildOutcome {
    /// Documents resolved and emitted.
    pub built: usize,
    /// Documents skipped as up to date.
    pub skipped: usize,
    /// Documents that failed to resolve or emit.
    pub failed: usize,
}

/// Runs one build pass over a project.
///
/// Separated from [`run`] so tests can drive it against a temp directory
/// without going through config discovery.
pub fn build_project(
    paths: &ProjectPaths,
    force: bool,
    global: &GlobalArgs,
) -> Result<BuildOutcome, Box<dyn std::error::Error>> {
    let store = DocumentStore::new(&paths.layouts_dir, &paths.styles_dir);
    let sink = DiagnosticSink::new();

    let mut cache = if force {
        CacheState::default()
    } else {
        CacheState::load(&paths.cache_dir)
    };
    let snapshot = MtimeSnapshot::scan(&paths.layouts_dir, &paths.styles_dir);
    drop_vanished_records(&mut cache, &snapshot);

    let documents = store.list_layouts();
    let names: Vec<String> = documents.keys().cloned().collect();
    let stale = stale_documents(&cache, &snapshot, names.iter());
    let skipped = names.len() - stale.len();

    let emitter = JsonEmitter::new(&paths.output_dir);
    let mut built = 0;
    let mut failed = 0;

    for name in &stale {
        match build_one(name, &store, &sink, &emitter, global) {
            Ok(record) => {
                let mtime = snapshot.layout_mtime(name).unwrap_or(record.mtime);
                cache.record(
                    name,
                    mtime,
                    record.content_hash,
                    record.includes,
                    record.style_deps,
                );
                built += 1;
            }
            Err(message) => {
                // Prior output and cache record stay as they were; the
                // document remains stale and is retried next pass.
                sink.error(name, message);
                failed += 1;
            }
        }
    }

    cache.save(&paths.cache_dir)?;
    render_diagnostics(&sink);

    Ok(BuildOutcome {
        built,
        skipped,
        failed,
    })
}

struct BuiltRecord {
    mtime: i64,
    content_hash: ContentHash,
    includes: Vec<String>,
    style_deps: Vec<String>,
}

fn build_one(
    name: &str,
    store: &DocumentStore,
    sink: &DiagnosticSink,
    emitter: &JsonEmitter,
    global: &GlobalArgs,
) -> Result<BuiltRecord, String> {
    let (tree, deps) = resolve_document(store, sink, name).map_err(|e| e.to_string())?;
    emitter.emit(name, &tree).map_err(|e| e.to_string())?;

    if global.verbose {
        eprintln!("  {name}: {} variables", count_variables(&tree));
    }

    let source_path = store
        .layouts_dir()
        .join(format!("{name}.json"));
    let (mtime, content_hash) = fingerprint(&source_path)?;
    Ok(BuiltRecord {
        mtime,
        content_hash,
        includes: deps.include_list(),
        style_deps: deps.style_list(),
    })
}

/// Reads the mtime and content hash of a just-built source file.
fn fingerprint(path: &Path) -> Result<(i64, ContentHash), String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    let mtime = trellis_cache::snapshot::file_mtime(path)
        .ok_or_else(|| format!("cannot stat {}", path.display()))?;
    Ok((mtime, ContentHash::from_bytes(&bytes)))
}

/// Drops cache records for documents whose source file no longer exists,
/// so a deleted layout stops invalidating its former includes.
fn drop_vanished_records(cache: &mut CacheState, snapshot: &MtimeSnapshot) {
    let vanished: Vec<String> = cache
        .records
        .keys()
        .filter(|name| snapshot.layout_mtime(name).is_none())
        .cloned()
        .collect();
    for name in vanished {
        cache.remove(&name);
    }
}
