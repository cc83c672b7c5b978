//! The persisted cache state: per-document records and dependency maps.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use trellis_common::hash::ContentHash;

use crate::error::CacheError;

/// File holding the per-document build records.
const RECORDS_FILE: &str = "timestamps.json";
/// File holding the document -> included-documents map.
const INCLUDES_FILE: &str = "includes.json";
/// File holding the document -> style-names map.
const STYLE_DEPS_FILE: &str = "style_deps.json";

/// What was known about a document at its last successful build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRecord {
    /// The document file's mtime, as seconds since the Unix epoch.
    pub mtime: i64,
    /// Hash of the document's raw bytes at build time.
    pub content_hash: ContentHash,
}

/// The full cache state, loaded at the start of a build pass and written
/// back once at the end.
///
/// The three maps are persisted as separate JSON files so each stays a
/// flat, diffable object. They are only meaningful together, so if any
/// one of them is present but unreadable the whole state resets to empty
/// rather than mixing fresh and stale halves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheState {
    /// Per-document build records, keyed by document name.
    pub records: BTreeMap<String, DocRecord>,
    /// For each document, the documents its include expansion reached.
    pub includes: BTreeMap<String, Vec<String>>,
    /// For each document, the style names its resolution reached.
    pub style_deps: BTreeMap<String, Vec<String>>,
}

enum MapFile<T> {
    Missing,
    Corrupt,
    Loaded(T),
}

fn read_map<T: DeserializeOwned>(path: &Path) -> MapFile<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return MapFile::Missing,
    };
    match serde_json::from_str(&content) {
        Ok(value) => MapFile::Loaded(value),
        Err(_) => MapFile::Corrupt,
    }
}

impl CacheState {
    /// Loads the cache from `cache_dir`, never failing.
    ///
    /// Missing files load as empty maps. A file that exists but cannot be
    /// parsed discards the whole state, forcing a full rebuild.
    pub fn load(cache_dir: &Path) -> Self {
        let records = read_map(&cache_dir.join(RECORDS_FILE));
        let includes = read_map(&cache_dir.join(INCLUDES_FILE));
        let style_deps = read_map(&cache_dir.join(STYLE_DEPS_FILE));
        match (records, includes, style_deps) {
            (MapFile::Corrupt, _, _) | (_, MapFile::Corrupt, _) | (_, _, MapFile::Corrupt) => {
                Self::default()
            }
            (records, includes, style_deps) => Self {
                records: loaded_or_default(records),
                includes: loaded_or_default(includes),
                style_deps: loaded_or_default(style_deps),
            },
        }
    }

    /// Writes all three maps to `cache_dir`, creating it if needed.
    pub fn save(&self, cache_dir: &Path) -> Result<(), CacheError> {
        fs::create_dir_all(cache_dir).map_err(|source| CacheError::Io {
            path: cache_dir.to_path_buf(),
            source,
        })?;
        write_map(&cache_dir.join(RECORDS_FILE), &self.records)?;
        write_map(&cache_dir.join(INCLUDES_FILE), &self.includes)?;
        write_map(&cache_dir.join(STYLE_DEPS_FILE), &self.style_deps)
    }

    /// Records a successful build of `name`, replacing any prior entry.
    pub fn record(
        &mut self,
        name: &str,
        mtime: i64,
        content_hash: ContentHash,
        includes: Vec<String>,
        style_deps: Vec<String>,
    ) {
        self.records.insert(
            name.to_string(),
            DocRecord {
                mtime,
                content_hash,
            },
        );
        self.includes.insert(name.to_string(), includes);
        self.style_deps.insert(name.to_string(), style_deps);
    }

    /// Drops every trace of `name`, e.g. when its source file disappeared.
    pub fn remove(&mut self, name: &str) {
        self.records.remove(name);
        self.includes.remove(name);
        self.style_deps.remove(name);
    }
}

fn loaded_or_default<T: Default>(file: MapFile<T>) -> T {
    match file {
        MapFile::Loaded(value) => value,
        MapFile::Missing | MapFile::Corrupt => T::default(),
    }
}

fn write_map<T: Serialize>(path: &Path, map: &T) -> Result<(), CacheError> {
    let json = serde_json::to_string_pretty(map).map_err(|err| CacheError::Serialization {
        reason: err.to_string(),
    })?;
    fs::write(path, json).map_err(|source| CacheError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(bytes: &[u8]) -> ContentHash {
        ContentHash::from_bytes(bytes)
    }

    #[test]
    fn missing_dir_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let state = CacheState::load(&dir.path().join("no-such-cache"));
        assert!(state.records.is_empty());
        assert!(state.includes.is_empty());
        assert!(state.style_deps.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = CacheState::default();
        state.record(
            "main",
            1_700_000_000,
            hash(b"{}"),
            vec!["header".to_string()],
            vec!["default".to_string()],
        );
        state.record("header", 1_699_999_000, hash(b"{ }"), vec![], vec![]);
        state.save(dir.path()).unwrap();

        let reloaded = CacheState::load(dir.path());
        assert_eq!(reloaded, state);
    }

    #[test]
    fn corrupt_map_discards_whole_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = CacheState::default();
        state.record("main", 100, hash(b"{}"), vec![], vec![]);
        state.save(dir.path()).unwrap();

        fs::write(dir.path().join(INCLUDES_FILE), "{ not json").unwrap();
        let reloaded = CacheState::load(dir.path());
        assert_eq!(reloaded, CacheState::default());
    }

    #[test]
    fn record_replaces_prior_entry() {
        let mut state = CacheState::default();
        state.record("main", 100, hash(b"a"), vec!["x".to_string()], vec![]);
        state.record("main", 200, hash(b"b"), vec![], vec!["s".to_string()]);
        assert_eq!(state.records["main"].mtime, 200);
        assert!(state.includes["main"].is_empty());
        assert_eq!(state.style_deps["main"], vec!["s".to_string()]);
    }

    #[test]
    fn remove_clears_all_maps() {
        let mut state = CacheState::default();
        state.record("main", 100, hash(b"a"), vec!["x".to_string()], vec![]);
        state.remove("main");
        assert_eq!(state, CacheState::default());
    }
}
