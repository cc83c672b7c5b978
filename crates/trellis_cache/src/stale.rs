//! The staleness rules that drive incremental rebuilds.

use crate::snapshot::MtimeSnapshot;
use crate::state::CacheState;

/// Decides whether `name` must be rebuilt.
///
/// A document is stale when any of these hold, checked in order:
/// 1. it has no cache record;
/// 2. its own file is newer than the recorded mtime, or gone from disk;
/// 3. any document its include expansion reached is newer, or gone;
/// 4. any style its resolution reached is newer, or gone;
/// 5. any document that *includes* it is newer than its recorded mtime.
///
/// Rule 5 exists because an includer's edits can change what this
/// document's output means to its consumers; rebuilding both keeps the
/// generated tree consistent without a separate reverse-dependency map.
pub fn is_stale(state: &CacheState, snapshot: &MtimeSnapshot, name: &str) -> bool {
    let Some(record) = state.records.get(name) else {
        return true;
    };
    if newer_or_missing(snapshot.layout_mtime(name), record.mtime) {
        return true;
    }
    if let Some(includes) = state.includes.get(name) {
        for include in includes {
            if newer_or_missing(snapshot.layout_mtime(include), record.mtime) {
                return true;
            }
        }
    }
    if let Some(styles) = state.style_deps.get(name) {
        for style in styles {
            if newer_or_missing(snapshot.style_mtime(style), record.mtime) {
                return true;
            }
        }
    }
    reverse_includer_newer(state, snapshot, name, record.mtime)
}

/// Filters `candidates` down to the documents that need rebuilding,
/// preserving order.
pub fn stale_documents<'a, I>(
    state: &CacheState,
    snapshot: &MtimeSnapshot,
    candidates: I,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    candidates
        .into_iter()
        .filter(|name| is_stale(state, snapshot, name))
        .cloned()
        .collect()
}

/// Rule 5: true when any document whose include list names `name` has an
/// on-disk mtime newer than `name`'s recorded mtime.
///
/// A vanished includer does not trigger this rule; its own record is
/// dropped separately when its source disappears.
fn reverse_includer_newer(
    state: &CacheState,
    snapshot: &MtimeSnapshot,
    name: &str,
    recorded_mtime: i64,
) -> bool {
    state.includes.iter().any(|(other, includes)| {
        other != name
            && includes.iter().any(|include| include == name)
            && snapshot
                .layout_mtime(other)
                .is_some_and(|mtime| mtime > recorded_mtime)
    })
}

fn newer_or_missing(snapshot_mtime: Option<i64>, recorded_mtime: i64) -> bool {
    match snapshot_mtime {
        Some(mtime) => mtime > recorded_mtime,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use trellis_common::hash::ContentHash;

    fn hash() -> ContentHash {
        ContentHash::from_bytes(b"fixed")
    }

    fn snapshot(layouts: &[(&str, i64)], styles: &[(&str, i64)]) -> MtimeSnapshot {
        MtimeSnapshot {
            layouts: to_map(layouts),
            styles: to_map(styles),
        }
    }

    fn to_map(entries: &[(&str, i64)]) -> BTreeMap<String, i64> {
        entries
            .iter()
            .map(|(name, mtime)| (name.to_string(), *mtime))
            .collect()
    }

    #[test]
    fn unrecorded_document_is_stale() {
        let state = CacheState::default();
        let snap = snapshot(&[("main", 100)], &[]);
        assert!(is_stale(&state, &snap, "main"));
    }

    #[test]
    fn untouched_document_is_fresh() {
        let mut state = CacheState::default();
        state.record("main", 100, hash(), vec![], vec![]);
        let snap = snapshot(&[("main", 100)], &[]);
        assert!(!is_stale(&state, &snap, "main"));
    }

    #[test]
    fn own_file_newer_is_stale() {
        let mut state = CacheState::default();
        state.record("main", 100, hash(), vec![], vec![]);
        let snap = snapshot(&[("main", 101)], &[]);
        assert!(is_stale(&state, &snap, "main"));
    }

    #[test]
    fn own_file_missing_is_stale() {
        let mut state = CacheState::default();
        state.record("main", 100, hash(), vec![], vec![]);
        let snap = snapshot(&[], &[]);
        assert!(is_stale(&state, &snap, "main"));
    }

    #[test]
    fn touched_include_invalidates_includer() {
        let mut state = CacheState::default();
        state.record("main", 100, hash(), vec!["header".to_string()], vec![]);
        state.record("header", 100, hash(), vec![], vec![]);
        let snap = snapshot(&[("main", 100), ("header", 150)], &[]);
        assert!(is_stale(&state, &snap, "main"));
    }

    #[test]
    fn touched_style_invalidates_user() {
        let mut state = CacheState::default();
        state.record("main", 100, hash(), vec![], vec!["default".to_string()]);
        let snap = snapshot(&[("main", 100)], &[("default", 120)]);
        assert!(is_stale(&state, &snap, "main"));
    }

    #[test]
    fn style_reached_through_include_invalidates_root() {
        // Resolution flattens transitive style names into the root's own
        // style-dep list, so touching a style used only by an included
        // document still marks the root stale.
        let mut state = CacheState::default();
        state.record(
            "main",
            100,
            hash(),
            vec!["header".to_string()],
            vec!["header_style".to_string()],
        );
        let snap = snapshot(&[("main", 100), ("header", 100)], &[("header_style", 130)]);
        assert!(is_stale(&state, &snap, "main"));
    }

    #[test]
    fn touched_includer_invalidates_includee() {
        let mut state = CacheState::default();
        state.record("main", 100, hash(), vec!["header".to_string()], vec![]);
        state.record("header", 100, hash(), vec![], vec![]);
        let snap = snapshot(&[("main", 150), ("header", 100)], &[]);
        assert!(is_stale(&state, &snap, "header"));
        assert!(is_stale(&state, &snap, "main"));
    }

    #[test]
    fn unrelated_edit_leaves_document_fresh() {
        let mut state = CacheState::default();
        state.record("main", 100, hash(), vec![], vec![]);
        state.record("other", 100, hash(), vec![], vec![]);
        let snap = snapshot(&[("main", 100), ("other", 200)], &[]);
        assert!(!is_stale(&state, &snap, "main"));
        assert!(is_stale(&state, &snap, "other"));
    }

    #[test]
    fn missing_style_dep_is_stale() {
        let mut state = CacheState::default();
        state.record("main", 100, hash(), vec![], vec!["gone".to_string()]);
        let snap = snapshot(&[("main", 100)], &[]);
        assert!(is_stale(&state, &snap, "main"));
    }

    #[test]
    fn stale_documents_filters_and_preserves_order() {
        let mut state = CacheState::default();
        state.record("a", 100, hash(), vec![], vec![]);
        state.record("b", 100, hash(), vec![], vec![]);
        let snap = snapshot(&[("a", 100), ("b", 200), ("c", 100)], &[]);
        let names: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let stale = stale_documents(&state, &snap, names.iter());
        assert_eq!(stale, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn persisted_state_reproduces_decisions() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = CacheState::default();
        state.record("main", 100, hash(), vec!["header".to_string()], vec![]);
        state.save(dir.path()).unwrap();

        let reloaded = CacheState::load(dir.path());
        let snap = snapshot(&[("main", 100), ("header", 170)], &[]);
        assert_eq!(
            is_stale(&state, &snap, "main"),
            is_stale(&reloaded, &snap, "main")
        );
        assert!(is_stale(&reloaded, &snap, "main"));
    }
}
