//! The incremental build cache.
//!
//! Tracks, per layout document, the mtime and content hash recorded at its
//! last successful build plus the include and style names its resolution
//! reached. Three independent JSON maps are persisted and fully rewritten
//! at the end of a build pass; every read is fail-safe, so a corrupt cache
//! degrades to a full rebuild instead of an error.
//!
//! Staleness for a whole run is decided against one [`MtimeSnapshot`]
//! taken before any record is updated, so one document's fresh write can
//! never mask another's staleness check within the same run.

#![warn(missing_docs)]

pub mod error;
pub mod snapshot;
pub mod stale;
pub mod state;

pub use error::CacheError;
pub use snapshot::MtimeSnapshot;
pub use stale::{is_stale, stale_documents};
pub use state::{CacheState, DocRecord};
