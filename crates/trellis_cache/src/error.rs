//! Error types for cache persistence.

use std::path::PathBuf;

/// Errors that can occur while writing the cache.
///
/// Reads never produce these: loading is fail-safe and degrades to an
/// empty cache.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// An I/O error occurred while writing a cache file.
    #[error("cache I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A cache map could not be serialized.
    #[error("cache serialization error: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
    },
}
