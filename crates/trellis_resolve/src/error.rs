//! Error types for document resolution.

use std::path::PathBuf;

/// Hard failures during resolution of one layout document.
///
/// Any of these aborts the affected document only; the build continues with
/// the remaining documents and the previous generated output is left
/// untouched. Style problems never appear here — they are soft and reported
/// through the diagnostic sink.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// An I/O error occurred while reading a document.
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A referenced layout document does not exist.
    #[error("layout document '{name}' not found")]
    LayoutNotFound {
        /// The referenced document name.
        name: String,
    },

    /// A layout document is not valid JSON.
    #[error("layout document '{name}' is malformed: {reason}")]
    LayoutParse {
        /// The document name.
        name: String,
        /// Description of the parse failure.
        reason: String,
    },

    /// Include references form a cycle.
    #[error("include cycle: {}", chain.join(" -> "))]
    IncludeCycle {
        /// The chain of document names forming the cycle.
        chain: Vec<String>,
    },

    /// A referenced style document does not exist. Only surfaced by the
    /// store; the style resolver downgrades it to a warning.
    #[error("style document '{name}' not found")]
    StyleNotFound {
        /// The referenced style name.
        name: String,
    },

    /// A style document is not valid JSON. Downgraded to a warning by the
    /// style resolver.
    #[error("style document '{name}' is malformed: {reason}")]
    StyleParse {
        /// The style name.
        name: String,
        /// Description of the parse failure.
        reason: String,
    },
}
