//! Diagnostics for the Trellis build pipeline.
//!
//! The pipeline distinguishes two severities: *soft* problems (a missing or
//! malformed style document) are reported as warnings and resolution
//! continues as if the attribute were absent; *hard* problems (a missing
//! include, a malformed layout) abort the one affected document. All
//! user-facing reporting flows through the [`DiagnosticSink`].

#![warn(missing_docs)]

pub mod diagnostic;
pub mod severity;
pub mod sink;

pub use diagnostic::Diagnostic;
pub use severity::Severity;
pub use sink::DiagnosticSink;
