//! A single diagnostic message.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::severity::Severity;

/// One diagnostic produced during a build pass.
///
/// Carries the severity, the layout document the problem belongs to (when
/// attributable to one), and a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How severe the problem is.
    pub severity: Severity,
    /// The layout document being resolved when the problem occurred.
    pub document: Option<String>,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning attributed to a document.
    pub fn warning(document: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            document: Some(document.into()),
            message: message.into(),
        }
    }

    /// Creates an error attributed to a document.
    pub fn error(document: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            document: Some(document.into()),
            message: message.into(),
        }
    }

    /// Creates a diagnostic not tied to any particular document.
    pub fn global(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            document: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.document {
            Some(doc) => write!(f, "{} [{}]: {}", self.severity, doc, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_constructor() {
        let d = Diagnostic::warning("main", "style 'missing' not found");
        assert_eq!(d.severity, Severity::Warning);
        assert_eq!(d.document.as_deref(), Some("main"));
    }

    #[test]
    fn display_with_document() {
        let d = Diagnostic::error("main", "include 'header' not found");
        assert_eq!(format!("{d}"), "error [main]: include 'header' not found");
    }

    #[test]
    fn display_global() {
        let d = Diagnostic::global(Severity::Warning, "cache unreadable, rebuilding");
        assert_eq!(format!("{d}"), "warning: cache unreadable, rebuilding");
    }

    #[test]
    fn serde_roundtrip() {
        let d = Diagnostic::error("card", "boom");
        let json = serde_json::to_string(&d).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }
}
