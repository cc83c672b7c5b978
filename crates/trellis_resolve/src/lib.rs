//! Layout document resolution: style cascading and include expansion.
//!
//! Resolution turns a stored layout document into a single self-contained
//! tree: named styles are merged bottom-up with node-wins precedence, and
//! `include` references are spliced in with every introduced identifier and
//! binding rewritten under the include site's namespace prefix. The
//! dependency names reached along the way are collected for the build cache.
//!
//! Style problems are soft (warn and continue); include problems are hard
//! (the document cannot be produced) and abort that one document.

#![warn(missing_docs)]

pub mod deps;
pub mod error;
pub mod include;
pub mod store;
pub mod style;

pub use deps::ResolvedDeps;
pub use error::ResolveError;
pub use include::IncludeExpander;
pub use store::DocumentStore;
pub use style::StyleResolver;

use trellis_diagnostics::DiagnosticSink;
use trellis_ir::LayoutNode;

/// Fully resolves one layout document by name.
///
/// Applies the style pass, expands includes (re-running the style pass on
/// every spliced document), applies a final style pass for any `style` keys
/// introduced by overrides, and normalizes `children` into `child`.
pub fn resolve_document(
    store: &DocumentStore,
    sink: &DiagnosticSink,
    name: &str,
) -> Result<(LayoutNode, ResolvedDeps), ResolveError> {
    let (doc, path) = store.load_layout(store.layouts_dir(), name)?;
    let mut deps = ResolvedDeps::default();

    let styles = StyleResolver::new(store, sink, name);
    let styled = styles.apply(&doc, &mut deps);

    let base_dir = path
        .parent()
        .unwrap_or_else(|| store.layouts_dir())
        .to_path_buf();
    let expander = IncludeExpander::new(store, &styles);
    // The document's own name seeds the stack so it cannot include itself.
    let mut stack = vec![name.to_string()];
    let expanded = expander.expand(&styled, &base_dir, "", &mut deps, &mut stack)?;

    // Spliced-in subtrees may carry style keys introduced by overrides.
    let mut resolved = styles.apply(&expanded, &mut deps);
    resolved.normalize_children();
    Ok((resolved, deps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_ir::keys;

    struct Project {
        _dir: tempfile::TempDir,
        store: DocumentStore,
        sink: DiagnosticSink,
    }

    impl Project {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let layouts = dir.path().join("layouts");
            let styles = dir.path().join("styles");
            std::fs::create_dir_all(&layouts).unwrap();
            std::fs::create_dir_all(&styles).unwrap();
            Self {
                _dir: dir,
                store: DocumentStore::new(layouts, styles),
                sink: DiagnosticSink::new(),
            }
        }

        fn layout(&self, name: &str, content: &str) {
            std::fs::write(
                self.store.layouts_dir().join(format!("{name}.json")),
                content,
            )
            .unwrap();
        }

        fn style(&self, name: &str, content: &str) {
            std::fs::write(
                self.store.styles_dir().join(format!("{name}.json")),
                content,
            )
            .unwrap();
        }

        fn resolve(&self, name: &str) -> Result<(LayoutNode, ResolvedDeps), ResolveError> {
            resolve_document(&self.store, &self.sink, name)
        }
    }

    #[test]
    fn full_resolution_pass() {
        let p = Project::new();
        p.style("heading", r#"{"fontSize": 20, "bold": true}"#);
        p.layout(
            "header",
            r#"{"type": "Row", "child": [
                {"type": "Label", "id": "title_label", "style": "heading", "text": "@{title}"}
            ]}"#,
        );
        p.layout(
            "main",
            r#"{"type": "Column", "children": [
                {"include": "header", "id": "header1"},
                {"type": "Label", "text": "@{body}"}
            ]}"#,
        );

        let (tree, deps) = p.resolve("main").unwrap();
        assert_eq!(tree.node_type(), Some("Column"));
        assert!(tree.get(keys::CHILDREN).is_none());

        let header = &tree.children()[0];
        assert_eq!(header.node_type(), Some("Row"));
        let title = &header.children()[0];
        assert_eq!(title.id(), Some("header1TitleLabel"));
        assert_eq!(title.get_str("text"), Some("@{header1Title}"));
        assert_eq!(title.get_f64("fontSize"), Some(20.0));
        assert!(title.get(keys::STYLE).is_none());

        // The sibling outside the include keeps its binding unprefixed.
        assert_eq!(tree.children()[1].get_str("text"), Some("@{body}"));

        assert_eq!(deps.include_list(), vec!["header"]);
        assert_eq!(deps.style_list(), vec!["heading"]);
        assert!(!p.sink.has_errors());
    }

    #[test]
    fn resolution_is_idempotent() {
        let p = Project::new();
        p.style("card", r#"{"padding": 8}"#);
        p.layout("widget", r#"{"type": "Box", "style": "card"}"#);
        p.layout(
            "main",
            r#"{"type": "Column", "child": [{"include": "widget", "id": "w"}]}"#,
        );

        let (tree, _) = p.resolve("main").unwrap();
        // Write the resolved tree back as a document and resolve again.
        p.layout("resolved", &serde_json::to_string(&tree).unwrap());
        let (again, deps) = p.resolve("resolved").unwrap();
        assert_eq!(tree, again);
        assert!(deps.includes.is_empty());
        assert!(deps.styles.is_empty());
    }

    #[test]
    fn style_override_introduced_at_include_site() {
        let p = Project::new();
        p.style("alert", r#"{"color": "red"}"#);
        p.layout("banner", r#"{"type": "Label", "text": "hi"}"#);
        p.layout(
            "main",
            r#"{"type": "Box", "child": [
                {"include": "banner", "id": "b", "style": "alert"}
            ]}"#,
        );

        // The site's style key overrides into the spliced tree and is
        // resolved by the final style pass.
        let (tree, deps) = p.resolve("main").unwrap();
        let banner = &tree.children()[0];
        assert_eq!(banner.get_str("color"), Some("red"));
        assert!(banner.get(keys::STYLE).is_none());
        assert!(deps.styles.contains("alert"));
    }

    #[test]
    fn missing_document_fails() {
        let p = Project::new();
        let err = p.resolve("nope").unwrap_err();
        assert!(matches!(err, ResolveError::LayoutNotFound { .. }));
    }

    #[test]
    fn missing_style_is_soft_missing_include_is_hard() {
        let p = Project::new();
        p.layout("soft", r#"{"type": "Box", "style": "ghost"}"#);
        p.layout("hard", r#"{"type": "Box", "child": [{"include": "ghost", "id": "g"}]}"#);

        let (tree, _) = p.resolve("soft").unwrap();
        assert!(tree.get(keys::STYLE).is_none());
        assert!(!p.sink.has_errors());
        assert_eq!(p.sink.diagnostics().len(), 1);

        let err = p.resolve("hard").unwrap_err();
        assert!(matches!(err, ResolveError::LayoutNotFound { .. }));
    }
}
