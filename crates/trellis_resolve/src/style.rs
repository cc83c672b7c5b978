//! Cascading style application.
//!
//! A style document is a node-shaped attribute bag stored under a name. A
//! node referencing one via its `style` key receives every attribute the
//! style defines, with the node's own attributes winning any conflict.
//! Styles may extend other styles (`style`) and pull in layout partials
//! (`include`); both are resolved before merging, with the consumer's
//! attributes always taking precedence.
//!
//! All failures on this path are soft: a missing or malformed style is
//! reported as a warning and the node is resolved as if it had no style.

use trellis_diagnostics::DiagnosticSink;
use trellis_ir::{keys, LayoutNode};

use crate::deps::ResolvedDeps;
use crate::store::DocumentStore;

/// Merges named styles into nodes, per node, before include expansion
/// descends into children.
pub struct StyleResolver<'a> {
    store: &'a DocumentStore,
    sink: &'a DiagnosticSink,
    /// The layout document being resolved, for diagnostic attribution.
    document: &'a str,
}

impl<'a> StyleResolver<'a> {
    /// Creates a resolver reading styles through `store` and reporting
    /// soft failures against `document`.
    pub fn new(store: &'a DocumentStore, sink: &'a DiagnosticSink, document: &'a str) -> Self {
        Self {
            store,
            sink,
            document,
        }
    }

    /// Applies style merging to a whole tree.
    ///
    /// Each node is merged independently before descending into its
    /// children; children are never merged by the style step itself.
    pub fn apply(&self, node: &LayoutNode, deps: &mut ResolvedDeps) -> LayoutNode {
        let mut merged = self.merge_node(node, deps);
        let children = merged.take_children();
        if !children.is_empty() {
            let resolved = children.iter().map(|c| self.apply(c, deps)).collect();
            merged.set_children(resolved);
        }
        merged
    }

    /// Merges the named style into a single node, node-wins precedence.
    /// The `style` key never survives into the result.
    fn merge_node(&self, node: &LayoutNode, deps: &mut ResolvedDeps) -> LayoutNode {
        let Some(style_name) = node.style_name().map(str::to_string) else {
            return node.clone();
        };
        deps.record_style(&style_name);

        let mut visiting = Vec::new();
        let mut out = match self.resolve_style_doc(&style_name, &mut visiting, deps) {
            Some(style) => {
                let mut base = style;
                base.merge_over(node);
                base
            }
            None => node.clone(),
        };
        out.remove(keys::STYLE);
        out
    }

    /// Resolves a style document to a flat attribute bag, following its own
    /// `style` extension and `include` partial references recursively.
    ///
    /// Returns `None` (after warning) if the style is missing, malformed,
    /// or part of a reference cycle.
    fn resolve_style_doc(
        &self,
        name: &str,
        visiting: &mut Vec<String>,
        deps: &mut ResolvedDeps,
    ) -> Option<LayoutNode> {
        if visiting.iter().any(|n| n == name) {
            self.sink.warn(
                self.document,
                format!("style reference cycle involving '{name}', treated as absent"),
            );
            return None;
        }

        let mut style = match self.store.load_style(name) {
            Ok(style) => style,
            Err(e) => {
                self.sink.warn(self.document, e.to_string());
                return None;
            }
        };
        visiting.push(name.to_string());

        // A style extending another style: the extending style wins.
        if let Some(parent_name) = style.style_name().map(str::to_string) {
            deps.record_style(&parent_name);
            if let Some(parent) = self.resolve_style_doc(&parent_name, visiting, deps) {
                let mut base = parent;
                base.merge_over(&style);
                style = base;
            }
            style.remove(keys::STYLE);
        }

        // A style pulling in a layout partial's attribute bag: the style wins.
        if let Some(include_name) = style.include_name().map(str::to_string) {
            deps.record_include(&include_name);
            match self
                .store
                .load_layout(self.store.layouts_dir(), &include_name)
            {
                Ok((mut partial, _)) => {
                    if let Some(inner) = partial.style_name().map(str::to_string) {
                        deps.record_style(&inner);
                        if let Some(inner_style) =
                            self.resolve_style_doc(&inner, visiting, deps)
                        {
                            let mut base = inner_style;
                            base.merge_over(&partial);
                            partial = base;
                        }
                        partial.remove(keys::STYLE);
                    }
                    let mut base = partial;
                    base.merge_over(&style);
                    style = base;
                }
                Err(e) => self.sink.warn(self.document, e.to_string()),
            }
            style.remove(keys::INCLUDE);
        }

        visiting.pop();
        Some(style)
    }
}
