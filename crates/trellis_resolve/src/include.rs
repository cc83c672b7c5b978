//! Include expansion with identifier hygiene.
//!
//! An `include` node is replaced by the referenced layout document, spliced
//! in place. Every identifier and un-dotted binding the splice introduces
//! is rewritten under a namespace prefix derived from the include site's
//! `id`, so sibling includes of the same document cannot collide. Include
//! failures are hard: a missing document or a reference cycle leaves an
//! unusable partial tree, so the whole document's resolution is aborted.

use std::path::Path;

use trellis_common::combine_prefixed;
use trellis_ir::{keys, rewrite_bindings, LayoutNode, Value};

use crate::deps::ResolvedDeps;
use crate::error::ResolveError;
use crate::store::DocumentStore;
use crate::style::StyleResolver;

/// Expands `include` references into a single self-contained tree.
pub struct IncludeExpander<'a> {
    store: &'a DocumentStore,
    styles: &'a StyleResolver<'a>,
}

impl<'a> IncludeExpander<'a> {
    /// Creates an expander loading documents through `store` and running
    /// each loaded document through `styles` before splicing.
    pub fn new(store: &'a DocumentStore, styles: &'a StyleResolver<'a>) -> Self {
        Self { store, styles }
    }

    /// Expands a node and everything below it.
    ///
    /// `base_dir` is the directory of the file the node came from (include
    /// lookups try it before the layouts root). `prefix` is the namespace
    /// prefix in scope; `stack` holds the chain of documents currently
    /// being expanded, for cycle detection.
    pub fn expand(
        &self,
        node: &LayoutNode,
        base_dir: &Path,
        prefix: &str,
        deps: &mut ResolvedDeps,
        stack: &mut Vec<String>,
    ) -> Result<LayoutNode, ResolveError> {
        match node.include_name().map(str::to_string) {
            None => self.expand_plain(node, base_dir, prefix, deps, stack),
            Some(name) => self.expand_include(node, &name, base_dir, prefix, deps, stack),
        }
    }

    /// A node without `include`: apply the prefix locally, recurse into
    /// children with the same prefix.
    fn expand_plain(
        &self,
        node: &LayoutNode,
        base_dir: &Path,
        prefix: &str,
        deps: &mut ResolvedDeps,
        stack: &mut Vec<String>,
    ) -> Result<LayoutNode, ResolveError> {
        let mut out = node.clone();
        apply_prefix(&mut out, prefix);
        let children = out.take_children();
        if !children.is_empty() {
            let mut expanded = Vec::with_capacity(children.len());
            for child in &children {
                expanded.push(self.expand(child, base_dir, prefix, deps, stack)?);
            }
            out.set_children(expanded);
        }
        Ok(out)
    }

    /// An include site: load and style-resolve the target, merge the site's
    /// overrides onto it, then expand the merged document under the new
    /// prefix with the included file's directory as the new base.
    fn expand_include(
        &self,
        site: &LayoutNode,
        name: &str,
        base_dir: &Path,
        prefix: &str,
        deps: &mut ResolvedDeps,
        stack: &mut Vec<String>,
    ) -> Result<LayoutNode, ResolveError> {
        if stack.iter().any(|n| n == name) {
            let mut chain = stack.clone();
            chain.push(name.to_string());
            return Err(ResolveError::IncludeCycle { chain });
        }
        deps.record_include(name);

        let (loaded, path) = self.store.load_layout(base_dir, name)?;
        let styled = self.styles.apply(&loaded, deps);

        let child_prefix = match site.id() {
            Some(id) => combine_prefixed(prefix, id),
            None => prefix.to_string(),
        };

        let merged = merge_include_site(styled, site);

        let next_base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| base_dir.to_path_buf());
        stack.push(name.to_string());
        let result = self.expand(&merged, &next_base, &child_prefix, deps, stack);
        stack.pop();
        result
    }
}

/// Merges an include site's override attributes onto the loaded document.
///
/// `include` and `id` never carry over. `data` and `shared_data` arrays are
/// concatenated (target's entries first). Every other key follows the one
/// precedence rule used throughout the pipeline: the including node's value
/// overrides the loaded document's value unconditionally.
fn merge_include_site(mut target: LayoutNode, site: &LayoutNode) -> LayoutNode {
    let mut overrides = site.clone();
    overrides.remove(keys::INCLUDE);
    overrides.remove(keys::ID);

    for key in [keys::DATA, keys::SHARED_DATA] {
        if let Some(Value::List(site_entries)) = overrides.remove(key) {
            let mut combined = match target.remove(key) {
                Some(Value::List(entries)) => entries,
                _ => Vec::new(),
            };
            combined.extend(site_entries);
            target.attrs.insert(key.to_string(), Value::List(combined));
        }
    }

    target.merge_over(&overrides);
    target
}

/// Applies the namespace prefix to one node's own attributes.
///
/// Rewrites `id`, `data` entry names, and un-dotted bindings in string
/// attributes. `shared_data` names stay shared across include sites and
/// are never prefixed. Children are handled by the expansion recursion,
/// which carries the prefix in scope at each include depth.
fn apply_prefix(node: &mut LayoutNode, prefix: &str) {
    if prefix.is_empty() {
        return;
    }
    if let Some(id) = node.id().map(str::to_string) {
        node.set(keys::ID, combine_prefixed(prefix, &id));
    }
    if let Some(Value::List(entries)) = node.attrs.get_mut(keys::DATA) {
        for entry in entries {
            if let Some(name) = entry.get_str("name").map(str::to_string) {
                entry.set("name", combine_prefixed(prefix, &name));
            }
        }
    }
    for (key, value) in node.attrs.iter_mut() {
        if matches!(key.as_str(), keys::TYPE | keys::ID | keys::STYLE | keys::INCLUDE) {
            continue;
        }
        if let Value::Str(s) = value {
            *value = Value::Str(rewrite_bindings(s, prefix));
        }
    }
}
