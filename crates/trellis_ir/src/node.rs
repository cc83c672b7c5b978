//! The layout node: an ordered attribute map with reserved keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Reserved attribute keys recognized by the resolution pipeline.
pub mod keys {
    /// Widget kind tag.
    pub const TYPE: &str = "type";
    /// Optional local identifier.
    pub const ID: &str = "id";
    /// Name of a style document to merge into this node.
    pub const STYLE: &str = "style";
    /// Name of a layout document to splice in place of this node.
    pub const INCLUDE: &str = "include";
    /// Canonical ordered child list.
    pub const CHILD: &str = "child";
    /// Accepted alias for [`CHILD`], normalized away before resolution.
    pub const CHILDREN: &str = "children";
    /// Variable declarations (`{name, class, defaultValue}` entries).
    pub const DATA: &str = "data";
    /// Variable declarations shared across include sites (never prefixed).
    pub const SHARED_DATA: &str = "shared_data";
}

/// A single node in a layout document tree.
///
/// A node is a mapping from attribute name to [`Value`]. Everything the
/// pipeline knows about a node lives in this map, including the reserved
/// keys in [`keys`]; typed accessors are provided for the reserved ones.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutNode {
    /// The attribute map. Ordered by key for deterministic output.
    pub attrs: BTreeMap<String, Value>,
}

impl LayoutNode {
    /// Creates an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of an attribute, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// Sets an attribute value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.attrs.remove(key)
    }

    /// Returns a string attribute, if present and string-valued.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns a boolean attribute, if present and boolean-valued.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Returns a numeric attribute as `f64`, if present and numeric.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Returns the widget kind tag (`type`), if present.
    pub fn node_type(&self) -> Option<&str> {
        self.get_str(keys::TYPE)
    }

    /// Returns the local identifier (`id`), if present.
    pub fn id(&self) -> Option<&str> {
        self.get_str(keys::ID)
    }

    /// Returns the referenced style document name (`style`), if present.
    pub fn style_name(&self) -> Option<&str> {
        self.get_str(keys::STYLE)
    }

    /// Returns the referenced layout document name (`include`), if present.
    pub fn include_name(&self) -> Option<&str> {
        self.get_str(keys::INCLUDE)
    }

    /// Returns the canonical child list, empty if the node has none.
    ///
    /// Only consults the canonical `child` key; call
    /// [`normalize_children`](Self::normalize_children) first on freshly
    /// parsed documents.
    pub fn children(&self) -> &[LayoutNode] {
        self.get(keys::CHILD).and_then(Value::as_list).unwrap_or(&[])
    }

    /// Removes and returns the canonical child list.
    pub fn take_children(&mut self) -> Vec<LayoutNode> {
        match self.remove(keys::CHILD) {
            Some(Value::List(nodes)) => nodes,
            Some(other) => {
                // Not a list; put it back untouched.
                self.attrs.insert(keys::CHILD.to_string(), other);
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    /// Replaces the canonical child list. An empty list removes the key.
    pub fn set_children(&mut self, children: Vec<LayoutNode>) {
        if children.is_empty() {
            self.attrs.remove(keys::CHILD);
        } else {
            self.attrs
                .insert(keys::CHILD.to_string(), Value::List(children));
        }
    }

    /// Collapses `children` into the canonical `child` key, recursively.
    ///
    /// The two keys are semantically identical; after normalization every
    /// node in the tree uses `child` only. If both keys are present the
    /// `children` entries are appended after the `child` entries.
    pub fn normalize_children(&mut self) {
        if let Some(Value::List(extra)) = self.attrs.remove(keys::CHILDREN) {
            let mut merged = self.take_children();
            merged.extend(extra);
            self.set_children(merged);
        }
        for value in self.attrs.values_mut() {
            match value {
                Value::Node(node) => node.normalize_children(),
                Value::List(nodes) => {
                    for node in nodes {
                        node.normalize_children();
                    }
                }
                _ => {}
            }
        }
    }

    /// Merges `overlay`'s attributes over this node's, key by key.
    ///
    /// For every key present in both, the overlay's value wins. Children
    /// are plain attributes here and follow the same rule; callers that
    /// need concatenation (e.g. `data` arrays) handle those keys before
    /// calling this.
    pub fn merge_over(&mut self, overlay: &LayoutNode) {
        for (key, value) in &overlay.attrs {
            self.attrs.insert(key.clone(), value.clone());
        }
    }
}
