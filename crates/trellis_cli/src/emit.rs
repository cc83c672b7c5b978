//! Output emission for resolved layout trees.
//!
//! An [`Emitter`] turns one resolved document into a generated file. The
//! JSON emitter writes the resolved tree back out with each node annotated
//! by its single positioning decision, so downstream code generators never
//! re-derive alignment from raw flags.

use std::io;
use std::path::PathBuf;

use trellis_ir::{LayoutNode, Value};
use trellis_layout::{
    relative_constraints, resolve_alignment, AlignmentFlags, ContainerKind,
};

/// Emits one resolved document to the output directory.
pub trait Emitter {
    /// Writes the generated file for `name`, returning its path.
    fn emit(&self, name: &str, tree: &LayoutNode) -> io::Result<PathBuf>;
}

/// Writes resolved trees as pretty-printed JSON, one file per document.
pub struct JsonEmitter {
    output_dir: PathBuf,
}

impl JsonEmitter {
    /// Creates an emitter targeting `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Emitter for JsonEmitter {
    fn emit(&self, name: &str, tree: &LayoutNode) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;
        let annotated = annotate(tree, ContainerKind::Free);
        let mut json = serde_json::to_string_pretty(&annotated)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        json.push('\n');
        let path = self.output_dir.join(format!("{name}.json"));
        std::fs::write(&path, json)?;
        Ok(path)
    }
}

/// Annotates a node and its subtree with resolved positioning.
///
/// Each node gains a `resolvedAlignment` attribute holding the decision for
/// its flag combination under `parent`'s container behavior, and a
/// `resolvedConstraints` list when it carries relative attributes. The raw
/// flags stay in place so the output remains a valid input document.
fn annotate(node: &LayoutNode, parent: ContainerKind) -> LayoutNode {
    let mut out = node.clone();

    let alignment = resolve_alignment(AlignmentFlags::from_node(node), parent);
    out.set("resolvedAlignment", alignment.to_string());

    let constraints = relative_constraints(node);
    if !constraints.is_empty() {
        if let Some(value) = to_tree_value(&constraints) {
            out.attrs.insert("resolvedConstraints".to_string(), value);
        }
    }

    let kind = ContainerKind::of_node(node);
    let children: Vec<LayoutNode> = node
        .children()
        .iter()
        .map(|child| annotate(child, kind))
        .collect();
    out.set_children(children);
    out
}

/// Re-expresses a serializable value in the document tree's value model.
fn to_tree_value<T: serde::Serialize>(value: &T) -> Option<Value> {
    let json = serde_json::to_value(value).ok()?;
    serde_json::from_value(json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LayoutNode {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn emits_pretty_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let emitter = JsonEmitter::new(dir.path().join("generated"));
        let tree = parse(r#"{"type": "Box"}"#);

        let path = emitter.emit("main", &tree).unwrap();
        assert!(path.ends_with("generated/main.json"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.ends_with('\n'));
        let back: LayoutNode = serde_json::from_str(&written).unwrap();
        assert_eq!(back.node_type(), Some("Box"));
    }

    #[test]
    fn annotates_every_node_with_alignment() {
        let tree = parse(
            r#"{"type": "Box", "centerInParent": true, "child": [
                {"type": "Label"}
            ]}"#,
        );
        let annotated = annotate(&tree, ContainerKind::Free);
        assert_eq!(annotated.get_str("resolvedAlignment"), Some("center"));
        assert_eq!(
            annotated.children()[0].get_str("resolvedAlignment"),
            Some("top-left")
        );
    }

    #[test]
    fn row_children_resolve_vertical_axis_only() {
        let tree = parse(
            r#"{"type": "Row", "child": [
                {"type": "Label", "alignBottom": true, "alignRight": true}
            ]}"#,
        );
        let annotated = annotate(&tree, ContainerKind::Free);
        // Inside a Row the horizontal flags are inert.
        assert_eq!(
            annotated.children()[0].get_str("resolvedAlignment"),
            Some("bottom-left")
        );
    }

    #[test]
    fn relative_attrs_become_constraints() {
        let tree = parse(r#"{"type": "Label", "alignTopOfView": "title", "topMargin": 4}"#);
        let annotated = annotate(&tree, ContainerKind::Free);
        let constraints = annotated
            .get("resolvedConstraints")
            .and_then(Value::as_list)
            .unwrap();
        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0].get_str("target"), Some("title"));
        assert_eq!(constraints[0].get_f64("margin"), Some(4.0));
    }

    #[test]
    fn plain_nodes_gain_no_constraint_list() {
        let tree = parse(r#"{"type": "Label"}"#);
        let annotated = annotate(&tree, ContainerKind::Free);
        assert!(annotated.get("resolvedConstraints").is_none());
    }
}
