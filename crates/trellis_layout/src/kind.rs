//! Container kinds that change how alignment flags are interpreted.

use trellis_ir::LayoutNode;

/// The closed set of container behaviors.
///
/// The `type` string on a node is open-ended (emitters register arbitrary
/// widget kinds), but alignment resolution only distinguishes these three
/// behaviors, so the mapping is a closed enum rather than string matching
/// scattered through the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    /// Children flow horizontally; only vertical alignment flags apply.
    Row,
    /// Children flow vertically; only horizontal alignment flags apply.
    Column,
    /// Free-form stacking; both axes resolve through the full decision table.
    Free,
}

impl ContainerKind {
    /// Maps a widget `type` string to its container behavior.
    ///
    /// Unknown and absent types behave as free-form containers.
    pub fn from_widget_type(widget_type: Option<&str>) -> Self {
        match widget_type {
            Some("Row") => ContainerKind::Row,
            Some("Column") => ContainerKind::Column,
            _ => ContainerKind::Free,
        }
    }

    /// The container behavior of the node a child is positioned inside.
    pub fn of_node(node: &LayoutNode) -> Self {
        Self::from_widget_type(node.node_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds() {
        assert_eq!(
            ContainerKind::from_widget_type(Some("Row")),
            ContainerKind::Row
        );
        assert_eq!(
            ContainerKind::from_widget_type(Some("Column")),
            ContainerKind::Column
        );
        assert_eq!(
            ContainerKind::from_widget_type(Some("Box")),
            ContainerKind::Free
        );
    }

    #[test]
    fn unknown_and_absent_are_free() {
        assert_eq!(
            ContainerKind::from_widget_type(Some("FancyWidget")),
            ContainerKind::Free
        );
        assert_eq!(ContainerKind::from_widget_type(None), ContainerKind::Free);
    }

    #[test]
    fn of_node_reads_type() {
        let node: LayoutNode = serde_json::from_str(r#"{"type": "Row"}"#).unwrap();
        assert_eq!(ContainerKind::of_node(&node), ContainerKind::Row);
    }
}
