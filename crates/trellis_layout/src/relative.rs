//! Relative-to-sibling positioning constraints.
//!
//! `align<Edge>OfView` anchors this node's edge to the *opposite* edge of
//! the named sibling (placing it beside the sibling), while `align<Edge>View`
//! lines this node's edge up with the *same* edge of the sibling. The two
//! families interpret the edge margin in opposite directions: an
//! opposite-edge anchor pushes the node away from the sibling, a same-edge
//! anchor pulls it inward, so the margin's sign is inverted for the latter.

use serde::{Deserialize, Serialize};
use trellis_ir::LayoutNode;

/// An edge of a node's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// The top edge.
    Top,
    /// The bottom edge.
    Bottom,
    /// The left edge.
    Left,
    /// The right edge.
    Right,
}

impl Edge {
    /// The name of the margin attribute that offsets this edge.
    fn margin_key(self) -> &'static str {
        match self {
            Edge::Top => "topMargin",
            Edge::Bottom => "bottomMargin",
            Edge::Left => "leftMargin",
            Edge::Right => "rightMargin",
        }
    }
}

/// How a constraint attaches to the sibling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// This node's edge meets the sibling's opposite edge (`align*OfView`).
    OppositeEdge,
    /// This node's edge lines up with the sibling's same edge (`align*View`).
    SameEdge,
}

/// One resolved relative-positioning constraint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelativeConstraint {
    /// Which of this node's edges is being anchored.
    pub edge: Edge,
    /// Whether the anchor is the sibling's opposite or same edge.
    pub anchor: Anchor,
    /// The `id` of the sibling the constraint targets.
    pub target: String,
    /// The raw margin value from the node's attributes.
    pub margin: f64,
}

impl RelativeConstraint {
    /// The margin with direction applied.
    ///
    /// Opposite-edge anchors push outward (positive margin moves the node
    /// further from the sibling); same-edge anchors pull inward, so the
    /// sign is inverted.
    pub fn signed_offset(&self) -> f64 {
        match self.anchor {
            Anchor::OppositeEdge => self.margin,
            Anchor::SameEdge => -self.margin,
        }
    }
}

/// The recognized relative attributes, in emission order.
const RELATIVE_ATTRS: [(&str, Edge, Anchor); 8] = [
    ("alignTopOfView", Edge::Top, Anchor::OppositeEdge),
    ("alignBottomOfView", Edge::Bottom, Anchor::OppositeEdge),
    ("alignLeftOfView", Edge::Left, Anchor::OppositeEdge),
    ("alignRightOfView", Edge::Right, Anchor::OppositeEdge),
    ("alignTopView", Edge::Top, Anchor::SameEdge),
    ("alignBottomView", Edge::Bottom, Anchor::SameEdge),
    ("alignLeftView", Edge::Left, Anchor::SameEdge),
    ("alignRightView", Edge::Right, Anchor::SameEdge),
];

/// Extracts every relative-positioning constraint a node carries.
///
/// Each `align*OfView`/`align*View` attribute naming a sibling yields one
/// constraint, paired with the margin of the anchored edge (zero when
/// absent). Non-string values are ignored.
pub fn relative_constraints(node: &LayoutNode) -> Vec<RelativeConstraint> {
    let mut constraints = Vec::new();
    for (key, edge, anchor) in RELATIVE_ATTRS {
        if let Some(target) = node.get_str(key) {
            constraints.push(RelativeConstraint {
                edge,
                anchor,
                target: target.to_string(),
                margin: node.get_f64(edge.margin_key()).unwrap_or(0.0),
            });
        }
    }
    constraints
}
