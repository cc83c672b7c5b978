//! The alignment decision table.
//!
//! Emitters call [`resolve_alignment`] per node to collapse whatever
//! combination of alignment flags the node carries into one
//! [`Alignment`]. The free-form table is ordered and first-match-wins;
//! the ordering and its two surprising defaults (a lone edge flag biases
//! to that edge's *corner*, a lone center flag biases to the start corner
//! of the other axis) are compatibility behavior and must not change.

use std::fmt;

use serde::{Deserialize, Serialize};
use trellis_ir::LayoutNode;

use crate::kind::ContainerKind;

/// Horizontal placement of a node within its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    /// Anchored to the container's left edge.
    Left,
    /// Centered horizontally.
    Center,
    /// Anchored to the container's right edge.
    Right,
}

/// Vertical placement of a node within its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    /// Anchored to the container's top edge.
    Top,
    /// Centered vertically.
    Center,
    /// Anchored to the container's bottom edge.
    Bottom,
}

/// The single positioning decision for one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    /// Horizontal placement.
    pub horizontal: HAlign,
    /// Vertical placement.
    pub vertical: VAlign,
}

impl Alignment {
    /// Creates an alignment from both axes.
    pub fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The default placement: top-left.
    pub fn top_left() -> Self {
        Self::new(HAlign::Left, VAlign::Top)
    }

    /// Full center on both axes.
    pub fn center() -> Self {
        Self::new(HAlign::Center, VAlign::Center)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self.vertical {
            VAlign::Top => "top",
            VAlign::Center => "center",
            VAlign::Bottom => "bottom",
        };
        let h = match self.horizontal {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        };
        if v == "center" && h == "center" {
            write!(f, "center")
        } else {
            write!(f, "{v}-{h}")
        }
    }
}

/// The raw boolean alignment flags a node may carry simultaneously.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlignmentFlags {
    /// `alignTop`.
    pub top: bool,
    /// `alignBottom`.
    pub bottom: bool,
    /// `alignLeft`.
    pub left: bool,
    /// `alignRight`.
    pub right: bool,
    /// `centerHorizontal`.
    pub center_horizontal: bool,
    /// `centerVertical`.
    pub center_vertical: bool,
    /// `centerInParent`.
    pub center_in_parent: bool,
}

impl AlignmentFlags {
    /// Reads the flags from a node's attributes. Only `true` booleans
    /// count; absent, non-boolean, and `false` values are all unset.
    pub fn from_node(node: &LayoutNode) -> Self {
        let flag = |key: &str| node.get_bool(key) == Some(true);
        Self {
            top: flag("alignTop"),
            bottom: flag("alignBottom"),
            left: flag("alignLeft"),
            right: flag("alignRight"),
            center_horizontal: flag("centerHorizontal"),
            center_vertical: flag("centerVertical"),
            center_in_parent: flag("centerInParent"),
        }
    }
}

/// Collapses a node's alignment flags into one decision.
///
/// Row containers honor only vertical flags (`top > bottom > center`),
/// column containers only horizontal flags (`left > right > center`);
/// free-form containers run the full ordered table.
pub fn resolve_alignment(flags: AlignmentFlags, kind: ContainerKind) -> Alignment {
    match kind {
        ContainerKind::Row => {
            let vertical = if flags.top {
                VAlign::Top
            } else if flags.bottom {
                VAlign::Bottom
            } else if flags.center_vertical {
                VAlign::Center
            } else {
                VAlign::Top
            };
            Alignment::new(HAlign::Left, vertical)
        }
        ContainerKind::Column => {
            let horizontal = if flags.left {
                HAlign::Left
            } else if flags.right {
                HAlign::Right
            } else if flags.center_horizontal {
                HAlign::Center
            } else {
                HAlign::Left
            };
            Alignment::new(horizontal, VAlign::Top)
        }
        ContainerKind::Free => resolve_free(flags),
    }
}

/// The free-form decision table, evaluated top to bottom, first match wins.
fn resolve_free(f: AlignmentFlags) -> Alignment {
    let h_both = f.left && f.right;
    let v_both = f.top && f.bottom;

    // 1. Both edges on both axes: full center.
    if h_both && v_both {
        return Alignment::center();
    }
    // 2. Both horizontal edges plus one vertical edge.
    if h_both && f.top {
        return Alignment::new(HAlign::Center, VAlign::Top);
    }
    if h_both && f.bottom {
        return Alignment::new(HAlign::Center, VAlign::Bottom);
    }
    // 3. Both horizontal edges only: vertical defaults to top.
    if h_both {
        return Alignment::new(HAlign::Center, VAlign::Top);
    }
    // 4. Both vertical edges plus one horizontal edge.
    if v_both && f.left {
        return Alignment::new(HAlign::Left, VAlign::Center);
    }
    if v_both && f.right {
        return Alignment::new(HAlign::Right, VAlign::Center);
    }
    // 5. Both vertical edges only: horizontal defaults to left.
    if v_both {
        return Alignment::new(HAlign::Left, VAlign::Center);
    }
    // 6. One edge on each axis: that corner.
    if (f.top || f.bottom) && (f.left || f.right) {
        return Alignment::new(
            if f.left { HAlign::Left } else { HAlign::Right },
            if f.top { VAlign::Top } else { VAlign::Bottom },
        );
    }
    // 7. One edge plus the opposite axis's center flag.
    if f.top && f.center_horizontal {
        return Alignment::new(HAlign::Center, VAlign::Top);
    }
    if f.bottom && f.center_horizontal {
        return Alignment::new(HAlign::Center, VAlign::Bottom);
    }
    if f.left && f.center_vertical {
        return Alignment::new(HAlign::Left, VAlign::Center);
    }
    if f.right && f.center_vertical {
        return Alignment::new(HAlign::Right, VAlign::Center);
    }
    // 8. centerInParent: full center.
    if f.center_in_parent {
        return Alignment::center();
    }
    // 9. A single edge flag biases toward that edge's corner, not its
    // center line. Compatibility behavior.
    if f.top || f.left {
        return Alignment::top_left();
    }
    if f.bottom {
        return Alignment::new(HAlign::Left, VAlign::Bottom);
    }
    if f.right {
        return Alignment::new(HAlign::Right, VAlign::Top);
    }
    // 10. A single center flag biases toward the start corner of the
    // other axis.
    if f.center_horizontal {
        return Alignment::new(HAlign::Center, VAlign::Top);
    }
    if f.center_vertical {
        return Alignment::new(HAlign::Left, VAlign::Center);
    }
    // 11. Nothing set.
    Alignment::top_left()
}
