//! Deterministic resolution of conflicting positional attributes.
//!
//! A node may carry any combination of alignment flags (`alignTop`,
//! `centerHorizontal`, `centerInParent`, ...). Code emitters need exactly
//! one positioning decision per node; this crate derives it with a fixed
//! first-match precedence so the same attribute set always produces the
//! same decision, regardless of emitter.

#![warn(missing_docs)]

pub mod align;
pub mod kind;
pub mod relative;

pub use align::{resolve_alignment, Alignment, AlignmentFlags, HAlign, VAlign};
pub use kind::ContainerKind;
pub use relative::{relative_constraints, Anchor, Edge, RelativeConstraint};
