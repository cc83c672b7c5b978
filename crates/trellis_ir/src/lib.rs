//! The Trellis layout document model.
//!
//! A layout document is a JSON tree of [`LayoutNode`]s: ordered attribute
//! maps with a handful of reserved keys (`type`, `id`, `style`, `include`,
//! `child`/`children`, `data`, `shared_data`) and arbitrary presentation
//! attributes. This crate defines the tree types, binding-expression
//! rewriting, data variable declarations, and child-key normalization.

#![warn(missing_docs)]

pub mod binding;
pub mod data;
pub mod node;
pub mod value;

pub use binding::rewrite_bindings;
pub use data::DataDecl;
pub use node::{keys, LayoutNode};
pub use value::Value;
