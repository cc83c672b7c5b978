//! Shared foundational types for the Trellis layout compiler.
//!
//! This crate provides content hashing for cache invalidation and the
//! identifier-casing helpers used by include namespacing.

#![warn(missing_docs)]

pub mod casing;
pub mod hash;

pub use casing::{capitalize_first, combine_prefixed, to_camel_case};
pub use hash::{ContentHash, ParseHashError};
