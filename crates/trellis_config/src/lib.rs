//! Parsing and validation of `trellis.toml` project configuration files.
//!
//! This crate reads the project configuration and produces a strongly-typed
//! [`ProjectConfig`], plus the resolved absolute directory paths the rest of
//! the pipeline consumes.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod paths;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use paths::ProjectPaths;
pub use types::{DirsConfig, ProjectConfig, ProjectMeta};
