//! Configuration types deserialized from `trellis.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `trellis.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata.
    pub project: ProjectMeta,
    /// Directory names, all relative to the project root.
    #[serde(default)]
    pub dirs: DirsConfig,
}

/// Core project metadata required in every `trellis.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// The project version string.
    #[serde(default)]
    pub version: String,
}

/// Directory layout of a Trellis project, relative to the project root.
#[derive(Debug, Deserialize)]
pub struct DirsConfig {
    /// Directory holding layout documents.
    #[serde(default = "default_layouts")]
    pub layouts: String,
    /// Directory holding style documents.
    #[serde(default = "default_styles")]
    pub styles: String,
    /// Directory generated output is written to.
    #[serde(default = "default_output")]
    pub output: String,
    /// Directory the build cache is persisted in.
    #[serde(default = "default_cache")]
    pub cache: String,
}

fn default_layouts() -> String {
    "layouts".to_string()
}

fn default_styles() -> String {
    "styles".to_string()
}

fn default_output() -> String {
    "generated".to_string()
}

fn default_cache() -> String {
    ".trellis-cache".to_string()
}

impl Default for DirsConfig {
    fn default() -> Self {
        Self {
            layouts: default_layouts(),
            styles: default_styles(),
            output: default_output(),
            cache: default_cache(),
        }
    }
}
