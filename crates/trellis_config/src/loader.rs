//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::ProjectConfig;

/// Loads and validates a `trellis.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join("trellis.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `trellis.toml` from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    for (field, value) in [
        ("dirs.layouts", &config.dirs.layouts),
        ("dirs.styles", &config.dirs.styles),
        ("dirs.output", &config.dirs.output),
        ("dirs.cache", &config.dirs.cache),
    ] {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!("{field} must not be empty")));
        }
    }
    Ok(())
}
