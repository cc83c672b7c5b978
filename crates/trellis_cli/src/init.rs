//! `trellis init` — project scaffolding command.
//!
//! Creates a new Trellis project directory with standard layout: `layouts/`,
//! `styles/`, a `trellis.toml` config file, and a starter layout document
//! with a default style.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Runs the `trellis init` command.
///
/// If `name` is `Some`, creates a new subdirectory with that name.
/// Otherwise initializes in the current working directory.
/// Returns exit code 0 on success.
pub fn run(name: Option<String>) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = match &name {
        Some(n) => {
            let dir = PathBuf::from(n);
            if dir.exists() {
                return Err(format!("directory '{}' already exists", n).into());
            }
            fs::create_dir_all(&dir)?;
            dir
        }
        None => std::env::current_dir()?,
    };

    let project_name = project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("my_app");

    eprintln!("  Creating new Trellis project `{project_name}`");

    create_directories(&project_dir)?;
    write_trellis_toml(&project_dir, project_name)?;
    write_main_layout(&project_dir)?;
    write_default_style(&project_dir)?;

    eprintln!("     Created {}", project_dir.join("trellis.toml").display());
    eprintln!(
        "     Created {}",
        project_dir.join("layouts").join("main.json").display()
    );
    eprintln!(
        "     Created {}",
        project_dir.join("styles").join("default.json").display()
    );

    Ok(0)
}

/// Creates the standard project directories.
fn create_directories(root: &Path) -> io::Result<()> {
    for dir in &["layouts", "styles"] {
        fs::create_dir_all(root.join(dir))?;
    }
    Ok(())
}

/// Writes the `trellis.toml` configuration file.
fn write_trellis_toml(root: &Path, name: &str) -> io::Result<()> {
    let content = format!(
        r#"[project]
name = "{name}"
version = "0.1.0"

[dirs]
layouts = "layouts"
styles = "styles"
output = "generated"
cache = ".trellis-cache"
"#
    );
    fs::write(root.join("trellis.toml"), content)
}

/// Writes a starter layout document.
fn write_main_layout(root: &Path) -> io::Result<()> {
    let content = r#"{
  "type": "Column",
  "id": "root",
  "data": [
    { "name": "title", "class": "String", "defaultValue": "Hello" }
  ],
  "child": [
    {
      "type": "Label",
      "id": "title_label",
      "style": "default",
      "text": "@{title}"
    }
  ]
}
"#;
    fs::write(root.join("layouts").join("main.json"), content)
}

/// Writes the default style document.
fn write_default_style(root: &Path) -> io::Result<()> {
    let content = r##"{
  "fontSize": 16,
  "fontColor": "#333333"
}
"##;
    fs::write(root.join("styles").join("default.json"), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_creates_directory_structure() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("test_proj");
        run(Some(project_dir.to_str().unwrap().to_string())).unwrap();

        assert!(project_dir.join("trellis.toml").exists());
        assert!(project_dir.join("layouts").is_dir());
        assert!(project_dir.join("styles").is_dir());
        assert!(project_dir.join("layouts").join("main.json").exists());
        assert!(project_dir.join("styles").join("default.json").exists());
    }

    #[test]
    fn init_generates_valid_toml() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("toml_proj");
        run(Some(project_dir.to_str().unwrap().to_string())).unwrap();

        let config = trellis_config::load_config(&project_dir).unwrap();
        assert_eq!(config.project.name, "toml_proj");
        assert_eq!(config.project.version, "0.1.0");
        assert_eq!(config.dirs.layouts, "layouts");
    }

    #[test]
    fn init_generates_parseable_documents() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("doc_proj");
        run(Some(project_dir.to_str().unwrap().to_string())).unwrap();

        let layout =
            fs::read_to_string(project_dir.join("layouts").join("main.json")).unwrap();
        let node: trellis_ir::LayoutNode = serde_json::from_str(&layout).unwrap();
        assert_eq!(node.node_type(), Some("Column"));

        let style =
            fs::read_to_string(project_dir.join("styles").join("default.json")).unwrap();
        let node: trellis_ir::LayoutNode = serde_json::from_str(&style).unwrap();
        assert_eq!(node.get_f64("fontSize"), Some(16.0));
    }

    #[test]
    fn init_existing_dir_error() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("exists");
        fs::create_dir_all(&project_dir).unwrap();

        let result = run(Some(project_dir.to_str().unwrap().to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn init_in_current_dir_layout() {
        let tmp = TempDir::new().unwrap();
        // Setting the process cwd is racy under the test harness; exercise
        // the directory creation step directly.
        create_directories(tmp.path()).unwrap();
        assert!(tmp.path().join("layouts").is_dir());
        assert!(tmp.path().join("styles").is_dir());
    }
}
