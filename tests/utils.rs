#![allow(dead_code)]

use hoganizer::{Config, Hoganizer, Options};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stand-in for the Hogan.js runtime; only its presence in the bundle matters.
pub const RUNTIME: &str = "var Hogan = {Template: function (codeObj) { this.codeObj = codeObj; }};\n";

/// A scratch project directory with a `templates/` folder and a runtime file.
pub struct Workspace {
    pub dir: TempDir,
    root: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        Self::setup(dir, root)
    }

    /// Places the project in a subdirectory `project` of the scratch directory.
    pub fn named(project: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(project);
        Self::setup(dir, root)
    }

    fn setup(dir: TempDir, root: PathBuf) -> Self {
        fs::create_dir_all(root.join("templates")).unwrap();
        fs::write(root.join("template.js"), RUNTIME).unwrap();
        Self { dir, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a template below `templates/`, creating directories as needed.
    pub fn template(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join("templates").join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn config(&self) -> Config {
        self.config_with(Options::default())
    }

    pub fn config_with(&self, options: Options) -> Config {
        Config::from_options(options, self.root()).unwrap()
    }

    pub fn hoganizer(&self) -> Hoganizer {
        Hoganizer::new(self.config())
    }

    pub fn output(&self) -> PathBuf {
        self.root().join("templates.js")
    }
}

/// Returns the byte offset of `needle`, failing with the whole bundle on a miss.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' missing from bundle:\n{haystack}"))
}
