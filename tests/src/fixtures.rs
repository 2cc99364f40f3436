use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary fact directory plus inventory directory.
pub struct Workspace {
    root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir(root.path().join("facts")).expect("failed to create facts dir");
        fs::create_dir(root.path().join("inventory")).expect("failed to create inventory dir");
        Self { root }
    }

    pub fn facts_dir(&self) -> PathBuf {
        self.root.path().join("facts")
    }

    pub fn inventory_dir(&self) -> PathBuf {
        self.root.path().join("inventory")
    }

    pub fn fact(&self, host: &str, json: &str) -> &Self {
        write(&self.facts_dir().join(host), json);
        self
    }

    pub fn inventory(&self, name: &str, text: &str) -> &Self {
        write(&self.inventory_dir().join(name), text);
        self
    }
}

fn write(path: &Path, content: &str) {
    fs::write(path, content).unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}
