//! # Inventory Builder
//!
//! Loads inventory text from disk and drives classification and group
//! resolution into a [`HostRegistry`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use hostmap_common::config::Config;
use hostmap_common::error::InventoryError;
use hostmap_common::registry::HostRegistry;

use crate::classifier;
use crate::files;
use crate::resolver::GroupResolver;

/// Reads every inventory path and joins the texts in argument order.
///
/// A path may be a single file or a directory; a directory contributes its
/// regular, non-hidden files sorted by name.
pub fn load(paths: &[PathBuf]) -> Result<String, InventoryError> {
    let mut text = String::new();

    for path in paths {
        let sources = if path.is_dir() {
            files::regular_files(path).map_err(|source| io_error(path, source))?
        } else {
            vec![path.clone()]
        };

        for source in sources {
            debug!("Reading inventory {}", source.display());
            let content = fs::read_to_string(&source).map_err(|e| io_error(&source, e))?;
            text.push_str(&content);
            if !text.ends_with('\n') {
                text.push('\n');
            }
        }
    }

    Ok(text)
}

fn io_error(path: &Path, source: std::io::Error) -> InventoryError {
    InventoryError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub struct InventoryBuilder<'a> {
    cfg: &'a Config,
}

impl<'a> InventoryBuilder<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }

    /// Parses `text` and writes every resulting host update into `registry`.
    pub fn apply(&self, text: &str, registry: &mut HostRegistry) -> Result<(), InventoryError> {
        let inventory = classifier::classify(text)?;
        debug!(
            "Classified {} host groups, {} vars sections, {} children sections",
            inventory.normal.len(),
            inventory.vars.len(),
            inventory.children.len()
        );
        GroupResolver::new(self.cfg).resolve(&inventory, registry)
    }
}
