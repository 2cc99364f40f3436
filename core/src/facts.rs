//! # Fact Sources
//!
//! A fact source turns per-host fact snapshots into registry updates. The
//! only shipped implementation is [`FactDir`]: one JSON document per host,
//! named after the host.
//!
//! Decoding failures are per host. They are returned alongside the good
//! snapshots so the build can log them and carry on.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use hostmap_common::error::FactDecodeError;
use hostmap_common::host::{HostUpdate, RESERVED_FIELDS};
use hostmap_common::warn;

use crate::files;

/// The decoded facts of one host.
#[derive(Debug, Clone, PartialEq)]
pub struct FactSnapshot {
    pub hostname: String,
    pub fields: Map<String, Value>,
}

impl FactSnapshot {
    /// The single update this snapshot contributes: the host's name plus
    /// every top-level field.
    pub fn into_update(self) -> HostUpdate {
        let mut update = HostUpdate::new().with_name(self.hostname.as_str());
        for (key, value) in self.fields {
            if RESERVED_FIELDS.contains(&key.as_str()) {
                warn!("Ignoring reserved field '{key}' in facts for {}", self.hostname);
                continue;
            }
            update = update.with_field(key, value);
        }
        update
    }
}

pub trait FactSource {
    fn collect(&self) -> Vec<Result<FactSnapshot, FactDecodeError>>;
}

/// In-memory facts, mostly for callers that gather facts themselves.
impl FactSource for Vec<FactSnapshot> {
    fn collect(&self) -> Vec<Result<FactSnapshot, FactDecodeError>> {
        self.iter().cloned().map(Ok).collect()
    }
}

/// Fact snapshots stored as one JSON file per host in one or more directories.
pub struct FactDir {
    dirs: Vec<PathBuf>,
    cache_key: Option<String>,
}

impl FactDir {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self {
            dirs,
            cache_key: None,
        }
    }

    /// Fact-cache layout: each file holds only the facts, which are nested
    /// under `key` instead of being spread at the top level.
    pub fn with_cache_key(mut self, key: Option<String>) -> Self {
        self.cache_key = key;
        self
    }

    fn decode(&self, path: &Path) -> Result<FactSnapshot, FactDecodeError> {
        let text = fs::read_to_string(path).map_err(|source| FactDecodeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value = serde_json::from_str(&text).map_err(|source| FactDecodeError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        let Value::Object(document) = value else {
            return Err(FactDecodeError::NotAnObject {
                path: path.to_path_buf(),
            });
        };

        let fields = match &self.cache_key {
            Some(key) => Map::from_iter([(key.clone(), Value::Object(document))]),
            None => document,
        };

        let hostname = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(FactSnapshot { hostname, fields })
    }
}

impl FactSource for FactDir {
    fn collect(&self) -> Vec<Result<FactSnapshot, FactDecodeError>> {
        let mut snapshots = Vec::new();

        for dir in &self.dirs {
            match files::regular_files(dir) {
                Ok(paths) => snapshots.extend(paths.iter().map(|path| self.decode(path))),
                Err(source) => snapshots.push(Err(FactDecodeError::Read {
                    path: dir.clone(),
                    source,
                })),
            }
        }

        snapshots
    }
}
