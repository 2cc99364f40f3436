//! # Host Model
//!
//! A [`Host`] is the merged attribute record the registry keeps per hostname.
//! A [`HostUpdate`] is one write into that record. Every source (fact
//! snapshots, inventory groups) expresses what it knows as updates, and the
//! registry merges them with a fixed rule:
//!
//! * `group` is appended to [`Host::groups`], duplicates included.
//! * `hostvars` are merged key by key; later values replace earlier ones.
//! * `name` and `fields` overwrite the stored values.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// Field names with their own merge rule. Free-form fields may not use them.
pub const RESERVED_FIELDS: &[&str] = &["name", "groups", "hostvars"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Host {
    pub name: String,
    /// Group names in the order they were recorded. Not deduplicated.
    pub groups: Vec<String>,
    pub hostvars: BTreeMap<String, String>,
    /// Top-level fields taken from fact snapshots.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Host {
    /// The empty record created on first reference.
    pub fn new(hostname: &str) -> Self {
        Self {
            name: hostname.to_string(),
            groups: Vec::new(),
            hostvars: BTreeMap::new(),
            fields: Map::new(),
        }
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Merges `update` into this record.
    pub fn merge(&mut self, update: HostUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(group) = update.group {
            self.groups.push(group);
        }
        if let Some(hostvars) = update.hostvars {
            self.hostvars.extend(hostvars);
        }
        for (key, value) in update.fields {
            self.fields.insert(key, value);
        }
    }
}

/// A single write into a [`Host`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostUpdate {
    pub name: Option<String>,
    pub group: Option<String>,
    pub hostvars: Option<BTreeMap<String, String>>,
    pub fields: Map<String, Value>,
}

impl HostUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_hostvars(mut self, hostvars: BTreeMap<String, String>) -> Self {
        self.hostvars = Some(hostvars);
        self
    }

    /// Adds a free-form field. Reserved names are ignored; they have typed
    /// setters of their own.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if !RESERVED_FIELDS.contains(&key.as_str()) {
            self.fields.insert(key, value);
        }
        self
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
