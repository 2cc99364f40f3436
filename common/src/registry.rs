//! # Host Registry
//!
//! The single mutable accumulator of a build. It only grows: hosts are
//! created on first reference and never removed while sources are applied.
//! Once every source has been applied the registry is frozen into a
//! [`RegistrySnapshot`] for the renderer.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::host::{Host, HostUpdate};

#[derive(Debug, Default)]
pub struct HostRegistry {
    hosts: BTreeMap<String, Host>,
}

impl HostRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `update` into the record for `hostname`, creating the record
    /// first if it does not exist yet.
    pub fn apply(&mut self, hostname: &str, update: HostUpdate) {
        self.entry(hostname).merge(update);
    }

    /// Returns the record for `hostname`, creating an empty one if needed.
    pub fn entry(&mut self, hostname: &str) -> &mut Host {
        self.hosts
            .entry(hostname.to_string())
            .or_insert_with(|| Host::new(hostname))
    }

    pub fn get(&self, hostname: &str) -> Option<&Host> {
        self.hosts.get(hostname)
    }

    pub fn contains(&self, hostname: &str) -> bool {
        self.hosts.contains_key(hostname)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Freezes the registry, keeping only the hosts `keep` accepts.
    pub fn into_snapshot_filtered<F>(mut self, mut keep: F) -> RegistrySnapshot
    where
        F: FnMut(&Host) -> bool,
    {
        self.hosts.retain(|_, host| keep(host));
        self.into_snapshot()
    }

    pub fn into_snapshot(self) -> RegistrySnapshot {
        RegistrySnapshot { hosts: self.hosts }
    }
}

/// Read-only view of a finished registry, ordered by hostname.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RegistrySnapshot {
    hosts: BTreeMap<String, Host>,
}

impl RegistrySnapshot {
    pub fn get(&self, hostname: &str) -> Option<&Host> {
        self.hosts.get(hostname)
    }

    pub fn contains(&self, hostname: &str) -> bool {
        self.hosts.contains_key(hostname)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.hosts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Host> {
        self.hosts.iter()
    }
}

impl<'a> IntoIterator for &'a RegistrySnapshot {
    type Item = (&'a String, &'a Host);
    type IntoIter = btree_map::Iter<'a, String, Host>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}
