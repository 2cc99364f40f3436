//! # Group Resolution
//!
//! Turns classified inventory sections into registry writes. The phases run
//! in a fixed order because `hostvars` merge key by key and the last write
//! wins:
//!
//! 1. Expand every Normal group line and record group membership.
//! 2. Apply `:children` sections to the members of each referenced group.
//! 3. Apply `:vars` sections to the members of the same-named group.
//! 4. Apply Normal group lines themselves.
//!
//! A host's own line therefore overrides inherited values, and group names
//! from `:children` sections are recorded before the host's direct group.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::debug;

use hostmap_common::config::Config;
use hostmap_common::error::InventoryError;
use hostmap_common::group::GroupKind;
use hostmap_common::host::HostUpdate;
use hostmap_common::registry::HostRegistry;
use hostmap_common::warn;

use crate::classifier::ClassifiedInventory;
use crate::{pattern, words};

/// Bare token that ends the assignments of a line.
const COMMENT_MARKER: &str = "#";

type HostVars = BTreeMap<String, String>;

/// A Normal or Children body line: leading name plus inline assignments.
#[derive(Debug, Clone, PartialEq)]
struct EntryLine {
    name: String,
    vars: HostVars,
}

/// A Normal group line after host expansion.
#[derive(Debug)]
struct ExpandedLine<'a> {
    group: &'a str,
    hosts: Vec<String>,
    vars: HostVars,
}

pub struct GroupResolver<'a> {
    cfg: &'a Config,
}

impl<'a> GroupResolver<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }

    /// Runs all phases against `registry`.
    pub fn resolve(
        &self,
        inventory: &ClassifiedInventory,
        registry: &mut HostRegistry,
    ) -> Result<(), InventoryError> {
        let (members, lines) = self.expand_normal_groups(inventory)?;
        debug!(
            "Recorded {} groups from {} host lines",
            members.len(),
            lines.len()
        );

        self.apply_children(inventory, &members, registry)?;
        self.apply_vars(inventory, &members, registry)?;

        for line in &lines {
            for host in &line.hosts {
                let update = HostUpdate::new()
                    .with_hostvars(line.vars.clone())
                    .with_group(line.group);
                registry.apply(host, update);
            }
        }
        debug!("Applied {} host lines", lines.len());

        Ok(())
    }

    /// Phase 1: membership of every Normal group, without touching the registry.
    fn expand_normal_groups<'i>(
        &self,
        inventory: &'i ClassifiedInventory,
    ) -> Result<(IndexMap<&'i str, Vec<String>>, Vec<ExpandedLine<'i>>), InventoryError> {
        let mut members: IndexMap<&str, Vec<String>> = IndexMap::new();
        let mut expanded: Vec<ExpandedLine> = Vec::new();

        for (group, lines) in &inventory.normal {
            let group_members = members.entry(group.as_str()).or_default();

            for raw in lines {
                let Some(entry) = self.parse_entry(group, raw)? else {
                    continue;
                };

                let hosts = match pattern::expand(&entry.name) {
                    Ok(hosts) => hosts,
                    Err(e) if self.cfg.skip_bad_patterns => {
                        warn!("Skipping line in [{group}]: {e}");
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };

                group_members.extend(hosts.iter().cloned());
                expanded.push(ExpandedLine {
                    group,
                    hosts,
                    vars: entry.vars,
                });
            }
        }

        Ok((members, expanded))
    }

    /// Phase 2: every host of a referenced group joins the children group.
    fn apply_children(
        &self,
        inventory: &ClassifiedInventory,
        members: &IndexMap<&str, Vec<String>>,
        registry: &mut HostRegistry,
    ) -> Result<(), InventoryError> {
        for (group, lines) in &inventory.children {
            for raw in lines {
                let Some(entry) = self.parse_entry(group, raw)? else {
                    continue;
                };
                let Some(hosts) = self.lookup(members, GroupKind::Children, group, &entry.name)?
                else {
                    continue;
                };

                for host in hosts {
                    let update = HostUpdate::new()
                        .with_hostvars(entry.vars.clone())
                        .with_group(group.as_str());
                    registry.apply(host, update);
                }
            }
        }
        Ok(())
    }

    /// Phase 3: group variables for the members of the same-named group.
    fn apply_vars(
        &self,
        inventory: &ClassifiedInventory,
        members: &IndexMap<&str, Vec<String>>,
        registry: &mut HostRegistry,
    ) -> Result<(), InventoryError> {
        for (group, lines) in &inventory.vars {
            for raw in lines {
                let tokens = words::split(raw)?;
                let vars = self.parse_vars(group, &tokens)?;
                let Some(hosts) = self.lookup(members, GroupKind::Vars, group, group)? else {
                    continue;
                };

                for host in hosts {
                    registry.apply(host, HostUpdate::new().with_hostvars(vars.clone()));
                }
            }
        }
        Ok(())
    }

    fn lookup<'m>(
        &self,
        members: &'m IndexMap<&str, Vec<String>>,
        kind: GroupKind,
        group: &str,
        group_ref: &str,
    ) -> Result<Option<&'m Vec<String>>, InventoryError> {
        if let Some(hosts) = members.get(group_ref) {
            return Ok(Some(hosts));
        }

        let err = InventoryError::UndefinedGroup {
            kind,
            group: group.to_string(),
            group_ref: group_ref.to_string(),
        };
        if self.cfg.allow_undefined_groups {
            warn!("{err}");
            Ok(None)
        } else {
            Err(err)
        }
    }

    /// Splits a Normal or Children line into its leading name and assignments.
    fn parse_entry(&self, group: &str, raw: &str) -> Result<Option<EntryLine>, InventoryError> {
        let tokens = words::split(raw)?;
        let Some((name, rest)) = tokens.split_first() else {
            return Ok(None);
        };

        Ok(Some(EntryLine {
            name: name.clone(),
            vars: self.parse_vars(group, rest)?,
        }))
    }

    /// Parses `key=value` tokens left to right, stopping at a bare `#`.
    fn parse_vars(&self, group: &str, tokens: &[String]) -> Result<HostVars, InventoryError> {
        let mut vars = HostVars::new();

        for token in tokens {
            if token == COMMENT_MARKER {
                break;
            }
            match token.split_once('=') {
                Some((key, value)) => {
                    vars.insert(key.to_string(), value.to_string());
                }
                None if self.cfg.skip_bad_assignments => {
                    warn!("Skipping token '{token}' in [{group}]: not a key=value assignment");
                }
                None => {
                    return Err(InventoryError::VarAssignment {
                        group: group.to_string(),
                        token: token.clone(),
                    });
                }
            }
        }

        Ok(vars)
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
