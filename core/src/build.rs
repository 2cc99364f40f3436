//! # Registry Build
//!
//! The whole batch: fact updates first, then the inventory, then the limit
//! filter. Fact failures are collected as diagnostics; inventory failures
//! abort and no snapshot is produced.

use std::collections::HashSet;

use hostmap_common::config::Config;
use hostmap_common::error::{FactDecodeError, InventoryError};
use hostmap_common::host::Host;
use hostmap_common::registry::{HostRegistry, RegistrySnapshot};
use hostmap_common::{success, warn};

use crate::facts::FactSource;
use crate::inventory::InventoryBuilder;
use crate::pattern;

#[derive(Debug)]
pub struct BuildOutput {
    pub snapshot: RegistrySnapshot,
    /// Fact snapshots that were skipped.
    pub diagnostics: Vec<FactDecodeError>,
}

pub fn build(
    cfg: &Config,
    facts: &dyn FactSource,
    inventory: Option<&str>,
) -> Result<BuildOutput, InventoryError> {
    let mut registry = HostRegistry::new();
    let mut diagnostics: Vec<FactDecodeError> = Vec::new();

    for result in facts.collect() {
        match result {
            Ok(snapshot) => {
                let hostname = snapshot.hostname.clone();
                registry.apply(&hostname, snapshot.into_update());
            }
            Err(e) => {
                warn!("Skipping facts: {e}");
                diagnostics.push(e);
            }
        }
    }
    let fact_hosts = registry.len();

    if let Some(text) = inventory {
        InventoryBuilder::new(cfg).apply(text, &mut registry)?;
    }

    let total = registry.len();
    let snapshot = if cfg.limit.is_empty() {
        registry.into_snapshot()
    } else {
        let limit = Limit::new(&cfg.limit)?;
        registry.into_snapshot_filtered(|host| limit.matches(host))
    };

    success!(
        "{} hosts registered ({} from facts, {} after limit)",
        total,
        fact_hosts,
        snapshot.len()
    );

    Ok(BuildOutput {
        snapshot,
        diagnostics,
    })
}

/// Host and group names a host must match to be kept.
struct Limit {
    names: HashSet<String>,
}

impl Limit {
    fn new(entries: &[String]) -> Result<Self, InventoryError> {
        let mut names = HashSet::new();
        for entry in entries {
            names.extend(pattern::expand(entry)?);
        }
        Ok(Self { names })
    }

    fn matches(&self, host: &Host) -> bool {
        self.names.contains(&host.name) || host.groups.iter().any(|g| self.names.contains(g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::FactSnapshot;
    use serde_json::{Map, json};

    fn facts(hosts: &[&str]) -> Vec<FactSnapshot> {
        hosts
            .iter()
            .map(|h| FactSnapshot {
                hostname: h.to_string(),
                fields: Map::from_iter([("os".to_string(), json!("linux"))]),
            })
            .collect()
    }

    #[test]
    fn facts_and_inventory_vars_both_survive() {
        let output = build(
            &Config::default(),
            &facts(&["web1"]),
            Some("[web]\nweb1 env=prod\n"),
        )
        .unwrap();

        let host = output.snapshot.get("web1").unwrap();
        assert_eq!(host.fields.get("os"), Some(&json!("linux")));
        assert_eq!(host.hostvars["env"], "prod");
        assert_eq!(host.groups, vec!["web"]);
    }

    #[test]
    fn fatal_inventory_error_publishes_nothing() {
        let result = build(&Config::default(), &facts(&["web1"]), Some("[web\n"));
        assert!(matches!(result, Err(InventoryError::HeaderParse { .. })));
    }

    #[test]
    fn limit_keeps_named_hosts_and_group_members() {
        let cfg = Config {
            limit: vec!["db".into(), "web[1:1]".into()],
            ..Config::default()
        };
        let output = build(
            &cfg,
            &facts(&["stray"]),
            Some("[web]\nweb[1:3]\n[db]\ndb1\n"),
        )
        .unwrap();

        assert_eq!(
            output.snapshot.hostnames().collect::<Vec<_>>(),
            vec!["db1", "web1"]
        );
    }

    #[test]
    fn facts_only_build() {
        let output = build(&Config::default(), &facts(&["a", "b"]), None).unwrap();
        assert_eq!(output.snapshot.len(), 2);
        assert!(output.diagnostics.is_empty());
    }
}
