use hostmap_common::config::Config;
use hostmap_common::error::{FactDecodeError, InventoryError};
use hostmap_core::build::{self, BuildOutput};
use hostmap_core::facts::FactDir;
use hostmap_core::inventory;
use serde_json::json;

use crate::fixtures::Workspace;

fn run(ws: &Workspace, cfg: &Config) -> Result<BuildOutput, InventoryError> {
    let facts = FactDir::new(vec![ws.facts_dir()]).with_cache_key(cfg.fact_cache_key.clone());
    let text = inventory::load(&[ws.inventory_dir()])?;
    build::build(cfg, &facts, Some(&text))
}

const FLEET: &str = "\
# production fleet
[web]
web[01:03].example.com:22 env=prod
[web:vars]
env=staging region=us ntp=\"pool ntp\"

[db]
db-[a:b].example.com backup=yes # nightly

[frontend:children]
web tier=frontend
";

#[test]
fn full_fleet_merges_facts_and_inventory() {
    let ws = Workspace::new();
    ws.fact("web01.example.com", r#"{"os": "debian", "cpus": 2}"#)
        .fact("unlisted.example.com", r#"{"os": "alpine"}"#)
        .inventory("hosts", FLEET);

    let output = run(&ws, &Config::default()).unwrap();
    let snapshot = &output.snapshot;

    assert_eq!(
        snapshot.hostnames().collect::<Vec<_>>(),
        vec![
            "db-a.example.com",
            "db-b.example.com",
            "unlisted.example.com",
            "web01.example.com",
            "web02.example.com",
            "web03.example.com",
        ]
    );

    let web01 = snapshot.get("web01.example.com").unwrap();
    assert_eq!(web01.groups, vec!["frontend", "web"]);
    assert_eq!(web01.hostvars["env"], "prod");
    assert_eq!(web01.hostvars["region"], "us");
    assert_eq!(web01.hostvars["ntp"], "pool ntp");
    assert_eq!(web01.hostvars["tier"], "frontend");
    assert_eq!(web01.fields.get("os"), Some(&json!("debian")));

    let db = snapshot.get("db-b.example.com").unwrap();
    assert_eq!(db.groups, vec!["db"]);
    assert_eq!(db.hostvars.len(), 1);

    let unlisted = snapshot.get("unlisted.example.com").unwrap();
    assert!(unlisted.groups.is_empty());
    assert!(unlisted.hostvars.is_empty());
}

#[test]
fn broken_fact_files_become_diagnostics() {
    let ws = Workspace::new();
    ws.fact("good", r#"{"os": "linux"}"#)
        .fact("broken", "{ not json")
        .inventory("hosts", "[all_hosts]\ngood\nbroken\n");

    let output = run(&ws, &Config::default()).unwrap();

    assert_eq!(output.diagnostics.len(), 1);
    assert!(matches!(output.diagnostics[0], FactDecodeError::Json { .. }));
    // The inventory still registers the host whose facts failed.
    assert_eq!(output.snapshot.get("broken").unwrap().groups, vec!["all_hosts"]);
}

#[test]
fn inventory_split_across_files() {
    let ws = Workspace::new();
    ws.inventory("01-groups", "[web]\nweb1\n")
        .inventory("02-vars", "[web:vars]\nport=80\n")
        .inventory(".swap", "[broken");

    let output = run(&ws, &Config::default()).unwrap();
    assert_eq!(output.snapshot.get("web1").unwrap().hostvars["port"], "80");
}

#[test]
fn fact_cache_layout() {
    let ws = Workspace::new();
    ws.fact("web1", r#"{"kernel": "6.1"}"#)
        .inventory("hosts", "[web]\nweb1\n");

    let cfg = Config {
        fact_cache_key: Some("facts".into()),
        ..Config::default()
    };
    let output = run(&ws, &cfg).unwrap();

    let host = output.snapshot.get("web1").unwrap();
    assert_eq!(host.fields.get("facts"), Some(&json!({"kernel": "6.1"})));
}

#[test]
fn undefined_group_aborts_the_build() {
    let ws = Workspace::new();
    ws.fact("web1", "{}")
        .inventory("hosts", "[web]\nweb1\n[everything:children]\nweb\ndatabases\n");

    let err = run(&ws, &Config::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "[everything:children] references undefined group 'databases'"
    );
}

#[test]
fn snapshot_serializes_for_renderers() {
    let ws = Workspace::new();
    ws.fact("web1", r#"{"os": "linux"}"#)
        .inventory("hosts", "[web]\nweb1 env=prod\n");

    let output = run(&ws, &Config::default()).unwrap();
    let value = serde_json::to_value(&output.snapshot).unwrap();

    assert_eq!(
        value,
        json!({
            "web1": {
                "name": "web1",
                "groups": ["web"],
                "hostvars": {"env": "prod"},
                "os": "linux"
            }
        })
    );
}
