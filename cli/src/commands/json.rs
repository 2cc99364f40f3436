use hostmap_common::registry::RegistrySnapshot;

pub fn json(snapshot: &RegistrySnapshot, compact: bool) -> anyhow::Result<()> {
    let rendered = if compact {
        serde_json::to_string(snapshot)?
    } else {
        serde_json::to_string_pretty(snapshot)?
    };
    println!("{rendered}");
    Ok(())
}
