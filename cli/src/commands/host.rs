use hostmap_common::config::Config;
use hostmap_common::registry::RegistrySnapshot;

use crate::terminal::print;

pub fn host(snapshot: &RegistrySnapshot, name: &str, cfg: &Config) -> anyhow::Result<()> {
    let Some(host) = snapshot.get(name) else {
        anyhow::bail!("host '{name}' is not in the registry");
    };

    print::header(name, cfg.quiet);
    print::host_tree(0, host);
    print::field_lines(host);
    Ok(())
}
