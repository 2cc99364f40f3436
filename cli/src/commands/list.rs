use colored::*;
use hostmap_common::config::Config;
use hostmap_common::registry::RegistrySnapshot;

use crate::mprint;
use crate::terminal::print;

pub fn list(snapshot: &RegistrySnapshot, cfg: &Config) -> anyhow::Result<()> {
    if snapshot.is_empty() {
        print::header("zero hosts registered", cfg.quiet);
        print::no_results();
        return Ok(());
    }

    print::header("host registry", cfg.quiet);

    for (idx, (name, host)) in snapshot.iter().enumerate() {
        match cfg.quiet {
            2 => print::print(name),
            _ => {
                print::host_tree(idx, host);
                if idx + 1 != snapshot.len() {
                    mprint!();
                }
            }
        }
    }

    if cfg.quiet == 0 {
        let count: ColoredString = format!("{} hosts", snapshot.len()).bold().green();
        print::fat_separator();
        print::centerln(&format!("Registry complete: {count}"));
    }

    Ok(())
}
