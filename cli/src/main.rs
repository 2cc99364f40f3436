mod commands;
mod terminal;

use commands::{CommandLine, Commands, host, json, list};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = commands.config();
    let output = commands::build_registry(&commands.sources, &cfg)?;

    match commands.command {
        Commands::List => list::list(&output.snapshot, &cfg),
        Commands::Host { name } => host::host(&output.snapshot, &name, &cfg),
        Commands::Json { compact } => json::json(&output.snapshot, compact),
    }
}
