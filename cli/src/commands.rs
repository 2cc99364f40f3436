pub mod host;
pub mod json;
pub mod list;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use hostmap_common::config::Config;
use hostmap_core::build::{self, BuildOutput};
use hostmap_core::facts::FactDir;
use hostmap_core::inventory;

#[derive(Parser)]
#[command(name = "hostmap")]
#[command(about = "Merge host facts and an inventory into one host registry.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub sources: Sources,

    /// Only keep these hosts or groups (comma separated, host patterns allowed)
    #[arg(short, long, global = true, value_delimiter = ',')]
    pub limit: Vec<String>,

    /// Skip inventory lines with a malformed host pattern
    #[arg(long, global = true)]
    pub skip_bad_patterns: bool,

    /// Skip inventory tokens that are not key=value assignments
    #[arg(long, global = true)]
    pub skip_bad_assignments: bool,

    /// Warn instead of failing when a section references an unknown group
    #[arg(long, global = true)]
    pub allow_undefined_groups: bool,

    /// Increase log output (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Reduce output (-q, -qq)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Args)]
pub struct Sources {
    /// Directory of per-host JSON fact files (repeatable)
    #[arg(short = 'f', long = "facts", global = true)]
    pub fact_dirs: Vec<PathBuf>,

    /// Fact files hold bare facts; nest each document under this field
    #[arg(long, global = true, value_name = "FIELD")]
    pub fact_cache: Option<String>,

    /// Inventory file or directory (repeatable)
    #[arg(short, long = "inventory", global = true)]
    pub inventories: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every host as a tree
    #[command(alias = "l")]
    List,
    /// Show a single host
    #[command(alias = "h")]
    Host { name: String },
    /// Print the registry as JSON
    #[command(alias = "j")]
    Json {
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            skip_bad_patterns: self.skip_bad_patterns,
            skip_bad_assignments: self.skip_bad_assignments,
            allow_undefined_groups: self.allow_undefined_groups,
            fact_cache_key: self.sources.fact_cache.clone(),
            limit: self.limit.clone(),
            quiet: self.quiet,
        }
    }
}

/// Runs the full build for the configured sources.
pub fn build_registry(sources: &Sources, cfg: &Config) -> anyhow::Result<BuildOutput> {
    let facts = FactDir::new(sources.fact_dirs.clone()).with_cache_key(cfg.fact_cache_key.clone());

    let text = if sources.inventories.is_empty() {
        None
    } else {
        Some(inventory::load(&sources.inventories)?)
    };

    build::build(cfg, &facts, text.as_deref()).context("Failed to build host registry")
}
