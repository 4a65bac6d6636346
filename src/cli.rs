//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use payload_repos::defaults::CONFIG_ENV;

/// Payload Repositories - Discover and reconcile installation repositories
#[derive(Parser, Debug)]
#[command(name = "payload-repos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Installer configuration file
    #[arg(long, global = true, value_name = "FILE", env = CONFIG_ENV)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the repositories provided by driver disks
    DriverDisks(commands::driver_disks::DriverDisksArgs),

    /// Generate repositories from tree metadata and merge them into a list
    Treeinfo(commands::treeinfo::TreeinfoArgs),

    /// Import a kickstart url command into a URL source
    Source(commands::source::SourceArgs),

    /// Validate a list of repositories
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .format_timestamp(None)
            .try_init()
            .ok();

        let config = self.config.as_deref();
        match self.command {
            Commands::DriverDisks(args) => commands::driver_disks::execute(args, config, &self.color),
            Commands::Treeinfo(args) => commands::treeinfo::execute(args, config, &self.color),
            Commands::Source(args) => commands::source::execute(args, &self.color),
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
