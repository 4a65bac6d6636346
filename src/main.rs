//! # Payload Repositories CLI
//!
//! This is the binary entry point for the `payload-repos` command-line tool.
//!
//! It parses the command-line arguments with `clap`, sets up logging and runs
//! the selected command. The logic itself lives in the `payload_repos`
//! library; the binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
