//! # Source Command Implementation
//!
//! Imports a kickstart `url` record into a URL source, reports what the source
//! needs and prints the `url` command written back from it.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use payload_repos::kickstart::UrlData;
use payload_repos::output::{emoji, OutputConfig};
use payload_repos::source::{PayloadSource, UrlSource};

/// Import a kickstart url command into a URL source
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Kickstart url record stored as YAML
    #[arg(long, value_name = "FILE")]
    pub kickstart: PathBuf,
}

/// Execute the `source` command.
pub fn execute(args: SourceArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let data = UrlData::from_file(&args.kickstart)
        .with_context(|| format!("Failed to read the url record {}", args.kickstart.display()))?;

    let mut source = UrlSource::new();
    if let Err(e) = source.process_kickstart(&data) {
        eprintln!("{} {}", emoji(&out, "❌", "[ERR]"), out.bad(&e.to_string()));
        return Err(e).context("Invalid installation source");
    }

    println!("{} {}", emoji(&out, "✅", "[OK]"), out.good(&source.to_string()));
    println!("   Type: {}", source.repo_configuration().url_type);
    println!("   Description: {}", source.description());
    println!("   Network required: {}", source.network_required());
    println!("   Required space: {}", source.required_space());

    let mut exported = UrlData::default();
    source.setup_kickstart(&mut exported);
    print!("{}", exported);
    Ok(())
}
