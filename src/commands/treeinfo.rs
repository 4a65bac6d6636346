//! # Treeinfo Command Implementation
//!
//! Loads the metadata of an installation tree, generates a repository for each
//! auxiliary repository of the tree and merges them into an existing list.
//!
//! The URL source given with `--source` serves as the template for the
//! generated repositories, so they share its proxy and SSL settings.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use super::{format_repositories, OutputFormat};
use payload_repos::config::InstallerConfig;
use payload_repos::kickstart::UrlData;
use payload_repos::output::{emoji, OutputConfig};
use payload_repos::repo_config::load_repositories;
use payload_repos::repositories::{generate_treeinfo_repository, update_treeinfo_repositories};
use payload_repos::source::UrlSource;
use payload_repos::tree_info::TreeInfoMetadata;

/// Generate repositories from tree metadata and merge them into a list
#[derive(Args, Debug)]
pub struct TreeinfoArgs {
    /// The .treeinfo file, or the root directory of the tree
    #[arg(long, value_name = "FILE")]
    pub treeinfo: PathBuf,

    /// URL of the tree root
    #[arg(long, value_name = "URL")]
    pub root_url: String,

    /// Kickstart url record (YAML) of the installation source
    #[arg(long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Existing repository list (YAML)
    #[arg(long, value_name = "FILE")]
    pub repos: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Execute the `treeinfo` command.
pub fn execute(args: TreeinfoArgs, config_path: Option<&Path>, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = InstallerConfig::load(config_path).context("Failed to load the installer configuration")?;

    let mut source = UrlSource::new();
    if let Some(path) = &args.source {
        let data = UrlData::from_file(path)
            .with_context(|| format!("Failed to read the url record {}", path.display()))?;
        source
            .process_kickstart(&data)
            .context("Invalid installation source")?;
    }

    let metadata = TreeInfoMetadata::load_file(&args.treeinfo, &args.root_url, &config)
        .with_context(|| format!("Failed to load tree metadata from {}", args.treeinfo.display()))?;

    let existing = match &args.repos {
        Some(path) => load_repositories(path)
            .with_context(|| format!("Failed to read repositories from {}", path.display()))?,
        None => Vec::new(),
    };

    let generated = metadata
        .auxiliary_repositories()
        .map(|repo_md| generate_treeinfo_repository(source.repo_configuration(), repo_md))
        .collect();

    let repositories = update_treeinfo_repositories(existing, generated);
    let rendered = format_repositories(&repositories, args.format)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {} repositories to {}",
                emoji(&out, "✅", "[OK]"),
                repositories.len(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
