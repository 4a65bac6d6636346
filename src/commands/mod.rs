//! # CLI Command Implementations
//!
//! Each subcommand of `payload-repos` lives in its own file, with an `Args`
//! struct derived with `clap` and an `execute` function that calls into the
//! `payload_repos` library.

pub mod completions;
pub mod driver_disks;
pub mod source;
pub mod treeinfo;
pub mod validate;

use anyhow::{Context, Result};
use clap::ValueEnum;
use payload_repos::output::render_repositories;
use payload_repos::repo_config::RepoConfigurationData;

/// How repository lists are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
    Text,
}

/// Serializes repositories in the requested format.
pub fn format_repositories(repositories: &[RepoConfigurationData], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(repositories).context("Failed to serialize repositories as YAML")
        }
        OutputFormat::Json => serde_json::to_string_pretty(repositories)
            .map(|s| s + "\n")
            .context("Failed to serialize repositories as JSON"),
        OutputFormat::Text => Ok(render_repositories(repositories)),
    }
}
