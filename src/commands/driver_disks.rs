//! # Driver Disks Command Implementation
//!
//! Scans the driver disk directory, creates missing repository metadata and
//! prints the resulting repositories.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use super::{format_repositories, OutputFormat};
use payload_repos::config::InstallerConfig;
use payload_repos::defaults::DRIVER_DISK_PATH;
use payload_repos::output::{emoji, OutputConfig};
use payload_repos::repositories::{generate_driver_disk_repositories, CreaterepoCommand};

/// List the repositories provided by driver disks
#[derive(Args, Debug)]
pub struct DriverDisksArgs {
    /// Directory holding the DD-<n> directories
    #[arg(long, value_name = "DIR", default_value = DRIVER_DISK_PATH)]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Execute the `driver-disks` command.
pub fn execute(args: DriverDisksArgs, config_path: Option<&Path>, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = InstallerConfig::load(config_path).context("Failed to load the installer configuration")?;
    let generator = CreaterepoCommand::from_config(&config);

    let repositories = generate_driver_disk_repositories(&args.path, &config, &generator)
        .with_context(|| format!("Failed to scan driver disks in {}", args.path.display()))?;

    if repositories.is_empty() && args.format == OutputFormat::Text {
        println!(
            "{} No driver disk repositories found in {}",
            emoji(&out, "ℹ️", "[INFO]"),
            args.path.display()
        );
        return Ok(());
    }

    print!("{}", format_repositories(&repositories, args.format)?);
    Ok(())
}
