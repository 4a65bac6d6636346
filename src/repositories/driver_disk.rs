//! Driver disk repositories.
//!
//! Drivers are loaded by anaconda-dracut. Their repositories are copied into
//! `<path>/DD-X` where X is a number starting at 1. The scan stops at the
//! first missing `DD-X` directory.

use crate::config::InstallerConfig;
use crate::error::{Error, Result};
use crate::repo_config::RepoConfigurationData;
use log::info;
use std::path::Path;
use std::process::Command;

/// Creates repository metadata (`repodata/`) for a directory of packages.
///
/// This is a trait so the scan can be exercised without running the real
/// command.
pub trait RepoMetadataGenerator {
    fn create_repository(&self, repo_path: &Path) -> Result<()>;
}

/// Runs a `createrepo`-compatible command with the directory as its only
/// argument.
#[derive(Debug, Clone)]
pub struct CreaterepoCommand {
    program: String,
}

impl CreaterepoCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Uses the command named by the installer configuration.
    pub fn from_config(config: &InstallerConfig) -> Self {
        Self::new(config.payload.createrepo_command.clone())
    }
}

impl RepoMetadataGenerator for CreaterepoCommand {
    fn create_repository(&self, repo_path: &Path) -> Result<()> {
        let tool_error = |message: String| Error::ExternalTool {
            command: self.program.clone(),
            path: repo_path.display().to_string(),
            message,
        };

        let output = Command::new(&self.program)
            .arg(repo_path)
            .output()
            .map_err(|e| tool_error(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, stderr.trim())
            };
            return Err(tool_error(message));
        }

        Ok(())
    }
}

/// Generates driver disk repositories found under `path`.
///
/// Returns one record per `DD-<n>` directory that contains packages, in
/// index order. Missing metadata is created with `generator` first; a
/// failure there aborts the whole scan.
pub fn generate_driver_disk_repositories(
    path: &Path,
    config: &InstallerConfig,
    generator: &dyn RepoMetadataGenerator,
) -> Result<Vec<RepoConfigurationData>> {
    let mut repositories = Vec::new();

    if !config.system.can_use_driver_disks {
        info!("Skipping driver disk repository generation.");
        return Ok(repositories);
    }

    for index in 1.. {
        let repo_name = format!("DD-{}", index);
        let repo_path = path.join(&repo_name);

        if !repo_path.is_dir() {
            break;
        }

        if !contains_packages(&repo_path)? {
            continue;
        }

        if !repo_path.join("repodata").is_dir() {
            info!("Running createrepo on {}", repo_path.display());
            generator.create_repository(&repo_path)?;
        }

        repositories.push(RepoConfigurationData::new(
            repo_name,
            format!("file://{}", repo_path.display()),
        ));
    }

    Ok(repositories)
}

/// Whether the directory holds at least one entry matching `*rpm`.
///
/// Hidden entries do not count.
fn contains_packages(repo_path: &Path) -> Result<bool> {
    let pattern = format!(
        "{}/*rpm",
        glob::Pattern::escape(&repo_path.to_string_lossy())
    );
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };
    match glob::glob_with(&pattern, options)?.next() {
        Some(entry) => entry.map(|_| true).map_err(Error::from),
        None => Ok(false),
    }
}
