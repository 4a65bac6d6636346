//! Default values for payload-repos configuration.
//!
//! This module provides centralized default values used across the library
//! and the commands, ensuring consistency and avoiding duplication.

use std::env;
use std::path::PathBuf;

/// Where anaconda-dracut copies driver disk repositories (`DD-1`, `DD-2`, ...).
pub const DRIVER_DISK_PATH: &str = "/run/install";

/// Command used to create repository metadata for driver disks.
pub const CREATEREPO_COMMAND: &str = "createrepo_c";

/// Environment variable naming the installer configuration file.
pub const CONFIG_ENV: &str = "PAYLOAD_REPOS_CONFIG";

/// Variant types whose tree-info repositories are enabled by default.
pub fn enabled_repositories_from_treeinfo() -> Vec<String> {
    ["addon", "optional", "variant"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Returns the default installer configuration path.
///
/// The `PAYLOAD_REPOS_CONFIG` environment variable wins. Otherwise the
/// platform configuration directory is used:
/// - Linux: `~/.config/payload-repos/config.yaml` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/payload-repos/config.yaml`
///
/// Falls back to `payload-repos.yaml` in the current directory if the
/// platform configuration directory cannot be determined.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .map(|dir| dir.join("payload-repos").join("config.yaml"))
        .unwrap_or_else(|| PathBuf::from("payload-repos.yaml"))
}
