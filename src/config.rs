//! # Installer Configuration
//!
//! This module defines the configuration file that controls the policy side
//! of repository generation: whether driver disks may be used, which command
//! creates repository metadata, and which tree-info variant types are enabled
//! by default.
//!
//! ## Format
//!
//! The configuration is a YAML document. Every key is optional:
//!
//! ```yaml
//! system:
//!   can_use_driver_disks: true
//! payload:
//!   createrepo_command: createrepo_c
//!   enabled_repositories_from_treeinfo: [addon, optional, variant]
//! ```
//!
//! ## Loading
//!
//! `InstallerConfig::load` takes an optional explicit path. An explicit path
//! must exist. Without one, the default path from
//! [`defaults::default_config_path`](crate::defaults::default_config_path) is
//! read if present, and the built-in defaults are used otherwise.

use crate::defaults;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// System capabilities of the running installer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemSection {
    /// Whether repositories from driver disks may be used.
    pub can_use_driver_disks: bool,
}

impl Default for SystemSection {
    fn default() -> Self {
        Self {
            can_use_driver_disks: true,
        }
    }
}

/// Payload settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayloadSection {
    /// Command that creates repository metadata in a directory.
    pub createrepo_command: String,
    /// Variant types of tree-info repositories that start enabled.
    pub enabled_repositories_from_treeinfo: Vec<String>,
}

impl Default for PayloadSection {
    fn default() -> Self {
        Self {
            createrepo_command: defaults::CREATEREPO_COMMAND.to_string(),
            enabled_repositories_from_treeinfo: defaults::enabled_repositories_from_treeinfo(),
        }
    }
}

/// The complete installer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    pub system: SystemSection,
    pub payload: PayloadSection,
}

impl InstallerConfig {
    /// Parses a configuration from YAML. An empty document yields defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use payload_repos::config::InstallerConfig;
    ///
    /// let config = InstallerConfig::parse("system:\n  can_use_driver_disks: false\n").unwrap();
    /// assert!(!config.system.can_use_driver_disks);
    /// assert_eq!(config.payload.createrepo_command, "createrepo_c");
    /// ```
    pub fn parse(yaml_content: &str) -> Result<Self> {
        if yaml_content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml_content).map_err(|e| {
            let message = e.to_string();
            let hint = message.contains("unknown field").then(|| {
                "Top-level keys are 'system' and 'payload'; see the configuration documentation"
                    .to_string()
            });
            Error::ConfigParse { message, hint }
        })
    }

    /// Reads and parses a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::parse(&content)
    }

    /// Loads the configuration from `path`, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = defaults::default_config_path();
                if default_path.is_file() {
                    log::debug!("Loading configuration from {}", default_path.display());
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Whether repositories of the given variant type start enabled.
    pub fn is_treeinfo_type_enabled(&self, variant_type: &str) -> bool {
        self.payload
            .enabled_repositories_from_treeinfo
            .iter()
            .any(|t| t == variant_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = InstallerConfig::default();
        assert!(config.system.can_use_driver_disks);
        assert_eq!(config.payload.createrepo_command, "createrepo_c");
        assert!(config.is_treeinfo_type_enabled("variant"));
        assert!(!config.is_treeinfo_type_enabled("debuginfo"));
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
payload:
  enabled_repositories_from_treeinfo: [variant]
"#;
        let config = InstallerConfig::parse(yaml).unwrap();
        assert!(config.system.can_use_driver_disks);
        assert_eq!(config.payload.createrepo_command, "createrepo_c");
        assert!(config.is_treeinfo_type_enabled("variant"));
        assert!(!config.is_treeinfo_type_enabled("addon"));
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(InstallerConfig::parse("  \n").unwrap(), InstallerConfig::default());
    }

    #[test]
    fn test_unknown_field_has_hint() {
        let err = InstallerConfig::parse("sytem:\n  can_use_driver_disks: false\n").unwrap_err();
        match err {
            Error::ConfigParse { message, hint } => {
                assert!(message.contains("sytem"));
                assert!(hint.is_some());
            }
            other => panic!("Expected ConfigParse, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "system:\n  can_use_driver_disks: false").unwrap();
        let config = InstallerConfig::from_file(file.path()).unwrap();
        assert!(!config.system.can_use_driver_disks);
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("missing.yaml");
        assert!(matches!(
            InstallerConfig::load(Some(&missing)),
            Err(Error::Io(_))
        ));
    }
}
