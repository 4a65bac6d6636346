//! # Payload Repositories
//!
//! This library manages the repository records of an installation payload:
//! where packages come from, how those sources are discovered, and how a user
//! interface switches between them. It backs the `payload-repos` command-line
//! tool but can be used on its own.
//!
//! ## Quick Example
//!
//! ```
//! use payload_repos::config::InstallerConfig;
//! use payload_repos::repo_config::{RepoConfigurationData, RepoOrigin};
//! use payload_repos::repositories::{generate_treeinfo_repository, update_treeinfo_repositories};
//! use payload_repos::tree_info::TreeInfoMetadata;
//!
//! let treeinfo = "\
//! [tree]
//! variants = BaseOS
//!
//! [variant-BaseOS]
//! id = BaseOS
//! uid = BaseOS
//! name = BaseOS
//! type = variant
//! repository = BaseOS/os
//! ";
//! let metadata = TreeInfoMetadata::load_data(
//!     treeinfo,
//!     "http://example.com/os",
//!     &InstallerConfig::default(),
//! )
//! .unwrap();
//!
//! let template = RepoConfigurationData::new("anaconda", "http://example.com/os");
//! let generated = metadata
//!     .repositories
//!     .iter()
//!     .map(|md| generate_treeinfo_repository(&template, md))
//!     .collect();
//!
//! let repositories = update_treeinfo_repositories(Vec::new(), generated);
//! assert_eq!(repositories.len(), 1);
//! assert_eq!(repositories[0].origin, RepoOrigin::Treeinfo);
//! assert_eq!(repositories[0].url, "http://example.com/os/BaseOS/os");
//! ```
//!
//! ## Core Concepts
//!
//! - **Repository records (`repo_config`)**: The `RepoConfigurationData` record
//!   and its url type and origin.
//! - **Discovery (`repositories`)**: Driver disk repositories found on the
//!   filesystem, and tree-info repositories generated from tree metadata and
//!   reconciled with an existing list.
//! - **Tree metadata (`tree_info`)**: Reading the `.treeinfo` file of an
//!   installation tree.
//! - **Sources (`source`)**: The URL installation source, which validates and
//!   stores one record and notifies subscribers (`signal`) about changes.
//! - **Proxies (`proxy`)**: Parsing and normalizing proxy URLs.
//! - **User interface helpers (`ui`)**: Source switching and input checks,
//!   independent of any widget toolkit.

pub mod config;
pub mod defaults;
pub mod error;
pub mod kickstart;
pub mod output;
pub mod proxy;
pub mod repo_config;
pub mod repositories;
pub mod signal;
pub mod source;
pub mod tree_info;
pub mod ui;

#[cfg(test)]
mod reconcile_proptest;
