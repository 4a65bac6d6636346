//! # Repository Generation and Reconciliation
//!
//! This module produces the auxiliary repositories of an installation and
//! merges them into the authoritative repository list.
//!
//! ## Components
//!
//! - **`driver_disk`**: Scans `<path>/DD-1`, `<path>/DD-2`, ... for driver
//!   disk packages, creating repository metadata where it is missing.
//! - **`treeinfo`**: Derives repositories from install tree metadata and
//!   reconciles them with the existing list, preserving the user's decisions.
//!
//! All functions here are synchronous. The only blocking call is the metadata
//! command run by [`driver_disk::CreaterepoCommand`].

pub mod driver_disk;
pub mod treeinfo;

pub use driver_disk::{generate_driver_disk_repositories, CreaterepoCommand, RepoMetadataGenerator};
pub use treeinfo::{generate_treeinfo_repository, update_treeinfo_repositories};
