//! # Install Tree Metadata
//!
//! An installation tree describes its repositories in a `.treeinfo` file, an
//! INI document in the productmd format:
//!
//! ```ini
//! [release]
//! name = Fedora
//! version = 40
//!
//! [tree]
//! variants = BaseOS,AppStream
//!
//! [variant-BaseOS]
//! id = BaseOS
//! uid = BaseOS
//! type = variant
//! repository = BaseOS
//! ```
//!
//! Every variant becomes a [`TreeInfoRepoMetadata`] whose url is the variant's
//! repository path joined to the root url of the tree. A variant starts enabled
//! when its type is listed in
//! `payload.enabled_repositories_from_treeinfo` of the installer configuration.
//!
//! Old trees without a `[tree]` section describe a single repository in
//! `[general] repository`.

use crate::config::InstallerConfig;
use crate::error::{Error, Result};
use ini::{Ini, Properties};
use std::path::Path;

/// Name of the metadata file at the root of an installation tree.
pub const TREE_INFO_FILE: &str = ".treeinfo";

/// Metadata of one repository described by a `.treeinfo` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeInfoRepoMetadata {
    pub name: String,
    /// Path of the repository relative to the tree root.
    pub relative_path: String,
    pub url: String,
    /// The productmd variant type (`variant`, `addon`, `optional`, ...).
    pub variant_type: String,
    pub enabled: bool,
}

/// Release information and repositories of an installation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeInfoMetadata {
    pub release_name: Option<String>,
    pub release_version: Option<String>,
    pub repositories: Vec<TreeInfoRepoMetadata>,
}

impl TreeInfoMetadata {
    /// Loads `<root>/.treeinfo`, or the given file if `path` is a file.
    pub fn load_file(path: &Path, root_url: &str, config: &InstallerConfig) -> Result<Self> {
        let file = if path.is_dir() {
            path.join(TREE_INFO_FILE)
        } else {
            path.to_path_buf()
        };
        let content = std::fs::read_to_string(&file)?;
        Self::load_data(&content, root_url, config)
    }

    /// Parses the content of a `.treeinfo` file.
    pub fn load_data(content: &str, root_url: &str, config: &InstallerConfig) -> Result<Self> {
        let ini = Ini::load_from_str(content).map_err(|e| Error::TreeInfo {
            message: format!("cannot parse the tree metadata: {}", e),
        })?;

        let release = ini.section(Some("release")).or_else(|| ini.section(Some("general")));
        let release_name = release.and_then(|s| s.get("name")).map(str::to_string);
        let release_version = release.and_then(|s| s.get("version")).map(str::to_string);

        let repositories = match ini.section(Some("tree")) {
            Some(tree) => load_variants(&ini, tree, root_url, config)?,
            None => load_legacy(&ini, release_name.as_deref(), root_url, config)?,
        };

        Ok(Self {
            release_name,
            release_version,
            repositories,
        })
    }

    /// The repository at the root of the tree, if any.
    pub fn base_repository(&self) -> Option<&TreeInfoRepoMetadata> {
        self.repositories
            .iter()
            .find(|r| normalize_relative_path(&r.relative_path).is_empty())
    }

    /// Repositories other than the base repository.
    pub fn auxiliary_repositories(&self) -> impl Iterator<Item = &TreeInfoRepoMetadata> {
        let base_url = self.base_repository().map(|r| r.url.clone());
        self.repositories
            .iter()
            .filter(move |r| Some(&r.url) != base_url.as_ref())
    }
}

fn load_variants(
    ini: &Ini,
    tree: &Properties,
    root_url: &str,
    config: &InstallerConfig,
) -> Result<Vec<TreeInfoRepoMetadata>> {
    let variants = tree.get("variants").unwrap_or_default();
    let mut repositories = Vec::new();

    for variant in variants.split(',').map(str::trim).filter(|v| !v.is_empty()) {
        let section_name = format!("variant-{}", variant);
        let section = ini.section(Some(section_name.as_str())).ok_or_else(|| Error::TreeInfo {
            message: format!("missing section [{}]", section_name),
        })?;

        let Some(relative_path) = section.get("repository") else {
            log::debug!("Variant {} has no repository, skipping it.", variant);
            continue;
        };

        let name = section
            .get("uid")
            .or_else(|| section.get("id"))
            .unwrap_or(variant);
        let variant_type = section.get("type").unwrap_or("variant");

        repositories.push(TreeInfoRepoMetadata {
            name: name.to_string(),
            relative_path: relative_path.to_string(),
            url: join_url(root_url, relative_path),
            variant_type: variant_type.to_string(),
            enabled: config.is_treeinfo_type_enabled(variant_type),
        });
    }

    Ok(repositories)
}

fn load_legacy(
    ini: &Ini,
    release_name: Option<&str>,
    root_url: &str,
    config: &InstallerConfig,
) -> Result<Vec<TreeInfoRepoMetadata>> {
    let relative_path = ini
        .section(Some("general"))
        .and_then(|s| s.get("repository"))
        .ok_or_else(|| Error::TreeInfo {
            message: "neither [tree] variants nor [general] repository are defined".to_string(),
        })?;

    Ok(vec![TreeInfoRepoMetadata {
        name: release_name.unwrap_or("base").to_string(),
        relative_path: relative_path.to_string(),
        url: join_url(root_url, relative_path),
        variant_type: "variant".to_string(),
        enabled: config.is_treeinfo_type_enabled("variant"),
    }])
}

fn normalize_relative_path(path: &str) -> &str {
    let mut path = path.trim().trim_matches('/');
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.trim_start_matches('/');
    }
    if path == "." {
        ""
    } else {
        path
    }
}

/// Joins a repository path to the root url of a tree.
pub fn join_url(root_url: &str, relative_path: &str) -> String {
    let root = root_url.trim_end_matches('/');
    match normalize_relative_path(relative_path) {
        "" => root.to_string(),
        path => format!("{}/{}", root, path),
    }
}
