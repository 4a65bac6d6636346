//! # Repository Configuration Records
//!
//! `RepoConfigurationData` describes one package repository. Records are
//! plain values: they are cloned whenever they move between the generators,
//! the reconciler and a source, and no sub-object is ever shared between two
//! records.
//!
//! ## Key Components
//!
//! - **`UrlType`**: How the `url` of a record is interpreted (`BASEURL`,
//!   `MIRRORLIST` or `METALINK`).
//! - **`RepoOrigin`**: Where a record came from. `TREEINFO` marks records that
//!   were derived from install tree metadata and may be regenerated at will.
//! - **`SslConfiguration`**: Optional certificate and key paths.
//!
//! Records serialize to YAML/JSON with upper-case enum tokens, so a
//! repository list file looks like this:
//!
//! ```yaml
//! - name: AppStream
//!   url: http://example.com/AppStream
//!   type: BASEURL
//!   origin: TREEINFO
//!   enabled: true
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the url of a repository is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UrlType {
    /// The url points directly at the repository.
    #[default]
    BaseUrl,
    /// The url points at a list of mirrors.
    MirrorList,
    /// The url points at a metalink document.
    Metalink,
}

/// All supported url types, in kickstart priority order.
pub const URL_TYPES: [UrlType; 3] = [UrlType::BaseUrl, UrlType::MirrorList, UrlType::Metalink];

impl UrlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlType::BaseUrl => "BASEURL",
            UrlType::MirrorList => "MIRRORLIST",
            UrlType::Metalink => "METALINK",
        }
    }
}

impl fmt::Display for UrlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrlType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        URL_TYPES
            .into_iter()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| Error::invalid(format!("Invalid source type set '{}'", value)))
    }
}

impl TryFrom<String> for UrlType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<UrlType> for String {
    fn from(value: UrlType) -> Self {
        value.as_str().to_string()
    }
}

/// Provenance of a repository record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RepoOrigin {
    /// Configured by the installer itself.
    System,
    /// Declared by the user (kickstart, UI, boot options).
    #[default]
    User,
    /// Derived from the metadata of an installation tree.
    Treeinfo,
}

impl fmt::Display for RepoOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            RepoOrigin::System => "SYSTEM",
            RepoOrigin::User => "USER",
            RepoOrigin::Treeinfo => "TREEINFO",
        };
        f.write_str(token)
    }
}

/// SSL certificate configuration of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SslConfiguration {
    /// Path to the CA certificate used to verify the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert_path: Option<String>,
    /// Path to the client certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_cert_path: Option<String>,
    /// Path to the client private key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_key_path: Option<String>,
}

/// Configuration of a single package repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoConfigurationData {
    /// Identifier of the repository, unique within a list by convention.
    pub name: String,
    /// Location of the repository; its meaning depends on `url_type`.
    pub url: String,
    #[serde(rename = "type")]
    pub url_type: UrlType,
    pub origin: RepoOrigin,
    /// Whether the repository is used at all.
    pub enabled: bool,
    /// Whether the repository takes part in the installation transaction.
    pub installation_enabled: bool,
    /// Proxy URL, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    pub ssl_verification_enabled: bool,
    pub ssl_configuration: SslConfiguration,
}

impl Default for RepoConfigurationData {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            url_type: UrlType::BaseUrl,
            origin: RepoOrigin::User,
            enabled: true,
            installation_enabled: false,
            proxy: None,
            ssl_verification_enabled: true,
            ssl_configuration: SslConfiguration::default(),
        }
    }
}

impl RepoConfigurationData {
    /// Creates a record with the given name and url and defaults elsewhere.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// The proxy, treating an empty string like no proxy at all.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref().filter(|p| !p.is_empty())
    }
}

impl fmt::Display for RepoConfigurationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}, origin={}, enabled={}, installation_enabled={})",
            self.name,
            self.url_type,
            self.url,
            self.origin,
            self.enabled,
            self.installation_enabled
        )
    }
}

/// Turns an empty string into `None`.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Loads a repository list from a YAML file.
pub fn load_repositories<P: AsRef<std::path::Path>>(path: P) -> Result<Vec<RepoConfigurationData>> {
    let content = std::fs::read_to_string(path)?;
    parse_repositories(&content)
}

/// Parses a repository list from YAML. An empty document is an empty list.
pub fn parse_repositories(yaml_content: &str) -> Result<Vec<RepoConfigurationData>> {
    if yaml_content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(yaml_content)?)
}
