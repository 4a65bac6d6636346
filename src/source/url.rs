//! The URL installation source.
//!
//! A `UrlSource` owns exactly one [`RepoConfigurationData`]. Setting a new
//! configuration validates it, replaces the stored record and notifies the
//! subscribers of `repo_configuration_changed`, in that order.

use super::{has_network_protocol, PayloadSource, SourceState, SourceType};
use crate::error::{Error, Result};
use crate::kickstart::UrlData;
use crate::proxy::ProxyString;
use crate::repo_config::{non_empty, RepoConfigurationData, UrlType, URL_TYPES};
use crate::signal::Signal;
use log::debug;
use std::fmt;

/// An installation source given by a url, mirror list or metalink.
#[derive(Debug, Default)]
pub struct UrlSource {
    repo_configuration: RepoConfigurationData,
    /// Emitted with the new configuration after every successful update.
    pub repo_configuration_changed: Signal<RepoConfigurationData>,
}

impl UrlSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repo_configuration(&self) -> &RepoConfigurationData {
        &self.repo_configuration
    }

    /// Validates and stores a new repository configuration.
    ///
    /// On a validation error the current configuration is kept. Subscriber
    /// errors are returned after the new configuration has been stored.
    /// Empty proxy and certificate paths are stored as `None`.
    pub fn set_repo_configuration(&mut self, mut repo_configuration: RepoConfigurationData) -> Result<()> {
        validate_url_type(repo_configuration.url_type)?;
        validate_proxy(repo_configuration.proxy())?;

        let ssl = &mut repo_configuration.ssl_configuration;
        for value in [
            &mut repo_configuration.proxy,
            &mut ssl.ca_cert_path,
            &mut ssl.client_cert_path,
            &mut ssl.client_key_path,
        ] {
            if value.as_deref() == Some("") {
                *value = None;
            }
        }

        self.repo_configuration = repo_configuration;
        self.repo_configuration_changed.emit(&self.repo_configuration)?;
        debug!("The repo_configuration is set to {}", self.repo_configuration);
        Ok(())
    }

    /// Applies the kickstart `url` command.
    ///
    /// The first non-empty of `url`, `mirrorlist` and `metalink` decides both
    /// the url and its type.
    pub fn process_kickstart(&mut self, data: &UrlData) -> Result<()> {
        let mut repo_data = RepoConfigurationData::default();

        if !data.url.is_empty() {
            repo_data.url = data.url.clone();
            repo_data.url_type = UrlType::BaseUrl;
        } else if !data.mirrorlist.is_empty() {
            repo_data.url = data.mirrorlist.clone();
            repo_data.url_type = UrlType::MirrorList;
        } else if !data.metalink.is_empty() {
            repo_data.url = data.metalink.clone();
            repo_data.url_type = UrlType::Metalink;
        }

        repo_data.proxy = non_empty(&data.proxy);
        repo_data.ssl_verification_enabled = !data.noverifyssl;
        repo_data.ssl_configuration.ca_cert_path = non_empty(&data.sslcacert);
        repo_data.ssl_configuration.client_cert_path = non_empty(&data.sslclientcert);
        repo_data.ssl_configuration.client_key_path = non_empty(&data.sslclientkey);

        self.set_repo_configuration(repo_data)
    }

    /// Writes the current configuration into the kickstart `url` command.
    pub fn setup_kickstart(&self, data: &mut UrlData) {
        let repo = &self.repo_configuration;

        match repo.url_type {
            UrlType::BaseUrl => data.url = repo.url.clone(),
            UrlType::MirrorList => data.mirrorlist = repo.url.clone(),
            UrlType::Metalink => data.metalink = repo.url.clone(),
        }

        data.proxy = repo.proxy().unwrap_or_default().to_string();
        data.noverifyssl = !repo.ssl_verification_enabled;
        let ssl = &repo.ssl_configuration;
        data.sslcacert = ssl.ca_cert_path.clone().unwrap_or_default();
        data.sslclientcert = ssl.client_cert_path.clone().unwrap_or_default();
        data.sslclientkey = ssl.client_key_path.clone().unwrap_or_default();

        data.seen = true;
    }
}

impl PayloadSource for UrlSource {
    fn source_type(&self) -> SourceType {
        SourceType::Url
    }

    fn description(&self) -> String {
        self.repo_configuration.url.clone()
    }

    fn state(&self) -> SourceState {
        SourceState::NotApplicable
    }

    fn network_required(&self) -> bool {
        has_network_protocol(&self.repo_configuration.url)
    }

    fn required_space(&self) -> u64 {
        0
    }

    fn generate_repo_configuration(&self) -> RepoConfigurationData {
        self.repo_configuration.clone()
    }
}

impl fmt::Display for UrlSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Source(type='URL', url='{}')", self.repo_configuration.url)
    }
}

fn validate_url_type(url_type: UrlType) -> Result<()> {
    if !URL_TYPES.contains(&url_type) {
        return Err(Error::invalid(format!("Invalid source type set '{}'", url_type)));
    }
    Ok(())
}

fn validate_proxy(proxy: Option<&str>) -> Result<()> {
    let Some(proxy) = proxy else {
        return Ok(());
    };

    ProxyString::parse(proxy).map_err(|e| {
        let reason = match e {
            Error::InvalidConfiguration { message } => message,
            other => other.to_string(),
        };
        Error::invalid(format!("Proxy URL does not have valid format: {}", reason))
    })?;
    Ok(())
}
