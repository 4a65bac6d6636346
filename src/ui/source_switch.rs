//! Switching the installation source from a user interface.
//!
//! [`SourceSwitchHandler`] makes sure exactly one source is active: every
//! `set_source_*` method tears the existing source down before the new one is
//! activated. A hard drive ISO source protects the partition holding the ISO,
//! so tearing such a source down releases that protection again.

use crate::error::Result;
use crate::repo_config::{non_empty, RepoConfigurationData, UrlType};
use crate::source::SourceType;

/// A source to activate, with the parameters of its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRequest {
    Cdrom,
    Hdd { partition: String, directory: String },
    Nfs { url: String },
    Url { repo_configuration: RepoConfigurationData },
    Hmc,
    ClosestMirror { updates_enabled: bool },
}

impl SourceRequest {
    pub fn source_type(&self) -> SourceType {
        match self {
            SourceRequest::Cdrom => SourceType::Cdrom,
            SourceRequest::Hdd { .. } => SourceType::Hdd,
            SourceRequest::Nfs { .. } => SourceType::Nfs,
            SourceRequest::Url { .. } => SourceType::Url,
            SourceRequest::Hmc => SourceType::Hmc,
            SourceRequest::ClosestMirror { .. } => SourceType::ClosestMirror,
        }
    }
}

/// The payload whose sources are switched.
pub trait SourcePayload {
    /// The currently active source, if any.
    fn active_source(&self) -> Option<SourceRequest>;

    fn tear_down_sources(&mut self) -> Result<()>;

    fn set_source(&mut self, source: SourceRequest) -> Result<()>;
}

/// Protection of storage devices against modification.
pub trait DeviceProtection {
    fn mark_protected_device(&mut self, device_name: &str);

    fn unmark_protected_device(&mut self, device_name: &str);
}

/// Builds an NFS source url: `nfs:[options:]server:path`.
///
/// # Examples
///
/// ```
/// use payload_repos::ui::source_switch::create_nfs_url;
///
/// assert_eq!(create_nfs_url("server", "/export", None), "nfs:server:/export");
/// assert_eq!(create_nfs_url("server", "/export", Some("nfsvers=4")), "nfs:nfsvers=4:server:/export");
/// assert_eq!(create_nfs_url("", "/export", None), "");
/// ```
pub fn create_nfs_url(host: &str, path: &str, options: Option<&str>) -> String {
    if host.is_empty() {
        return String::new();
    }
    match options.filter(|o| !o.is_empty()) {
        Some(options) => format!("nfs:{}:{}:{}", options, host, path),
        None => format!("nfs:{}:{}", host, path),
    }
}

/// Switches the installation source of a payload.
pub struct SourceSwitchHandler<P, D> {
    payload: P,
    devices: D,
}

impl<P: SourcePayload, D: DeviceProtection> SourceSwitchHandler<P, D> {
    pub fn new(payload: P, devices: D) -> Self {
        Self { payload, devices }
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn devices(&self) -> &D {
        &self.devices
    }

    pub fn into_parts(self) -> (P, D) {
        (self.payload, self.devices)
    }

    fn tear_down_existing_source(&mut self) -> Result<()> {
        if let Some(SourceRequest::Hdd { partition, .. }) = self.payload.active_source() {
            if !partition.is_empty() {
                self.devices.unmark_protected_device(&partition);
            }
        }
        self.payload.tear_down_sources()
    }

    fn switch_to(&mut self, source: SourceRequest) -> Result<()> {
        log::debug!("Switching the installation source to {}.", source.source_type());
        self.payload.set_source(source)
    }

    /// Switches to an ISO image on a hard drive partition.
    pub fn set_source_hdd_iso(&mut self, device_name: &str, iso_path: &str) -> Result<()> {
        self.tear_down_existing_source()?;

        let source = SourceRequest::Hdd {
            partition: device_name.to_string(),
            directory: format!("/{}", iso_path),
        };
        self.devices.mark_protected_device(device_name);
        self.switch_to(source)
    }

    /// Switches to a source given by a url.
    pub fn set_source_url(&mut self, url: &str, url_type: UrlType, proxy: Option<&str>) -> Result<()> {
        self.tear_down_existing_source()?;

        let repo_configuration = RepoConfigurationData {
            url: url.to_string(),
            url_type,
            proxy: proxy.and_then(non_empty),
            ..Default::default()
        };
        self.switch_to(SourceRequest::Url { repo_configuration })
    }

    pub fn set_source_nfs(&mut self, server: &str, directory: &str, opts: Option<&str>) -> Result<()> {
        self.tear_down_existing_source()?;

        let url = create_nfs_url(server, directory, opts);
        self.switch_to(SourceRequest::Nfs { url })
    }

    pub fn set_source_cdrom(&mut self) -> Result<()> {
        self.tear_down_existing_source()?;
        self.switch_to(SourceRequest::Cdrom)
    }

    /// Switches to the installation media of the hardware management console.
    pub fn set_source_hmc(&mut self) -> Result<()> {
        self.tear_down_existing_source()?;
        self.switch_to(SourceRequest::Hmc)
    }

    pub fn set_source_closest_mirror(&mut self, updates_enabled: bool) -> Result<()> {
        self.tear_down_existing_source()?;
        self.switch_to(SourceRequest::ClosestMirror { updates_enabled })
    }
}
