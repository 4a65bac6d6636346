//! # Installation Sources
//!
//! An installation source tells the payload where packages come from. This
//! module defines the common [`PayloadSource`] interface and the source kinds
//! an installer knows about. The URL source, the one source type implemented
//! here, lives in [`url`].

pub mod url;

use crate::repo_config::RepoConfigurationData;
use std::fmt;

pub use self::url::UrlSource;

/// Kinds of installation sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    Cdrom,
    Hdd,
    Nfs,
    Url,
    Hmc,
    ClosestMirror,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            SourceType::Cdrom => "CDROM",
            SourceType::Hdd => "HDD",
            SourceType::Nfs => "NFS",
            SourceType::Url => "URL",
            SourceType::Hmc => "HMC",
            SourceType::ClosestMirror => "CLOSEST_MIRROR",
        };
        f.write_str(token)
    }
}

/// Set-up state of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    Ready,
    Unready,
    /// The source needs no set-up.
    NotApplicable,
}

/// Common interface of installation sources.
pub trait PayloadSource {
    fn source_type(&self) -> SourceType;

    /// A short human-readable description (for a URL source, the url).
    fn description(&self) -> String;

    fn state(&self) -> SourceState;

    /// Whether the source cannot be used without a network.
    fn network_required(&self) -> bool;

    /// Space in bytes the source needs on the target system.
    fn required_space(&self) -> u64;

    /// The repository configuration the payload should use for this source.
    fn generate_repo_configuration(&self) -> RepoConfigurationData;
}

/// Protocols that are fetched over the network.
const NETWORK_PROTOCOLS: [&str; 4] = ["http", "https", "ftp", "nfs"];

/// Whether `url` uses a protocol that requires a network.
///
/// Only the scheme, the text before the first `:`, is looked at. The rest of
/// the url does not need to be well-formed.
///
/// # Examples
///
/// ```
/// use payload_repos::source::has_network_protocol;
///
/// assert!(has_network_protocol("https://example.com/os"));
/// assert!(has_network_protocol("nfs:server:/export/tree"));
/// assert!(!has_network_protocol("file:///run/install/repo"));
/// assert!(!has_network_protocol(""));
/// ```
pub fn has_network_protocol(url: &str) -> bool {
    url.split_once(':').is_some_and(|(scheme, _)| {
        NETWORK_PROTOCOLS
            .iter()
            .any(|protocol| protocol.eq_ignore_ascii_case(scheme))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_protocols() {
        assert!(has_network_protocol("http://example.com"));
        assert!(has_network_protocol("HTTPS://example.com"));
        assert!(has_network_protocol("ftp://example.com/pub"));
        assert!(!has_network_protocol("cdrom"));
        assert!(!has_network_protocol("hd:sda1:/path"));
        assert!(!has_network_protocol("/run/install/repo"));
    }

    #[test]
    fn test_network_protocol_of_malformed_url() {
        assert!(has_network_protocol("http://mirror.example.com:99999/os"));
        assert!(has_network_protocol("http://mirror example.com/os"));
        assert!(has_network_protocol("ftp:"));
        assert!(!has_network_protocol("httpx://example.com"));
        assert!(!has_network_protocol(":http"));
    }

    #[test]
    fn test_source_type_display() {
        assert_eq!(SourceType::ClosestMirror.to_string(), "CLOSEST_MIRROR");
        assert_eq!(SourceType::Hdd.to_string(), "HDD");
    }
}
