//! The kickstart `url` command.
//!
//! `UrlData` is the record a kickstart parser produces for the `url` command
//! and the record a source fills in when the configuration is written back.
//! Parsing kickstart text is left to the kickstart parser; this module only
//! renders the command line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields of the kickstart `url` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlData {
    pub url: String,
    pub mirrorlist: String,
    pub metalink: String,
    pub proxy: String,
    pub noverifyssl: bool,
    pub sslcacert: String,
    pub sslclientcert: String,
    pub sslclientkey: String,
    /// Set once the command was written, so it is rendered.
    pub seen: bool,
}

impl UrlData {
    /// Loads a `url` record stored as YAML.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

impl fmt::Display for UrlData {
    /// Renders `url --url="..." --proxy="..." ...`, or nothing if not seen.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.seen {
            return Ok(());
        }

        write!(f, "url")?;
        if !self.url.is_empty() {
            write!(f, " --url=\"{}\"", self.url)?;
        } else if !self.mirrorlist.is_empty() {
            write!(f, " --mirrorlist=\"{}\"", self.mirrorlist)?;
        } else if !self.metalink.is_empty() {
            write!(f, " --metalink=\"{}\"", self.metalink)?;
        }

        if !self.proxy.is_empty() {
            write!(f, " --proxy=\"{}\"", self.proxy)?;
        }
        if self.noverifyssl {
            write!(f, " --noverifyssl")?;
        }
        if !self.sslcacert.is_empty() {
            write!(f, " --sslcacert=\"{}\"", self.sslcacert)?;
        }
        if !self.sslclientcert.is_empty() {
            write!(f, " --sslclientcert=\"{}\"", self.sslclientcert)?;
        }
        if !self.sslclientkey.is_empty() {
            write!(f, " --sslclientkey=\"{}\"", self.sslclientkey)?;
        }
        writeln!(f)
    }
}
