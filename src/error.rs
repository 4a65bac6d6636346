//! # Error Handling
//!
//! This module defines the centralized error type for `payload-repos`. It uses
//! the `thiserror` library to build a single `Error` enum covering every
//! anticipated failure mode of the library.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Each variant carries enough context to be
//!   reported to the user without further decoration.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Two variants matter most to callers:
//!
//! - `InvalidConfiguration` is raised synchronously when a source is given a
//!   repository configuration it cannot accept. The source is left unchanged
//!   and the caller may recover (for example by asking for new input).
//! - `ExternalTool` is raised when the repository metadata command cannot be
//!   started or exits unsuccessfully. It aborts the current generation pass.
//!
//! An empty driver disk scan is not an error.

use thiserror::Error;

/// Main error type for payload-repos operations
#[derive(Error, Debug)]
pub enum Error {
    /// A repository configuration was rejected (unknown type, malformed proxy).
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// An external command (e.g. `createrepo_c`) failed.
    #[error("External tool {command} failed for {path}: {message}")]
    ExternalTool {
        command: String,
        path: String,
        message: String,
    },

    /// A `.treeinfo` file could not be interpreted.
    #[error("Tree info error: {message}")]
    TreeInfo { message: String },

    /// The installer configuration file could not be parsed.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A change subscriber refused a notification.
    #[error("Subscriber error: {message}")]
    Subscriber { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// An error while reading a glob match, wrapped from `glob::GlobError`.
    #[error("Glob walk error: {0}")]
    GlobWalk(#[from] glob::GlobError),
}

impl Error {
    /// Shorthand for building an `InvalidConfiguration` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
