//! # Output Configuration
//!
//! Controls how the CLI presents results: whether status markers use emoji
//! and color, and how repository lists are rendered as text.
//!
//! Color is decided by the `--color=never|always|auto` flag. In `auto` mode
//! it is disabled by `NO_COLOR`, `CLICOLOR=0` or `TERM=dumb`, forced by
//! `CLICOLOR_FORCE=1`, and otherwise follows the terminal capabilities
//! reported by the `console` crate.

use crate::repo_config::RepoConfigurationData;
use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Creates an output configuration from the environment and the `--color` flag.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Colors `text` green when colors are enabled.
    pub fn good(&self, text: &str) -> String {
        if self.use_color {
            console::style(text).green().to_string()
        } else {
            text.to_string()
        }
    }

    /// Colors `text` red when colors are enabled.
    pub fn bad(&self, text: &str) -> String {
        if self.use_color {
            console::style(text).red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled and the plain marker otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// Renders repositories as an aligned plain-text table.
pub fn render_repositories(repositories: &[RepoConfigurationData]) -> String {
    let name_width = repositories
        .iter()
        .map(|r| r.name.len())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or_default();

    let mut out = format!("{:<name_width$}  {:<10}  {:<8}  {:<7}  URL\n", "NAME", "TYPE", "ORIGIN", "ENABLED");
    for repo in repositories {
        out.push_str(&format!(
            "{:<name_width$}  {:<10}  {:<8}  {:<7}  {}\n",
            repo.name,
            repo.url_type.as_str(),
            repo.origin.to_string(),
            if repo.enabled { "yes" } else { "no" },
            repo.url
        ));
    }
    out
}
