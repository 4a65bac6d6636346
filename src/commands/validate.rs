//! # Validate Command Implementation
//!
//! Checks a repository list without changing it:
//!
//! - **Proxies**: Every configured proxy must be a valid proxy URL.
//! - **Names**: Repository names should be unique within the list.
//! - **URLs**: Enabled repositories should have a url.
//!
//! Invalid proxies are errors; the other findings are warnings, which fail the
//! command only with `--strict`.

use anyhow::{Context, Result};
use clap::Args;
use std::collections::HashSet;
use std::path::PathBuf;

use payload_repos::output::{emoji, OutputConfig};
use payload_repos::proxy::ProxyString;
use payload_repos::repo_config::load_repositories;

/// Validate a list of repositories
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Repository list (YAML) to validate
    #[arg(long, value_name = "FILE")]
    pub repos: PathBuf,

    /// Use strict validation (fail on warnings).
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    println!(
        "{} Validating repositories: {}",
        emoji(&out, "🔍", "[SCAN]"),
        args.repos.display()
    );

    let repositories = load_repositories(&args.repos)
        .with_context(|| format!("Failed to read repositories from {}", args.repos.display()))?;
    println!("   Total repositories: {}", repositories.len());

    let mut has_warnings = false;
    let mut has_errors = false;
    let mut seen_names = HashSet::new();

    for repo in &repositories {
        if let Some(proxy) = repo.proxy() {
            if let Err(e) = ProxyString::parse(proxy) {
                println!(
                    "{} Invalid proxy of repository '{}': {}",
                    emoji(&out, "❌", "[ERR]"),
                    repo.name,
                    e
                );
                has_errors = true;
            }
        }

        if !seen_names.insert(repo.name.as_str()) {
            println!(
                "{} Duplicate repository name '{}'",
                emoji(&out, "⚠️", "[WARN]"),
                repo.name
            );
            has_warnings = true;
        }

        if repo.enabled && repo.url.is_empty() {
            println!(
                "{} Repository '{}' is enabled but has no url",
                emoji(&out, "⚠️", "[WARN]"),
                repo.name
            );
            has_warnings = true;
        }
    }

    if has_errors {
        println!(
            "{} {}",
            emoji(&out, "❌", "[ERR]"),
            out.bad("Repositories have errors that must be fixed")
        );
        return Err(anyhow::anyhow!("Repository validation failed"));
    }

    if has_warnings && args.strict {
        println!(
            "{} Repositories have warnings (strict mode enabled)",
            emoji(&out, "❌", "[ERR]")
        );
        return Err(anyhow::anyhow!("Repository validation failed due to warnings (strict mode)"));
    }

    println!(
        "{} {}",
        emoji(&out, "✅", "[OK]"),
        out.good("Repositories are valid")
    );
    Ok(())
}
