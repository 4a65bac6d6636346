//! Tree-info repositories.
//!
//! Repositories derived from the metadata of an installation tree are marked
//! with the `TREEINFO` origin. They are regenerated from scratch every time the
//! tree is loaded and merged into the repository list with
//! [`update_treeinfo_repositories`].

use crate::repo_config::{RepoConfigurationData, RepoOrigin, UrlType};
use crate::tree_info::TreeInfoRepoMetadata;
use log::debug;
use std::collections::HashSet;

/// Generates a tree-info repository from `template`.
///
/// The result copies the proxy and SSL settings of the template and takes its
/// name, url and enablement from the metadata. Tree-info repositories are never
/// enabled for installation.
pub fn generate_treeinfo_repository(
    template: &RepoConfigurationData,
    repo_md: &TreeInfoRepoMetadata,
) -> RepoConfigurationData {
    RepoConfigurationData {
        origin: RepoOrigin::Treeinfo,
        name: repo_md.name.clone(),
        url_type: UrlType::BaseUrl,
        url: repo_md.url.clone(),
        enabled: repo_md.enabled,
        installation_enabled: false,
        ..template.clone()
    }
}

/// Replaces the tree-info repositories in `repositories`.
///
/// Previously disabled tree-info repositories stay disabled, tree-info
/// repositories pointing at the url of a user repository are dropped, and all
/// old tree-info repositories are replaced by `treeinfo_repositories`, which
/// are appended in their original order.
pub fn update_treeinfo_repositories(
    repositories: Vec<RepoConfigurationData>,
    mut treeinfo_repositories: Vec<RepoConfigurationData>,
) -> Vec<RepoConfigurationData> {
    debug!("Update treeinfo repositories...");

    let disabled: HashSet<String> = repositories
        .iter()
        .filter(|r| r.origin == RepoOrigin::Treeinfo && !r.enabled)
        .map(|r| r.name.clone())
        .collect();

    for repo in &mut treeinfo_repositories {
        if disabled.contains(&repo.name) {
            repo.enabled = false;
        }
    }

    // Don't create duplicates of sources specified by the user.
    let existing: HashSet<String> = repositories
        .iter()
        .filter(|r| r.origin != RepoOrigin::Treeinfo && !r.url.is_empty())
        .map(|r| r.url.clone())
        .collect();

    treeinfo_repositories.retain(|r| !existing.contains(&r.url));

    debug!("Remove all treeinfo repositories.");

    let mut updated: Vec<RepoConfigurationData> = repositories
        .into_iter()
        .filter(|r| r.origin != RepoOrigin::Treeinfo)
        .collect();

    for repo in treeinfo_repositories {
        debug!("Add the '{}' treeinfo repository: {}", repo.name, repo);
        updated.push(repo);
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(name: &str, url: &str, enabled: bool) -> TreeInfoRepoMetadata {
        TreeInfoRepoMetadata {
            name: name.to_string(),
            relative_path: name.to_string(),
            url: url.to_string(),
            variant_type: "variant".to_string(),
            enabled,
        }
    }

    fn treeinfo(name: &str, url: &str, enabled: bool) -> RepoConfigurationData {
        generate_treeinfo_repository(
            &RepoConfigurationData::default(),
            &metadata(name, url, enabled),
        )
    }

    fn user(name: &str, url: &str) -> RepoConfigurationData {
        RepoConfigurationData::new(name, url)
    }

    #[test]
    fn test_generate_overrides_fields() {
        let mut template = RepoConfigurationData::new("anaconda", "http://example.com/mirrors");
        template.url_type = UrlType::MirrorList;
        template.installation_enabled = true;
        template.proxy = Some("http://proxy:3128".to_string());
        template.ssl_verification_enabled = false;
        template.ssl_configuration.ca_cert_path = Some("/ca.pem".to_string());

        let repo = generate_treeinfo_repository(
            &template,
            &metadata("AppStream", "http://example.com/AppStream", false),
        );

        assert_eq!(repo.origin, RepoOrigin::Treeinfo);
        assert_eq!(repo.name, "AppStream");
        assert_eq!(repo.url_type, UrlType::BaseUrl);
        assert_eq!(repo.url, "http://example.com/AppStream");
        assert!(!repo.enabled);
        assert!(!repo.installation_enabled);
        assert_eq!(repo.proxy.as_deref(), Some("http://proxy:3128"));
        assert!(!repo.ssl_verification_enabled);
        assert_eq!(repo.ssl_configuration, template.ssl_configuration);

        // The template is left alone.
        assert_eq!(template.name, "anaconda");
        assert!(template.installation_enabled);
    }

    #[test]
    fn test_update_replaces_old_treeinfo_repositories() {
        let repositories = vec![
            user("user-repo", "http://example.com/user"),
            treeinfo("Old", "http://example.com/Old", true),
        ];
        let updated = update_treeinfo_repositories(
            repositories,
            vec![treeinfo("AppStream", "http://example.com/AppStream", true)],
        );

        let names: Vec<_> = updated.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["user-repo", "AppStream"]);
    }

    #[test]
    fn test_update_keeps_disabled_repositories_disabled() {
        let repositories = vec![treeinfo("AppStream", "http://old/AppStream", false)];
        let updated = update_treeinfo_repositories(
            repositories,
            vec![treeinfo("AppStream", "http://new/AppStream", true)],
        );

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].url, "http://new/AppStream");
        assert!(!updated[0].enabled);
    }

    #[test]
    fn test_update_disabled_user_repository_does_not_disable() {
        let mut disabled_user = user("AppStream", "http://user/AppStream");
        disabled_user.enabled = false;
        let updated = update_treeinfo_repositories(
            vec![disabled_user],
            vec![treeinfo("AppStream", "http://tree/AppStream", true)],
        );
        assert!(updated[1].enabled);
    }

    #[test]
    fn test_update_drops_duplicates_of_user_repositories() {
        let repositories = vec![user("mine", "http://example.com/AppStream")];
        let updated = update_treeinfo_repositories(
            repositories,
            vec![
                treeinfo("AppStream", "http://example.com/AppStream", true),
                treeinfo("CRB", "http://example.com/CRB", true),
            ],
        );

        let names: Vec<_> = updated.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["mine", "CRB"]);
    }

    #[test]
    fn test_update_ignores_empty_user_urls() {
        let repositories = vec![user("empty", "")];
        let updated =
            update_treeinfo_repositories(repositories, vec![treeinfo("Blank", "", true)]);
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn test_update_is_idempotent() {
        let repositories = vec![
            user("user-repo", "http://example.com/user"),
            treeinfo("CRB", "http://example.com/CRB", false),
        ];
        let fresh = vec![
            treeinfo("AppStream", "http://example.com/AppStream", true),
            treeinfo("CRB", "http://example.com/CRB", true),
            treeinfo("dup", "http://example.com/user", true),
        ];

        let once = update_treeinfo_repositories(repositories, fresh.clone());
        let twice = update_treeinfo_repositories(once.clone(), fresh);
        assert_eq!(once, twice);
    }
}
