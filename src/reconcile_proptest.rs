//! Property-based tests for tree-info reconciliation.
//!
//! These tests generate random repository lists and verify that the
//! reconciliation invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::repo_config::{RepoConfigurationData, RepoOrigin};
    use crate::repositories::update_treeinfo_repositories;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn any_origin() -> impl Strategy<Value = RepoOrigin> {
        prop_oneof![
            Just(RepoOrigin::System),
            Just(RepoOrigin::User),
            Just(RepoOrigin::Treeinfo),
        ]
    }

    // Small name and url alphabets so collisions actually happen.
    fn any_repo(origin: impl Strategy<Value = RepoOrigin>) -> impl Strategy<Value = RepoConfigurationData> {
        ("[a-d]", prop_oneof![Just(String::new()), "http://host/[a-e]"], origin, any::<bool>())
            .prop_map(|(name, url, origin, enabled)| RepoConfigurationData {
                name,
                url,
                origin,
                enabled,
                ..Default::default()
            })
    }

    fn any_list() -> impl Strategy<Value = Vec<RepoConfigurationData>> {
        prop::collection::vec(any_repo(any_origin()), 0..8)
    }

    // Names within one tree are unique.
    fn any_treeinfo_list() -> impl Strategy<Value = Vec<RepoConfigurationData>> {
        (
            prop::sample::subsequence(vec!["a", "b", "c", "d"], 0..=4),
            prop::collection::vec(any_repo(Just(RepoOrigin::Treeinfo)), 4),
        )
            .prop_map(|(names, repos)| {
                names
                    .into_iter()
                    .zip(repos)
                    .map(|(name, repo)| RepoConfigurationData {
                        name: name.to_string(),
                        ..repo
                    })
                    .collect()
            })
    }

    proptest! {
        /// Property: applying the same tree-info list twice changes nothing
        #[test]
        fn reconciliation_is_idempotent(repos in any_list(), generated in any_treeinfo_list()) {
            let once = update_treeinfo_repositories(repos, generated.clone());
            let twice = update_treeinfo_repositories(once.clone(), generated);
            prop_assert_eq!(once, twice);
        }

        /// Property: non-tree-info records are kept unchanged and in order
        #[test]
        fn other_origins_are_preserved(repos in any_list(), generated in any_treeinfo_list()) {
            let expected: Vec<_> = repos
                .iter()
                .filter(|r| r.origin != RepoOrigin::Treeinfo)
                .cloned()
                .collect();
            let result = update_treeinfo_repositories(repos, generated);
            let kept: Vec<_> = result
                .into_iter()
                .filter(|r| r.origin != RepoOrigin::Treeinfo)
                .collect();
            prop_assert_eq!(kept, expected);
        }

        /// Property: a disabled tree-info name never comes back enabled
        #[test]
        fn disabled_names_stay_disabled(repos in any_list(), generated in any_treeinfo_list()) {
            let disabled: HashSet<String> = repos
                .iter()
                .filter(|r| r.origin == RepoOrigin::Treeinfo && !r.enabled)
                .map(|r| r.name.clone())
                .collect();
            let result = update_treeinfo_repositories(repos, generated);
            for repo in result.iter().filter(|r| r.origin == RepoOrigin::Treeinfo) {
                prop_assert!(
                    !(disabled.contains(&repo.name) && repo.enabled),
                    "Repository '{}' was re-enabled",
                    repo.name
                );
            }
        }

        /// Property: no tree-info record shares a url with another origin
        #[test]
        fn user_urls_are_not_duplicated(repos in any_list(), generated in any_treeinfo_list()) {
            let result = update_treeinfo_repositories(repos, generated);
            let urls: HashSet<&str> = result
                .iter()
                .filter(|r| r.origin != RepoOrigin::Treeinfo && !r.url.is_empty())
                .map(|r| r.url.as_str())
                .collect();
            for repo in result.iter().filter(|r| r.origin == RepoOrigin::Treeinfo) {
                prop_assert!(!urls.contains(repo.url.as_str()));
            }
        }

        /// Property: every tree-info record in the result comes from the new list
        #[test]
        fn stale_treeinfo_records_are_removed(repos in any_list(), generated in any_treeinfo_list()) {
            let result = update_treeinfo_repositories(repos, generated.clone());
            let treeinfo_count = result.iter().filter(|r| r.origin == RepoOrigin::Treeinfo).count();
            prop_assert!(treeinfo_count <= generated.len());
            for repo in result.iter().filter(|r| r.origin == RepoOrigin::Treeinfo) {
                prop_assert!(generated.iter().any(|g| g.name == repo.name && g.url == repo.url));
            }
        }
    }
}
