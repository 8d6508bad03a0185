//! # Active Repository Resolution
//!
//! A repository is "active" when at least one package installed on the
//! system came from it. Only active repositories justify installing or
//! keeping a product certificate; an enabled repository nobody installed
//! from is treated the same as a disabled one.
//!
//! Attribution is linear in the number of installed packages: origins the
//! host already recorded are collected in one scan, and only packages with
//! no recorded origin are matched against repository package listings, by
//! hash lookup rather than a nested scan.

use std::collections::HashSet;

use crate::repository::{InstalledPackage, RepoMetadataProvider, RepoProductId, RepositoryRecord};

/// Computes the set of repo ids that provide at least one installed package.
///
/// Recorded origins win; for packages without one, a repository is
/// attributed when its available-package listing contains the package's
/// NEVRA. Listing failures degrade to "no attribution" for that repository.
pub fn active_repo_ids<M: RepoMetadataProvider>(
    metadata: &M,
    repos: &[&RepositoryRecord],
    installed: &[InstalledPackage],
) -> HashSet<String> {
    let mut active: HashSet<String> = installed
        .iter()
        .filter_map(|package| package.origin_repo_id.clone())
        .collect();

    let unattributed: HashSet<&str> = installed
        .iter()
        .filter(|package| package.origin_repo_id.is_none())
        .map(|package| package.nevra.as_str())
        .collect();
    if unattributed.is_empty() {
        return active;
    }

    for repo in repos {
        if active.contains(&repo.id) {
            continue;
        }
        match metadata.available_packages(repo) {
            Ok(available) => {
                if available
                    .iter()
                    .any(|nevra| unattributed.contains(nevra.as_str()))
                {
                    active.insert(repo.id.clone());
                }
            }
            Err(e) => {
                log::warn!("Unable to list available packages of {}: {}", repo.id, e);
            }
        }
    }
    active
}

/// Keeps the candidates whose repository is active, preserving order.
pub fn resolve_active(
    candidates: Vec<RepoProductId>,
    active_ids: &HashSet<String>,
) -> Vec<RepoProductId> {
    candidates
        .into_iter()
        .filter(|candidate| active_ids.contains(&candidate.repo.id))
        .collect()
}
