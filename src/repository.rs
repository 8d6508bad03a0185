//! # Repositories and Host Collaborators
//!
//! The reconciler does not talk to a package manager directly. The host
//! hands it plain [`RepositoryRecord`]s and implementations of the two
//! collaborator traits defined here: one for repository metadata (product-id
//! artifacts, available package listings) and one for the installed package
//! set. [`crate::fetcher::MetadataFetcher`] is the reference metadata
//! implementation shipped with this crate.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::common::ProductIdResult;

/// A software repository as known to the host package manager.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    /// Opaque repository identifier, e.g. `rhel-9-baseos`.
    pub id: String,
    /// The packages-enabled bit of the repository configuration.
    pub enabled: bool,
    /// Base URL the repository metadata is served from. `file://` URLs and
    /// plain HTTP(S) are both understood by the bundled fetcher; `None`
    /// means metadata cannot be fetched for this repository.
    pub baseurl: Option<String>,
}

/// An installed package identity plus its originating repository, when the
/// host recorded one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPackage {
    /// Name-epoch-version-release-arch identity string.
    pub nevra: String,
    /// Id of the repository the package was installed from, if known.
    pub origin_repo_id: Option<String>,
}

/// Pairs a repository with the product-id certificate located for it during
/// one reconciliation run. Discarded at the end of the run.
#[derive(Clone, Debug)]
pub struct RepoProductId {
    pub repo: RepositoryRecord,
    /// Filesystem path of the certificate artifact, possibly `.gz`.
    pub cert_path: PathBuf,
    /// `true` for artifacts fetched this run, `false` for certificates
    /// found already installed on disk.
    pub newly_fetched: bool,
}

/// Partitions repositories into enabled and disabled, preserving order.
pub fn classify(
    repos: &[RepositoryRecord],
) -> (Vec<&RepositoryRecord>, Vec<&RepositoryRecord>) {
    repos.iter().partition(|repo| repo.enabled)
}

/// Source of repository metadata, typically backed by the host package
/// manager's metadata client.
pub trait RepoMetadataProvider {
    /// Requests that the product-id artifact be downloaded ahead of the
    /// transaction. Best effort; failures must not surface here.
    fn request_product_id_metadata(&self, repo: &RepositoryRecord);

    /// Locates the product-id certificate artifact for a repository.
    ///
    /// `Ok(None)` means the repository does not provide one, which is
    /// common and not an error.
    fn fetch_product_id_artifact(
        &self,
        repo: &RepositoryRecord,
    ) -> ProductIdResult<Option<PathBuf>>;

    /// NEVRA listing of the packages the repository currently provides.
    fn available_packages(&self, repo: &RepositoryRecord) -> ProductIdResult<Vec<String>>;
}

/// Source of the set of packages currently installed on the system.
pub trait InstalledPackageProvider {
    fn installed_packages(&self) -> ProductIdResult<Vec<InstalledPackage>>;
}
