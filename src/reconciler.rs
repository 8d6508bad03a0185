//! # Product Certificate Reconciliation
//!
//! One reconciliation run per package-manager transaction: figure out which
//! repositories are enabled and active, install product certificates for
//! them, protect associations of repositories that are merely disabled, and
//! garbage-collect certificates no tracked repository justifies anymore.
//!
//! The run is a straight-line pipeline. Directory-creation failure for the
//! database is fatal; everything else degrades per repository with a
//! warning, and a corrupt database is rebuilt rather than aborting.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::active::{active_repo_ids, resolve_active};
use crate::certificate::{extract_product_id, read_certificate};
use crate::common::{
    ProductIdError, ProductIdResult, DEFAULT_PRODUCT_CERT_DIR, PRODUCT_CERT_DIR, PRODUCT_DB_FILE,
};
use crate::product_db::ProductDb;
use crate::repository::{
    classify, InstalledPackageProvider, RepoMetadataProvider, RepoProductId, RepositoryRecord,
};

/// Lifecycle events of the host package manager this core reacts to. Any
/// other host hook is ignored at the boundary, before reaching this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PluginHook {
    /// Configuration phase: request product-id metadata downloads ahead of
    /// the transaction.
    Config,
    /// Transaction phase: run the full reconciliation.
    Transaction,
}

/// Storage locations for one reconciler instance. Explicit context instead
/// of process-wide globals; construct once and pass by reference.
#[derive(Clone, Debug)]
pub struct ReconcilerConfig {
    /// The product-id tracking database file.
    pub product_db_path: PathBuf,
    /// Directory the certificates get installed into.
    pub product_cert_dir: PathBuf,
    /// Read-only directory of preinstalled certificates that take priority.
    pub default_cert_dir: PathBuf,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            product_db_path: PathBuf::from(PRODUCT_DB_FILE),
            product_cert_dir: PathBuf::from(PRODUCT_CERT_DIR),
            default_cert_dir: PathBuf::from(DEFAULT_PRODUCT_CERT_DIR),
        }
    }
}

/// What a reconciliation run did, for host logging.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ReconcileSummary {
    /// Product ids whose certificates were written this run.
    pub installed: Vec<String>,
    /// Product ids whose associations were carried over for disabled repos.
    pub protected: Vec<String>,
    /// Certificate files deleted as orphans.
    pub removed: Vec<String>,
}

pub struct ProductIdReconciler<M, P> {
    config: ReconcilerConfig,
    metadata: M,
    packages: P,
}

impl<M: RepoMetadataProvider, P: InstalledPackageProvider> ProductIdReconciler<M, P> {
    pub fn new(config: ReconcilerConfig, metadata: M, packages: P) -> Self {
        Self {
            config,
            metadata,
            packages,
        }
    }

    /// Dispatches a host lifecycle event.
    pub fn hook(
        &self,
        hook: PluginHook,
        repos: &[RepositoryRecord],
    ) -> ProductIdResult<Option<ReconcileSummary>> {
        match hook {
            PluginHook::Config => {
                self.request_metadata(repos);
                Ok(None)
            }
            PluginHook::Transaction => self.reconcile(repos).map(Some),
        }
    }

    /// Config-phase: ask the metadata provider to download the product-id
    /// artifact of every enabled repository ahead of the transaction.
    pub fn request_metadata(&self, repos: &[RepositoryRecord]) {
        for repo in repos.iter().filter(|repo| repo.enabled) {
            log::debug!("Requesting productid metadata download for {}", repo.id);
            self.metadata.request_product_id_metadata(repo);
        }
    }

    /// Transaction-phase: the full reconciliation run.
    pub fn reconcile(&self, repos: &[RepositoryRecord]) -> ProductIdResult<ReconcileSummary> {
        let db_dir = self.config.product_db_path.parent().ok_or_else(|| {
            ProductIdError::Io(format!(
                "{} has no parent directory",
                self.config.product_db_path.display()
            ))
        })?;
        fs::create_dir_all(db_dir).map_err(|e| {
            log::error!("Unable to create {}: {:?}", db_dir.display(), e);
            ProductIdError::Io(format!("{:?}", e))
        })?;

        let old_db = ProductDb::load_or_default(&self.config.product_db_path);
        log::debug!("Old product database:\n{}", old_db);
        let mut new_db = ProductDb::new(&self.config.product_db_path);
        let mut summary = ReconcileSummary::default();

        let (enabled, disabled) = classify(repos);

        self.protect_disabled(&disabled, &old_db, &mut new_db, &mut summary);

        let candidates = self.acquire_certificates(&enabled, &old_db);

        let installed_packages = match self.packages.installed_packages() {
            Ok(packages) => packages,
            Err(e) => {
                log::warn!("Unable to query installed packages: {}", e);
                Vec::new()
            }
        };
        let active_ids = active_repo_ids(&self.metadata, &enabled, &installed_packages);
        let active = resolve_active(candidates, &active_ids);

        for repo_product_id in &active {
            self.install_certificate(repo_product_id, &mut new_db, &mut summary);
        }

        self.remove_orphans(&new_db, &mut summary);

        new_db.save().map_err(|e| {
            log::error!(
                "Unable to write product database {}: {}",
                self.config.product_db_path.display(),
                e
            );
            e
        })?;
        log::debug!("New product database:\n{}", new_db);
        Ok(summary)
    }

    /// Carries associations of currently disabled repositories over from the
    /// old database, so a previously used repository that is merely disabled
    /// does not lose its certificate.
    fn protect_disabled(
        &self,
        disabled: &[&RepositoryRecord],
        old_db: &ProductDb,
        new_db: &mut ProductDb,
        summary: &mut ReconcileSummary,
    ) {
        for repo in disabled {
            for (product_id, repo_ids) in old_db.iter() {
                if repo_ids.contains(&repo.id) {
                    log::debug!(
                        "Protecting disabled repository {} for product {}",
                        repo.id,
                        product_id
                    );
                    if new_db.add_repo_id(product_id, &repo.id) {
                        summary.protected.push(product_id.clone());
                    }
                }
            }
        }
    }

    /// Locates the certificate artifact of each enabled repository: a live
    /// fetch through the metadata provider, or a certificate already
    /// installed on disk that the old database attributes to the repository.
    /// The two rules are independent; the fallback applies per repository.
    fn acquire_certificates(
        &self,
        enabled: &[&RepositoryRecord],
        old_db: &ProductDb,
    ) -> Vec<RepoProductId> {
        let mut candidates = Vec::new();
        for repo in enabled {
            match self.metadata.fetch_product_id_artifact(repo) {
                Ok(Some(cert_path)) => {
                    log::debug!("Repository {} has a productid certificate", repo.id);
                    candidates.push(RepoProductId {
                        repo: (*repo).clone(),
                        cert_path,
                        newly_fetched: true,
                    });
                    continue;
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Error loading productid metadata for {}: {}", repo.id, e);
                }
            }
            candidates.extend(self.installed_certificates(repo, old_db));
        }
        candidates
    }

    /// Installed-cache fallback: certificates in the product directory whose
    /// product id the old database already associates with this repository.
    fn installed_certificates(
        &self,
        repo: &RepositoryRecord,
        old_db: &ProductDb,
    ) -> Vec<RepoProductId> {
        let mut found = Vec::new();
        for product_id in old_db.product_ids() {
            if !old_db.has_repo_id(product_id, &repo.id) {
                continue;
            }
            let pem_path = self.config.product_cert_dir.join(format!("{}.pem", product_id));
            if pem_path.is_file() {
                log::debug!(
                    "Using installed certificate {} for repository {}",
                    pem_path.display(),
                    repo.id
                );
                found.push(RepoProductId {
                    repo: repo.clone(),
                    cert_path: pem_path,
                    newly_fetched: false,
                });
            }
        }
        found
    }

    /// Installs one active repository's certificate and records the
    /// association. Extraction failures skip the repository; they never
    /// abort the run.
    fn install_certificate(
        &self,
        repo_product_id: &RepoProductId,
        new_db: &mut ProductDb,
        summary: &mut ReconcileSummary,
    ) {
        let repo_id = &repo_product_id.repo.id;

        if !repo_product_id.newly_fetched {
            // Already on disk; only the association needs recording.
            if let Some(product_id) = product_id_from_path(&repo_product_id.cert_path) {
                new_db.add_repo_id(&product_id, repo_id);
            }
            return;
        }

        let pem = match read_certificate(&repo_product_id.cert_path) {
            Ok(pem) => pem,
            Err(e) => {
                log::warn!("Unable to read productid certificate of {}: {}", repo_id, e);
                return;
            }
        };
        let product_id = match extract_product_id(&pem) {
            Ok(product_id) => product_id,
            Err(e) => {
                log::warn!("No product id in certificate of {}: {}", repo_id, e);
                return;
            }
        };

        let default_pem = self.config.default_cert_dir.join(format!("{}.pem", product_id));
        if default_pem.is_file() {
            log::debug!(
                "Product certificate {}.pem already installed in {}",
                product_id,
                self.config.default_cert_dir.display()
            );
            return;
        }

        let target = self.config.product_cert_dir.join(format!("{}.pem", product_id));
        if let Err(e) = fs::create_dir_all(&self.config.product_cert_dir) {
            log::error!(
                "Unable to create {}: {:?}",
                self.config.product_cert_dir.display(),
                e
            );
            return;
        }
        match fs::write(&target, &pem) {
            Ok(()) => {
                log::info!("Product certificate installed to {}", target.display());
                new_db.add_repo_id(&product_id, repo_id);
                summary.installed.push(product_id);
            }
            Err(e) => {
                log::error!("Unable to write certificate {}: {:?}", target.display(), e);
            }
        }
    }

    /// Deletes installed certificates whose product id the new database no
    /// longer tracks.
    fn remove_orphans(&self, new_db: &ProductDb, summary: &mut ReconcileSummary) {
        for path in orphaned_certificates(new_db, &self.config.product_cert_dir) {
            match fs::remove_file(&path) {
                Ok(()) => {
                    log::info!("Removed product certificate {}", path.display());
                    summary.removed.push(path.display().to_string());
                }
                Err(e) => {
                    log::error!("Unable to remove certificate {}: {:?}", path.display(), e);
                }
            }
        }
    }
}

/// Scans a certificate directory for `.pem` files whose all-digit stem is
/// not a key of the database. Files with non-numeric names are not product
/// certificates and are left alone.
pub fn orphaned_certificates(db: &ProductDb, cert_dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(cert_dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Unable to read {}: {:?}", cert_dir.display(), e);
            return Vec::new();
        }
    };
    let mut orphans = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(product_id) = product_id_from_path(&path) else {
            log::debug!("Skipping non-product file {}", path.display());
            continue;
        };
        if !db.has_product_id(&product_id) {
            orphans.push(path);
        }
    }
    orphans
}

/// Product id encoded in a certificate file name: the all-digit stem of a
/// `.pem` file.
fn product_id_from_path(path: &Path) -> Option<String> {
    let extension = path.extension()?;
    if !extension.eq_ignore_ascii_case("pem") {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || !stem.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(stem.to_string())
}
