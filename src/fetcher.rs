//! # Repository Metadata Fetcher
//!
//! Reference [`RepoMetadataProvider`] backed by a local cache directory.
//! Product-id artifacts live next to the repository metadata as
//! `repodata/productid`, optionally gzip-compressed as
//! `repodata/productid.gz`. Sources are plain HTTP(S) or `file://` URLs.
//!
//! Retrieval is cache-first: the config-phase prefetch fills the cache and
//! the transaction-phase lookup reuses it without another round trip.
//!
//! Available packages are read from `repodata/pkglist`, a newline-separated
//! NEVRA listing. Real repodata parsing belongs to the host metadata
//! client; this keeps the reference implementation self-contained.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::common::{ProductIdError, ProductIdResult, PRODUCT_ID_METADATA};
use crate::repository::{RepoMetadataProvider, RepositoryRecord};

/// Name of the available-package listing artifact.
const PKGLIST_METADATA: &str = "pkglist";

#[derive(Debug)]
pub struct MetadataFetcher {
    cache_directory: PathBuf,
}

impl MetadataFetcher {
    /// Creates a fetcher, making sure the cache directory exists.
    pub fn new(cache_directory: impl Into<PathBuf>) -> ProductIdResult<Self> {
        let cache_directory = cache_directory.into();
        fs::create_dir_all(&cache_directory)?;
        Ok(Self { cache_directory })
    }

    fn cache_path(&self, repo_id: &str, suffix: &str) -> PathBuf {
        self.cache_directory
            .join(format!("{}-{}{}", repo_id, PRODUCT_ID_METADATA, suffix))
    }

    fn metadata_url(repo: &RepositoryRecord, name: &str) -> Option<String> {
        repo.baseurl
            .as_ref()
            .map(|baseurl| format!("{}/repodata/{}", baseurl.trim_end_matches('/'), name))
    }

    fn cached_artifact(&self, repo: &RepositoryRecord) -> Option<PathBuf> {
        ["", ".gz"]
            .iter()
            .map(|suffix| self.cache_path(&repo.id, suffix))
            .find(|path| path.is_file())
    }

    /// Downloads `url` into `destination`.
    ///
    /// `Ok(false)` means the source has no such file (HTTP 404 or a missing
    /// local path); other failures are real errors.
    fn download(url: &str, destination: &Path) -> ProductIdResult<bool> {
        if let Some(source) = url.strip_prefix("file://") {
            return match fs::copy(source, destination) {
                Ok(_) => Ok(true),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
                Err(e) => Err(e.into()),
            };
        }
        let response = reqwest::blocking::get(url)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(ProductIdError::Io(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }
        let content = response.bytes()?;
        fs::write(destination, &content)?;
        Ok(true)
    }

    fn fetch_to_cache(&self, repo: &RepositoryRecord) -> ProductIdResult<Option<PathBuf>> {
        if let Some(cached) = self.cached_artifact(repo) {
            return Ok(Some(cached));
        }
        for suffix in ["", ".gz"] {
            let name = format!("{}{}", PRODUCT_ID_METADATA, suffix);
            let Some(url) = Self::metadata_url(repo, &name) else {
                return Ok(None);
            };
            let destination = self.cache_path(&repo.id, suffix);
            if Self::download(&url, &destination)? {
                log::debug!(
                    "Productid certificate of {} cached at {}",
                    repo.id,
                    destination.display()
                );
                return Ok(Some(destination));
            }
        }
        Ok(None)
    }
}

impl RepoMetadataProvider for MetadataFetcher {
    fn request_product_id_metadata(&self, repo: &RepositoryRecord) {
        match self.fetch_to_cache(repo) {
            Ok(Some(_)) => {}
            Ok(None) => {
                log::debug!("Repository {} does not provide a productid certificate", repo.id);
            }
            Err(e) => {
                log::warn!("Unable to prefetch productid metadata for {}: {}", repo.id, e);
            }
        }
    }

    fn fetch_product_id_artifact(
        &self,
        repo: &RepositoryRecord,
    ) -> ProductIdResult<Option<PathBuf>> {
        self.fetch_to_cache(repo)
    }

    fn available_packages(&self, repo: &RepositoryRecord) -> ProductIdResult<Vec<String>> {
        let Some(url) = Self::metadata_url(repo, PKGLIST_METADATA) else {
            return Ok(Vec::new());
        };
        let text = if let Some(source) = url.strip_prefix("file://") {
            match fs::read_to_string(source) {
                Ok(text) => text,
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
                Err(e) => return Err(e.into()),
            }
        } else {
            let response = reqwest::blocking::get(&url)?;
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(Vec::new());
            }
            if !response.status().is_success() {
                return Err(ProductIdError::Io(format!(
                    "GET {} returned {}",
                    url,
                    response.status()
                )));
            }
            response.text()?
        };
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
