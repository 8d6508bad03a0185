//! # Product-ID Tracking Database
//!
//! This module provides the persisted association between product ids and
//! the repositories they were obtained from. The database is the memory of
//! the reconciler: it records which repository justified installing which
//! product certificate, so that certificates whose repositories disappear
//! can be garbage-collected and certificates of merely disabled
//! repositories can be protected.
//!
//! ## On-disk format
//!
//! A single JSON object, keys are product-id strings and values are arrays
//! of repo-id strings, with no further nesting:
//!
//! ```json
//! {"69": ["rhel", "rhel-testing"], "81": ["jboss"]}
//! ```
//!
//! The file is replaced wholesale on every save, through a temporary file
//! in the same directory followed by an atomic rename, so a crash mid-write
//! never leaves a half-written database behind.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::common::{ProductIdError, ProductIdResult};

/// Mapping from product id to the set of repo ids associated with it.
///
/// A (product id, repo id) pair appears at most once, and a product-id key
/// never maps to an empty set: removing the last repo id of a product also
/// removes the key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDb {
    path: PathBuf,
    content: BTreeMap<String, BTreeSet<String>>,
}

impl ProductDb {
    /// Creates an empty database bound to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: BTreeMap::new(),
        }
    }

    /// Loads a database from the file at `path`.
    ///
    /// # Errors
    ///
    /// * `ProductIdError::FileNotFound` - no database file exists yet
    /// * `ProductIdError::Io` - the file exists but cannot be read
    /// * `ProductIdError::DatabaseParse` - the content is not a JSON object
    ///   mapping strings to arrays of strings
    pub fn load(path: impl Into<PathBuf>) -> ProductIdResult<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        let content: BTreeMap<String, BTreeSet<String>> = serde_json::from_str(&text)?;
        Ok(Self { path, content })
    }

    /// Loads the database, substituting an empty one on any failure.
    ///
    /// A missing file is the normal first-run condition and stays quiet; a
    /// corrupt or unreadable file is logged and the database is rebuilt
    /// from scratch by the ongoing run.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load(&path) {
            Ok(db) => db,
            Err(ProductIdError::FileNotFound) => {
                log::debug!("No product database at {}, starting empty", path.display());
                Self::new(path)
            }
            Err(e) => {
                log::warn!(
                    "Unable to read product database {}: {}. Starting empty",
                    path.display(),
                    e
                );
                Self::new(path)
            }
        }
    }

    /// Serializes the database and atomically replaces the file at its path.
    ///
    /// The parent directory must already exist; creating it is the
    /// reconciler's responsibility.
    pub fn save(&self) -> ProductIdResult<()> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| ProductIdError::Io(format!("{} has no parent", self.path.display())))?;
        let text = serde_json::to_string_pretty(&self.content)
            .map_err(|e| ProductIdError::Io(format!("{:?}", e)))?;
        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(text.as_bytes())?;
        temp_file.persist(&self.path)?;
        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of tracked product ids.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn has_product_id(&self, product_id: &str) -> bool {
        self.content.contains_key(product_id)
    }

    /// Whether `repo_id` is recorded against `product_id`.
    pub fn has_repo_id(&self, product_id: &str, repo_id: &str) -> bool {
        self.content
            .get(product_id)
            .is_some_and(|repo_ids| repo_ids.contains(repo_id))
    }

    /// Repo ids associated with a product id, if any.
    pub fn repo_ids(&self, product_id: &str) -> Option<&BTreeSet<String>> {
        self.content.get(product_id)
    }

    /// Iterates over `(product id, repo-id set)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.content.iter()
    }

    /// Tracked product ids in key order.
    pub fn product_ids(&self) -> impl Iterator<Item = &String> {
        self.content.keys()
    }

    /// Records a repo id against a product id, creating the key if absent.
    ///
    /// Idempotent: returns `true` only if the pair was newly inserted.
    pub fn add_repo_id(&mut self, product_id: &str, repo_id: &str) -> bool {
        self.content
            .entry(product_id.to_string())
            .or_default()
            .insert(repo_id.to_string())
    }

    /// Removes the pair if present; returns whether a removal occurred.
    ///
    /// A product-id key whose repo-id set becomes empty is removed with it.
    pub fn remove_repo_id(&mut self, product_id: &str, repo_id: &str) -> bool {
        let Some(repo_ids) = self.content.get_mut(product_id) else {
            return false;
        };
        let removed = repo_ids.remove(repo_id);
        if repo_ids.is_empty() {
            self.content.remove(product_id);
        }
        removed
    }

    /// Removes a product id and its whole repo-id set; returns whether the
    /// key was present.
    pub fn remove_product_id(&mut self, product_id: &str) -> bool {
        self.content.remove(product_id).is_some()
    }
}

/// Human-readable dump of the database, a debugging aid only; persistence
/// goes through [`ProductDb::save`].
impl fmt::Display for ProductDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Path: {}", self.path.display())?;
        writeln!(f, "Contents:")?;
        for (product_id, repo_ids) in &self.content {
            let repo_ids: Vec<&str> = repo_ids.iter().map(String::as_str).collect();
            writeln!(f, "\t{}: {}", product_id, repo_ids.join(" "))?;
        }
        Ok(())
    }
}
