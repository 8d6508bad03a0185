//! # Common Types and Utilities
//!
//! This module provides the shared types and error handling used throughout
//! the product-id tracking core. It includes:
//! - The error enum and result alias for every core operation
//! - Conversions from library errors into the core error type
//! - Constants for the well-known on-disk locations and metadata names

use std::io::ErrorKind;

/// Default location of the product-id tracking database.
pub const PRODUCT_DB_FILE: &str = "/var/lib/rhsm/productid.js";
/// Directory where product certificates get installed.
pub const PRODUCT_CERT_DIR: &str = "/etc/pki/product";
/// Read-only directory with preinstalled product certificates. A product id
/// found here is considered satisfied and is never rewritten.
pub const DEFAULT_PRODUCT_CERT_DIR: &str = "/etc/pki/product-default";
/// Name of the repository metadata artifact carrying the product certificate.
pub const PRODUCT_ID_METADATA: &str = "productid";

pub type ProductIdResult<R> = Result<R, ProductIdError>;

/// Represents errors that can occur while tracking product certificates
///
/// This enum covers the failure modes of certificate extraction, database
/// persistence and metadata retrieval. Which of them are fatal to a
/// reconciliation run is decided by the caller, not here.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ProductIdError {
    #[error("Malformed certificate")]
    MalformedCertificate,
    #[error("Certificate has no product namespace extension")]
    ProductOidNotFound,
    #[error("File not found")]
    FileNotFound,
    #[error("IO error")]
    Io(String),
    #[error("Malformed product database")]
    DatabaseParse(String),
    #[error("Generic error")]
    Generic(String),
}

impl From<String> for ProductIdError {
    fn from(value: String) -> Self {
        ProductIdError::Generic(value)
    }
}

impl From<&str> for ProductIdError {
    fn from(value: &str) -> Self {
        ProductIdError::Generic(value.to_string())
    }
}

impl From<std::io::Error> for ProductIdError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == ErrorKind::NotFound {
            ProductIdError::FileNotFound
        } else {
            ProductIdError::Io(format!("{:?}", e))
        }
    }
}

impl From<serde_json::Error> for ProductIdError {
    fn from(e: serde_json::Error) -> Self {
        ProductIdError::DatabaseParse(format!("{:?}", e))
    }
}

impl From<reqwest::Error> for ProductIdError {
    fn from(e: reqwest::Error) -> Self {
        ProductIdError::Io(format!("{:?}", e))
    }
}

impl From<tempfile::PersistError> for ProductIdError {
    fn from(e: tempfile::PersistError) -> Self {
        ProductIdError::Io(format!("{:?}", e))
    }
}
