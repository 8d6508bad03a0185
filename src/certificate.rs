//! # Product Certificate Inspection
//!
//! A product-id certificate is an X.509 certificate whose only interesting
//! payload is a custom extension under the vendor's product namespace arc.
//! The trailing numeric component of that extension's OID is the product id.
//!
//! Certificates arrive either as plain PEM files or gzip-compressed metadata
//! artifacts, so reading from disk transparently handles the `.gz` suffix.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use x509_certificate::X509Certificate;

use crate::common::{ProductIdError, ProductIdResult};

/// The vendor OID arc plus ".1", the product namespace.
pub const PRODUCT_OID_PREFIX: &str = "1.3.6.1.4.1.2312.9.1";

/// Zero-based position of the product id within a product namespace OID.
const PRODUCT_ID_COMPONENT: usize = 9;

/// Extracts the product id carried by a PEM-encoded product certificate.
///
/// Scans the certificate extensions for the first OID under the product
/// namespace and returns its component at position 9, e.g. `"69"` for
/// `1.3.6.1.4.1.2312.9.1.69.1`.
///
/// # Errors
///
/// * `ProductIdError::MalformedCertificate` - the bytes do not parse as a
///   PEM X.509 certificate, or a matching OID is too short to carry an id
/// * `ProductIdError::ProductOidNotFound` - a well-formed certificate with
///   no product namespace extension (e.g. a consumer identity certificate)
pub fn extract_product_id(pem: &[u8]) -> ProductIdResult<String> {
    let certificate =
        X509Certificate::from_pem(pem).map_err(|_| ProductIdError::MalformedCertificate)?;
    for extension in certificate.iter_extensions() {
        let oid = extension.id.to_string();
        if oid.starts_with(PRODUCT_OID_PREFIX) {
            let components: Vec<&str> = oid.split('.').collect();
            return match components.get(PRODUCT_ID_COMPONENT) {
                Some(product_id) => Ok((*product_id).to_string()),
                None => Err(ProductIdError::MalformedCertificate),
            };
        }
    }
    Err(ProductIdError::ProductOidNotFound)
}

/// Reads a certificate artifact from disk, decompressing gzip content when
/// the file name carries a `.gz` suffix.
pub fn read_certificate(path: &Path) -> ProductIdResult<Vec<u8>> {
    let is_gzip = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("gz"));
    let file = File::open(path)?;
    let mut pem = Vec::new();
    if is_gzip {
        GzDecoder::new(file).read_to_end(&mut pem)?;
    } else {
        let mut file = file;
        file.read_to_end(&mut pem)?;
    }
    Ok(pem)
}
