//! # Product-ID Certificate Tracking
//!
//! Core of a package-manager plugin that keeps the installed product
//! certificates of a Linux subscription-management stack in sync with the
//! repositories actually in use. It tracks which repository justified each
//! certificate in a small JSON database, installs certificates for active
//! repositories, protects the entries of disabled ones, and removes
//! certificates nothing tracks anymore.
//!
//! The host package manager stays behind the collaborator traits in
//! [`repository`]; [`reconciler::ProductIdReconciler`] drives one run per
//! transaction.

pub mod active;
pub mod certificate;
pub mod common;
pub mod fetcher;
pub mod product_db;
pub mod reconciler;
pub mod repository;
