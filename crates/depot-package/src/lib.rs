//! Package identity and metadata model for the depot repository crates.
//!
//! This crate defines the two types every repository implementation speaks:
//!
//! - [`PackageId`]: the `(name, version)` pair used for exact lookups
//! - [`Package`]: the metadata a repository index carries for one entry
//!
//! Versions are opaque strings. Repositories compare them for exact equality
//! only; constraint matching and version ordering live outside this crate.

pub mod package;

pub use package::{Package, PackageId};
