//! Repository contract and composite aggregation for depot.
//!
//! This crate defines the query contract every package source satisfies and
//! the composite that aggregates any number of sources behind that same
//! contract.
//!
//! # Overview
//!
//! - [`Repository`]: the single-source query surface (existence, exact
//!   match, listings, count)
//! - [`CompositeRepository`]: an ordered collection of sources answering as
//!   one, with first-match-wins exact lookups and raw concatenated listings
//! - [`ArrayRepository`]: the in-memory source everything else builds on
//!
//! The composite applies no policy beyond ordering: results are not ranked,
//! deduplicated, or sorted, and a failing source fails the whole call.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use depot_package::Package;
//! use depot_repository::{ArrayRepository, CompositeRepository, Repository};
//!
//! # fn main() -> depot_repository::Result<()> {
//! let mut stable = ArrayRepository::new();
//! stable.add_package(Package::new("ripgrep", "14.1.0"));
//!
//! let mut nightly = ArrayRepository::new();
//! nightly.add_package(Package::new("ripgrep", "14.2.0-beta.1"));
//!
//! let composite = CompositeRepository::new(vec![Arc::new(stable), Arc::new(nightly)]);
//! assert_eq!(composite.count()?, 2);
//! assert_eq!(composite.find_packages_by_name("ripgrep")?.len(), 2);
//!
//! // Exact lookups consult sources in order; the stable repository answers
//! // first for versions it carries.
//! assert!(composite.find_package("ripgrep", "14.1.0")?.is_some());
//! # Ok(())
//! # }
//! ```

pub mod array;
pub mod composite;
pub mod error;
pub mod repository;

pub use array::ArrayRepository;
pub use composite::CompositeRepository;
pub use error::{ErrorContext, RepositoryError, Result};
pub use repository::Repository;
