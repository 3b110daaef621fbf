//! Composite aggregation over multiple package sources.

use std::sync::Arc;

use depot_package::{Package, PackageId};
use tracing::{debug, trace};

use crate::{error::Result, repository::Repository};

/// An ordered collection of repositories that answers queries as one.
///
/// Every query fans out to the children in insertion order. Existence and
/// exact-match queries stop at the first child that answers; listing and
/// counting queries visit every child and merge the raw results. The merge
/// concatenates: the same identity carried by two children shows up twice,
/// and [`count`](Repository::count) counts it twice. Callers that need
/// distinct entries deduplicate downstream.
///
/// The composite holds no snapshot of its children. Each call re-queries
/// them, so anything added to a child is visible on the next query. Children
/// are shared by reference and may be held by other composites or callers;
/// the composite takes no ownership of them beyond its own handle.
///
/// If a child fails, the call fails with that child's error and the
/// remaining children are not queried. There is no skip-and-continue mode.
///
/// `CompositeRepository` itself implements [`Repository`], so composites
/// nest.
pub struct CompositeRepository {
    repositories: Vec<Arc<dyn Repository>>,
}

impl CompositeRepository {
    /// Creates a composite over the given children. The list may be empty;
    /// an empty composite reports no packages and a count of zero.
    pub fn new(repositories: Vec<Arc<dyn Repository>>) -> Self {
        Self { repositories }
    }

    /// Appends a repository. The new child is consulted after every
    /// existing one, and is visible to all subsequent queries.
    pub fn add_repository(&mut self, repository: Arc<dyn Repository>) {
        self.repositories.push(repository);
    }

    /// The children, in consultation order.
    pub fn repositories(&self) -> &[Arc<dyn Repository>] {
        &self.repositories
    }
}

impl Default for CompositeRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Concatenates per-child results, preserving child order and each child's
/// internal order.
fn merge(results: Vec<Vec<Package>>) -> Vec<Package> {
    let mut merged = Vec::with_capacity(results.iter().map(Vec::len).sum());
    for packages in results {
        merged.extend(packages);
    }
    merged
}

impl Repository for CompositeRepository {
    fn has_package(&self, id: &PackageId) -> Result<bool> {
        for repository in &self.repositories {
            if repository.has_package(id)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn find_package(&self, name: &str, version: &str) -> Result<Option<Package>> {
        debug!(
            "Searching {} repositories for {name}@{version}",
            self.repositories.len()
        );
        for repository in &self.repositories {
            if let Some(package) = repository.find_package(name, version)? {
                return Ok(Some(package));
            }
        }
        Ok(None)
    }

    fn find_packages_by_name(&self, name: &str) -> Result<Vec<Package>> {
        let results = self
            .repositories
            .iter()
            .map(|repository| repository.find_packages_by_name(name))
            .collect::<Result<Vec<_>>>()?;
        Ok(merge(results))
    }

    fn packages(&self) -> Result<Vec<Package>> {
        trace!("Enumerating {} repositories", self.repositories.len());
        let results = self
            .repositories
            .iter()
            .map(|repository| repository.packages())
            .collect::<Result<Vec<_>>>()?;
        Ok(merge(results))
    }

    fn count(&self) -> Result<usize> {
        let mut total = 0;
        for repository in &self.repositories {
            total += repository.count()?;
        }
        Ok(total)
    }
}
