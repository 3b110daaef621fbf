//! The single-source query contract.

use depot_package::{Package, PackageId};

use crate::error::Result;

/// The query surface every package source answers.
///
/// A repository is any source of versioned packages that can answer
/// existence, exact-match, and listing queries. All operations are pure
/// queries: absence is a normal outcome (`Ok(false)`, `Ok(None)`, an empty
/// vector, zero), while `Err` means the source itself failed to answer and
/// the caller sees that failure unchanged.
///
/// Implementors include the in-memory [`ArrayRepository`] and the
/// [`CompositeRepository`], which satisfies this same contract while
/// delegating to any number of children.
///
/// [`ArrayRepository`]: crate::ArrayRepository
/// [`CompositeRepository`]: crate::CompositeRepository
pub trait Repository {
    /// Whether the exact `(name, version)` entry exists in this source.
    fn has_package(&self, id: &PackageId) -> Result<bool>;

    /// Finds the exact `(name, version)` entry, if present.
    fn find_package(&self, name: &str, version: &str) -> Result<Option<Package>>;

    /// Lists every version of `name` this source carries, in source-defined
    /// order.
    fn find_packages_by_name(&self, name: &str) -> Result<Vec<Package>>;

    /// Lists the full contents of this source.
    fn packages(&self) -> Result<Vec<Package>>;

    /// The number of entries this source carries.
    fn count(&self) -> Result<usize>;
}
