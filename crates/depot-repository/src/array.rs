//! In-memory package source.

use std::io::Read;

use depot_package::{Package, PackageId};

use crate::{error::Result, repository::Repository};

/// A repository backed by an in-memory list of packages.
///
/// This is the simplest source satisfying the [`Repository`] contract, and
/// the one concrete sources hand their parsed index entries to. Packages are
/// kept in insertion order, which is the order every listing query reports.
#[derive(Debug, Default, Clone)]
pub struct ArrayRepository {
    packages: Vec<Package>,
}

impl ArrayRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given packages, in order.
    pub fn from_packages(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    /// Loads a repository from a JSON array of packages.
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let packages: Vec<Package> = serde_json::from_reader(reader)?;
        Ok(Self { packages })
    }

    /// Appends a package. No uniqueness check is made; adding the same
    /// identity twice means it is listed and counted twice.
    pub fn add_package(&mut self, package: Package) {
        self.packages.push(package);
    }

    /// Removes the first entry with the given identity. Returns whether an
    /// entry was removed.
    pub fn remove_package(&mut self, id: &PackageId) -> bool {
        match self
            .packages
            .iter()
            .position(|p| p.matches(&id.name, &id.version))
        {
            Some(index) => {
                self.packages.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Repository for ArrayRepository {
    fn has_package(&self, id: &PackageId) -> Result<bool> {
        Ok(self
            .packages
            .iter()
            .any(|p| p.matches(&id.name, &id.version)))
    }

    fn find_package(&self, name: &str, version: &str) -> Result<Option<Package>> {
        Ok(self
            .packages
            .iter()
            .find(|p| p.matches(name, version))
            .cloned())
    }

    fn find_packages_by_name(&self, name: &str) -> Result<Vec<Package>> {
        Ok(self
            .packages
            .iter()
            .filter(|p| p.name == name)
            .cloned()
            .collect())
    }

    fn packages(&self) -> Result<Vec<Package>> {
        Ok(self.packages.clone())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.packages.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArrayRepository {
        ArrayRepository::from_packages(vec![
            Package::new("a", "1.0"),
            Package::new("a", "2.0"),
            Package::new("b", "1.0"),
        ])
    }

    #[test]
    fn test_queries() {
        let repo = sample();
        assert_eq!(repo.count().unwrap(), 3);
        assert!(repo.has_package(&PackageId::new("a", "2.0")).unwrap());
        assert!(!repo.has_package(&PackageId::new("a", "3.0")).unwrap());

        let found = repo.find_package("b", "1.0").unwrap().unwrap();
        assert_eq!(found.id(), PackageId::new("b", "1.0"));
        assert_eq!(repo.find_package("b", "2.0").unwrap(), None);

        let versions: Vec<String> = repo
            .find_packages_by_name("a")
            .unwrap()
            .into_iter()
            .map(|p| p.version)
            .collect();
        assert_eq!(versions, vec!["1.0", "2.0"]);
    }

    #[test]
    fn test_add_and_remove() {
        let mut repo = ArrayRepository::new();
        assert_eq!(repo.count().unwrap(), 0);

        repo.add_package(Package::new("a", "1.0"));
        repo.add_package(Package::new("a", "1.0"));
        assert_eq!(repo.count().unwrap(), 2);

        assert!(repo.remove_package(&PackageId::new("a", "1.0")));
        assert_eq!(repo.count().unwrap(), 1);
        assert!(!repo.remove_package(&PackageId::new("b", "1.0")));
    }

    #[test]
    fn test_from_json_reader() {
        let json = r#"[
            {"name": "ripgrep", "version": "14.1.0"},
            {"name": "ripgrep", "version": "14.1.1", "description": "fast grep"}
        ]"#;

        let repo = ArrayRepository::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(repo.count().unwrap(), 2);
        assert_eq!(repo.find_packages_by_name("ripgrep").unwrap().len(), 2);

        let invalid = ArrayRepository::from_json_reader(&b"{not json"[..]);
        assert!(invalid.is_err());
    }
}
