//! Package identity and index entry metadata.
//!
//! This module defines [`PackageId`], the exact-lookup identity, and
//! [`Package`], the metadata a repository index carries for one entry. The
//! deserialization accepts common quirks found in index files: empty strings
//! are normalized to `None`, and singular aliases are accepted for the list
//! fields (`license` for `licenses`, and so on).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

fn empty_is_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// The `(name, version)` pair that identifies a package for exact lookups.
///
/// Family lookups use the name alone; everything that needs to pinpoint a
/// single entry uses this pair. Both components are opaque strings compared
/// for exact, case-sensitive equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PackageId {
    pub name: String,
    pub version: String,
}

impl PackageId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// Package metadata as carried by a repository index entry.
///
/// Only `name` and `version` are required; the descriptive fields are
/// optional and tolerant of index quirks:
///
/// - empty strings deserialize to `None`
/// - singular field names are accepted as aliases for the list fields
///   (`homepage`, `license`, `maintainer`)
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Package {
    pub name: String,
    pub version: String,

    #[serde(default, deserialize_with = "empty_is_none")]
    pub description: Option<String>,

    #[serde(alias = "homepage")]
    pub homepages: Option<Vec<String>>,

    #[serde(alias = "license")]
    pub licenses: Option<Vec<String>>,

    #[serde(alias = "maintainer")]
    pub maintainers: Option<Vec<String>>,
}

impl Package {
    /// Creates a package with the given identity and no descriptive metadata.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Returns the exact-lookup identity of this package.
    pub fn id(&self) -> PackageId {
        PackageId::new(&self.name, &self.version)
    }

    /// Whether this package is the exact `(name, version)` entry.
    pub fn matches(&self, name: &str, version: &str) -> bool {
        self.name == name && self.version == version
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
