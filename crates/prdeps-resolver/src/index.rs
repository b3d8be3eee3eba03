//! A static package index read from TOML.
//!
//! The index lets prdeps walk a dependency graph without a Go toolchain,
//! for example a graph exported from another build system:
//!
//! ```toml
//! [[package]]
//! import-path = "example.com/app"
//! imports = ["example.com/lib", "fmt"]
//! aliases = ["./app"]
//!
//! [[package]]
//! import-path = "fmt"
//! standard = true
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use prdeps_core::package::Package;
use prdeps_util::errors::PrdepsError;

use crate::resolver::{ResolveError, Resolver};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IndexFile {
    #[serde(default, rename = "package")]
    packages: Vec<IndexEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct IndexEntry {
    import_path: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    dir: String,
    #[serde(default)]
    doc: String,
    #[serde(default)]
    standard: bool,
    #[serde(default)]
    imports: Vec<String>,
    #[serde(default)]
    test_imports: Vec<String>,
    #[serde(default)]
    xtest_imports: Vec<String>,
    /// Other import paths that redirect to this package.
    #[serde(default)]
    aliases: Vec<String>,
}

impl From<IndexEntry> for Package {
    fn from(entry: IndexEntry) -> Self {
        Package {
            import_path: entry.import_path,
            name: entry.name,
            dir: entry.dir,
            doc: entry.doc,
            goroot: entry.standard,
            standard: entry.standard,
            imports: entry.imports,
            test_imports: entry.test_imports,
            xtest_imports: entry.xtest_imports,
        }
    }
}

/// In-memory package metadata keyed by import path, with alias redirects.
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    packages: HashMap<String, Package>,
    aliases: HashMap<String, String>,
}

impl PackageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package, replacing any earlier package with the same path.
    pub fn insert(&mut self, package: Package) {
        self.packages.insert(package.import_path.clone(), package);
    }

    /// Make requests for `alias` resolve to the package at `canonical`.
    pub fn alias(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        self.aliases.insert(alias.into(), canonical.into());
    }

    /// Parse an index from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self, PrdepsError> {
        let file: IndexFile = toml::from_str(content).map_err(|e| PrdepsError::Config {
            message: format!("Failed to parse package index: {e}"),
        })?;

        let mut index = Self::new();
        for mut entry in file.packages {
            for alias in std::mem::take(&mut entry.aliases) {
                index.alias(alias, entry.import_path.clone());
            }
            index.insert(entry.into());
        }
        Ok(index)
    }

    /// Read an index from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, PrdepsError> {
        let content = std::fs::read_to_string(path).map_err(|e| PrdepsError::Config {
            message: format!("Failed to read package index {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl FromIterator<Package> for PackageIndex {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        let mut index = Self::new();
        for package in iter {
            index.insert(package);
        }
        index
    }
}

impl Resolver for PackageIndex {
    fn resolve(&self, import_path: &str) -> Result<Package, ResolveError> {
        let canonical = self
            .aliases
            .get(import_path)
            .map(String::as_str)
            .unwrap_or(import_path);
        self.packages
            .get(canonical)
            .cloned()
            .ok_or_else(|| {
                ResolveError::NotFound(format!("cannot find package {import_path:?} in index"))
            })
    }
}
