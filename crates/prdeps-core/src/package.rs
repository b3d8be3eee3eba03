use serde::{Deserialize, Serialize};

use crate::options::ImportMode;

/// Import paths that name synthetic packages with no metadata of their own.
pub const PSEUDO_PACKAGES: [&str; 2] = ["C", "unsafe"];

/// Returns `true` for import paths that must never be resolved.
pub fn is_pseudo_package(import_path: &str) -> bool {
    PSEUDO_PACKAGES.contains(&import_path)
}

/// Resolved metadata for a single Go package.
///
/// Field names follow the output of `go list -json`, so a package can be
/// decoded straight from the tool. Only `ImportPath` is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
    /// Canonical import path. May differ from the path that was requested.
    pub import_path: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dir: String,
    #[serde(default)]
    pub doc: String,
    /// Package lives under GOROOT.
    #[serde(default)]
    pub goroot: bool,
    /// Package is part of the standard library.
    #[serde(default)]
    pub standard: bool,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub test_imports: Vec<String>,
    #[serde(default, rename = "XTestImports")]
    pub xtest_imports: Vec<String>,
}

impl Package {
    /// Create a package with the given import path and no dependencies.
    pub fn new(import_path: impl Into<String>) -> Self {
        Self {
            import_path: import_path.into(),
            ..Self::default()
        }
    }

    /// Whether this package belongs to the standard partition.
    pub fn is_standard(&self) -> bool {
        self.goroot || self.standard
    }

    /// The import set followed for the given mode.
    pub fn dependencies(&self, mode: ImportMode) -> &[String] {
        match mode {
            ImportMode::Direct => &self.imports,
            ImportMode::Test => &self.test_imports,
            ImportMode::ExternalTest => &self.xtest_imports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_packages() {
        assert!(is_pseudo_package("C"));
        assert!(is_pseudo_package("unsafe"));
        assert!(!is_pseudo_package("c"));
        assert!(!is_pseudo_package("unsafe/x"));
    }

    #[test]
    fn dependencies_per_mode() {
        let pkg = Package {
            imports: vec!["a".into()],
            test_imports: vec!["b".into()],
            xtest_imports: vec!["c".into()],
            ..Package::new("p")
        };
        assert_eq!(pkg.dependencies(ImportMode::Direct), ["a"]);
        assert_eq!(pkg.dependencies(ImportMode::Test), ["b"]);
        assert_eq!(pkg.dependencies(ImportMode::ExternalTest), ["c"]);
    }
}
