//! Memoizing front for a [`Resolver`].
//!
//! Packages are stored under the canonical import path the resolver returns.
//! A later request for the same canonical path is served from the cache; a
//! request for an alias goes back to the resolver, because the alias itself
//! is never a key.

use std::collections::HashMap;
use std::rc::Rc;

use prdeps_core::package::Package;
use prdeps_util::errors::PrdepsError;

use crate::resolver::Resolver;

/// Resolver cache for one traversal session.
#[derive(Debug)]
pub struct ResolverCache<R> {
    resolver: R,
    packages: HashMap<String, Rc<Package>>,
}

impl<R: Resolver> ResolverCache<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            packages: HashMap::new(),
        }
    }

    /// Resolve `import_path`, consulting the cache first.
    ///
    /// Failure is fatal for the caller's traversal and carries the requested
    /// import path.
    pub fn resolve(&mut self, import_path: &str) -> Result<Rc<Package>, PrdepsError> {
        if let Some(pkg) = self.packages.get(import_path) {
            tracing::trace!(import_path, "resolver cache hit");
            return Ok(Rc::clone(pkg));
        }

        tracing::debug!(import_path, "resolving");
        let pkg = self
            .resolver
            .resolve(import_path)
            .map_err(|e| PrdepsError::Resolution {
                import_path: import_path.to_string(),
                reason: e.to_string(),
            })?;

        if pkg.import_path != import_path {
            tracing::debug!(
                import_path,
                canonical = %pkg.import_path,
                "resolved to canonical path"
            );
        }
        let pkg = Rc::new(pkg);
        self.packages.insert(pkg.import_path.clone(), Rc::clone(&pkg));
        Ok(pkg)
    }

    /// Whether a package is cached under `canonical`.
    pub fn contains(&self, canonical: &str) -> bool {
        self.packages.contains_key(canonical)
    }

    /// Number of cached packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// The wrapped resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}
