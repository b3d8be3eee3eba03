//! The resolver trait and its error type.

use prdeps_core::package::Package;
use thiserror::Error;

/// Why a resolver could not produce metadata for an import path.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No package exists for the import path.
    #[error("{0}")]
    NotFound(String),

    /// The external tool could not be run.
    #[error("failed to run {command}: {message}")]
    Command { command: String, message: String },

    /// The tool ran but produced metadata that could not be decoded.
    #[error("invalid package metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Maps an import path to package metadata.
///
/// The returned package's `import_path` is canonical and may differ from the
/// requested one.
pub trait Resolver {
    fn resolve(&self, import_path: &str) -> Result<Package, ResolveError>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, import_path: &str) -> Result<Package, ResolveError> {
        (**self).resolve(import_path)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn resolve(&self, import_path: &str) -> Result<Package, ResolveError> {
        (**self).resolve(import_path)
    }
}
