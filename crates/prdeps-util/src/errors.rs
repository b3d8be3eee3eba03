use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all prdeps operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PrdepsError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An import path could not be mapped to package metadata.
    #[error("could not locate {import_path:?}: {reason}")]
    Resolution { import_path: String, reason: String },

    /// No usable root import path, or malformed command-line input.
    #[error("{message}")]
    #[diagnostic(help("Usage: prdeps [OPTIONS] <IMPORT_PATH>..."))]
    Usage { message: String },

    /// The output template could not be parsed or executed.
    #[error("Template error: {message}")]
    #[diagnostic(help("Write fields as a dotted name in double braces, e.g. .ImportPath"))]
    Template { message: String },

    /// A configuration file or package index is malformed.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PrdepsResult<T> = miette::Result<T>;
