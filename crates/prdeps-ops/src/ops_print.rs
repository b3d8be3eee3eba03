//! Operation: print the import graph of one or more packages.

use std::io::Write;
use std::path::PathBuf;

use prdeps_core::config::GoConfig;
use prdeps_core::options::TraversalOptions;
use prdeps_core::srcroot;
use prdeps_core::template::OutputTemplate;
use prdeps_resolver::golist::GoListResolver;
use prdeps_resolver::index::PackageIndex;
use prdeps_resolver::resolver::Resolver;
use prdeps_util::errors::{PrdepsError, PrdepsResult};

use crate::traverse::Traversal;

/// Options for `prdeps`.
#[derive(Debug, Default)]
pub struct PrintOptions {
    /// Root import paths. When empty, the package in the current directory is used.
    pub roots: Vec<String>,
    pub traversal: TraversalOptions,
    /// Output template; the default template when `None`.
    pub format: Option<String>,
    /// Resolve from this package index instead of running `go list`.
    pub packages: Option<PathBuf>,
    pub go: GoConfig,
}

/// Print the import graph rooted at each of `opts.roots` to `out`.
///
/// The template, roots and resolver are all settled before the first package
/// is resolved, so configuration errors never produce partial output.
pub fn print_deps<W: Write + ?Sized>(opts: &PrintOptions, out: &mut W) -> PrdepsResult<()> {
    let template = match opts.format {
        Some(ref format) => OutputTemplate::parse(format)?,
        None => OutputTemplate::default(),
    };

    let roots = if opts.roots.is_empty() {
        let root = srcroot::default_root()?;
        tracing::debug!(%root, "derived root from working directory");
        vec![root]
    } else {
        opts.roots.clone()
    };

    let resolver: Box<dyn Resolver> = match opts.packages {
        Some(ref path) => Box::new(PackageIndex::from_path(path)?),
        None => Box::new(GoListResolver::from_config(&opts.go)),
    };

    let mut traversal = Traversal::new(resolver, template, opts.traversal.clone());
    let result = traversal.run(&roots, out);
    out.flush().map_err(PrdepsError::Io)?;
    result
}
