//! Depth-first traversal of the import graph.
//!
//! Nodes are written in pre-order: a package's block is emitted before any of
//! its dependencies are visited, and dependencies are visited in ascending
//! byte order of their import paths, each subtree finishing before the next
//! sibling starts. The tree is never materialised.

use std::io::Write;

use prdeps_core::options::TraversalOptions;
use prdeps_core::package::is_pseudo_package;
use prdeps_core::template::{OutputTemplate, Renderer};
use prdeps_resolver::cache::ResolverCache;
use prdeps_resolver::resolver::Resolver;
use prdeps_util::errors::PrdepsResult;

use crate::render_cache::RenderCache;

/// One traversal session. Both caches live as long as the session and are
/// shared by every root it walks.
pub struct Traversal<R, T = OutputTemplate> {
    options: TraversalOptions,
    resolver: ResolverCache<R>,
    renderer: T,
    rendered: RenderCache,
}

impl<R: Resolver, T: Renderer> Traversal<R, T> {
    pub fn new(resolver: R, renderer: T, options: TraversalOptions) -> Self {
        Self {
            options,
            resolver: ResolverCache::new(resolver),
            renderer,
            rendered: RenderCache::new(),
        }
    }

    /// Walk each root in order at depth 0. Stops at the first error.
    pub fn run<I, S, W>(&mut self, roots: I, out: &mut W) -> PrdepsResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        for root in roots {
            tracing::debug!(root = root.as_ref(), "walking root");
            self.visit(root.as_ref(), 0, out)?;
        }
        Ok(())
    }

    /// Visit `import_path` at `depth`, rendering it and then its dependencies.
    pub fn visit<W>(&mut self, import_path: &str, depth: usize, out: &mut W) -> PrdepsResult<()>
    where
        W: Write + ?Sized,
    {
        if is_pseudo_package(import_path) {
            return Ok(());
        }

        let package = self.resolver.resolve(import_path)?;
        if package.is_standard() && !self.options.include_std {
            tracing::trace!(import_path = %package.import_path, "skipping standard package");
            return Ok(());
        }

        self.rendered.render(&self.renderer, &package, depth, out)?;

        let mut deps = package.dependencies(self.options.mode.at_depth(depth)).to_vec();
        deps.sort();

        let depth = depth + 1;
        if !self.options.allows_depth(depth) {
            return Ok(());
        }
        for dep in &deps {
            self.visit(dep, depth, out)?;
        }
        Ok(())
    }

    pub fn options(&self) -> &TraversalOptions {
        &self.options
    }

    pub fn resolver_cache(&self) -> &ResolverCache<R> {
        &self.resolver
    }

    pub fn render_cache(&self) -> &RenderCache {
        &self.rendered
    }

    pub fn renderer(&self) -> &T {
        &self.renderer
    }
}
