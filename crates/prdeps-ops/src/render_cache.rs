//! Memoized rendering keyed by `(depth, canonical import path)`.
//!
//! A package reachable along several paths shows up many times at the same
//! depth; only the first occurrence goes through the renderer, later ones
//! write the stored bytes verbatim.

use std::collections::HashMap;
use std::io::Write;

use prdeps_core::package::Package;
use prdeps_core::template::{NodeContext, Renderer};
use prdeps_util::errors::{PrdepsError, PrdepsResult};

#[derive(Debug, Default)]
pub struct RenderCache {
    rendered: HashMap<(usize, String), Vec<u8>>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the block for `package` at `depth` to `out`, rendering it only
    /// if this pair has not been rendered before.
    pub fn render<T, W>(
        &mut self,
        renderer: &T,
        package: &Package,
        depth: usize,
        out: &mut W,
    ) -> PrdepsResult<()>
    where
        T: Renderer + ?Sized,
        W: Write + ?Sized,
    {
        let key = (depth, package.import_path.clone());
        if let Some(bytes) = self.rendered.get(&key) {
            tracing::debug!(import_path = %package.import_path, depth, "replaying rendered node");
            out.write_all(bytes).map_err(PrdepsError::Io)?;
            return Ok(());
        }

        let text = renderer.render(&NodeContext::new(package, depth))?;
        let bytes = text.into_bytes();
        out.write_all(&bytes).map_err(PrdepsError::Io)?;
        self.rendered.insert(key, bytes);
        Ok(())
    }

    /// The stored bytes for a pair, if it has been rendered.
    pub fn get(&self, depth: usize, import_path: &str) -> Option<&[u8]> {
        self.rendered
            .get(&(depth, import_path.to_string()))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}
